use serde::{Deserialize, Serialize};

/// How particles behave at the surface edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Bounce off the edge, losing 30% of the axis velocity.
    #[default]
    Reflect,
    /// Leave one edge and re-enter from the opposite one.
    Wrap,
}

/// Particle pool tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    /// Pool size on regular viewports.
    pub capacity: usize,
    /// Pool size when the viewport is narrower than `narrow_width`.
    pub narrow_capacity: usize,
    pub narrow_width: f32,
    pub boundary: BoundaryMode,
    pub size_range: (f32, f32),
    pub mass_range: (f32, f32),
    pub max_speed: f32,
    pub opacity_range: (f32, f32),
    /// Life lost per tick; life starts at 1.0.
    pub decay_range: (f32, f32),
    /// Upper bound on a single attractor's force magnitude.
    pub force_cap: f32,
    /// Attractors closer than this are ignored to avoid the 1/d² singularity.
    pub epsilon: f32,
    /// Per-axis random acceleration added every tick.
    pub jitter: f32,
    /// Particles spawned at a click position.
    pub click_spawn: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            narrow_capacity: 50,
            narrow_width: 768.0,
            boundary: BoundaryMode::Reflect,
            size_range: (1.0, 3.0),
            mass_range: (1.0, 2.0),
            max_speed: 2.0,
            opacity_range: (0.2, 0.6),
            decay_range: (0.001, 0.004),
            force_cap: 2.0,
            epsilon: 5.0,
            jitter: 0.02,
            click_spawn: 4,
        }
    }
}

/// Strength/radius pair for one attractor tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttractorTier {
    pub strength: f32,
    pub radius: f32,
}

impl AttractorTier {
    pub const fn new(strength: f32, radius: f32) -> Self {
        Self { strength, radius }
    }
}

/// Attractor tiers. Active anchors must dominate inactive ones by
/// at least [`MIN_STRENGTH_RATIO`] in strength and [`MIN_RADIUS_RATIO`] in radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttractorConfig {
    pub inactive: AttractorTier,
    pub active: AttractorTier,
    pub pointer: AttractorTier,
}

pub const MIN_STRENGTH_RATIO: f32 = 3.0;
pub const MIN_RADIUS_RATIO: f32 = 1.5;

impl Default for AttractorConfig {
    fn default() -> Self {
        Self {
            inactive: AttractorTier::new(40.0, 150.0),
            active: AttractorTier::new(200.0, 300.0),
            pointer: AttractorTier::new(80.0, 200.0),
        }
    }
}

/// Soft capacity per effect family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub max_rings: usize,
    pub max_bolts: usize,
    pub max_bursts: usize,
    pub max_vortex: usize,
    /// Trail queue length; older samples are evicted regardless of age.
    pub trail_length: usize,
    /// Chance per tick-and-anchor of a lightning bolt from a nearby pointer.
    pub lightning_chance: f32,
    /// Pointer-to-anchor distance below which lightning may strike.
    pub lightning_range: f32,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            max_rings: 120,
            max_bolts: 40,
            max_bursts: 64,
            max_vortex: 96,
            trail_length: 15,
            lightning_chance: 0.03,
            lightning_range: 200.0,
        }
    }
}

/// Connection graph tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Different-category anchors closer than this are linked.
    pub threshold: f32,
    /// Pulse phase advance per tick (radians).
    pub pulse_speed: f32,
    /// Energy above which an anchor counts as active for its links.
    pub energy_threshold: f32,
    /// Links weaker than this are only drawn while active.
    pub min_visible_strength: f32,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            threshold: 400.0,
            pulse_speed: 0.15,
            energy_threshold: 30.0,
            min_visible_strength: 0.4,
        }
    }
}

/// Render loop tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopConfig {
    /// Fixed simulation step in seconds.
    pub fixed_dt: f32,
    /// Ticks between anchor re-scans.
    pub anchor_refresh_interval: u64,
    /// Easing factor for intensity.
    pub intensity_easing: f32,
    pub max_intensity: f32,
    /// Target intensity before any pointer activity.
    pub idle_intensity: f32,
    /// Hover zone margin around anchors.
    pub hover_margin: f32,
    /// Draw the status overlay.
    pub overlay: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            anchor_refresh_interval: 20,
            intensity_easing: 0.1,
            max_intensity: 2.5,
            idle_intensity: 0.3,
            hover_margin: 50.0,
            overlay: true,
        }
    }
}

/// Complete engine configuration. Every section may be omitted from JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub seed: u64,
    pub particles: ParticleConfig,
    pub attractors: AttractorConfig,
    pub effects: EffectsConfig,
    pub connections: ConnectionConfig,
    #[serde(rename = "loop")]
    pub frame_loop: LoopConfig,
}

impl FieldConfig {
    /// Parse a configuration from a JSON string and validate it.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: FieldConfig = serde_json::from_str(json)?;
        Ok(config.validated())
    }

    /// Clamp out-of-range values so the simulation stays well-defined.
    pub fn validated(mut self) -> Self {
        let p = &mut self.particles;
        if p.capacity == 0 {
            log::warn!("particles.capacity must be positive, using 1");
            p.capacity = 1;
        }
        p.narrow_capacity = p.narrow_capacity.clamp(1, p.capacity);
        p.max_speed = p.max_speed.max(0.0);
        p.epsilon = p.epsilon.max(0.001);
        p.force_cap = p.force_cap.max(0.0);
        p.mass_range.0 = p.mass_range.0.max(0.01);
        p.mass_range.1 = p.mass_range.1.max(p.mass_range.0);

        let a = &mut self.attractors;
        let min_strength = a.inactive.strength * MIN_STRENGTH_RATIO;
        if a.active.strength < min_strength {
            log::warn!(
                "active attractor strength {} below {}x inactive, raising to {}",
                a.active.strength, MIN_STRENGTH_RATIO, min_strength
            );
            a.active.strength = min_strength;
        }
        let min_radius = a.inactive.radius * MIN_RADIUS_RATIO;
        if a.active.radius < min_radius {
            log::warn!(
                "active attractor radius {} below {}x inactive, raising to {}",
                a.active.radius, MIN_RADIUS_RATIO, min_radius
            );
            a.active.radius = min_radius;
        }
        if a.pointer.strength >= a.active.strength {
            a.pointer.strength = a.active.strength * 0.5;
        }

        let l = &mut self.frame_loop;
        if l.fixed_dt <= 0.0 || !l.fixed_dt.is_finite() {
            l.fixed_dt = LoopConfig::default().fixed_dt;
        }
        l.anchor_refresh_interval = l.anchor_refresh_interval.max(1);
        l.intensity_easing = l.intensity_easing.clamp(0.0, 1.0);
        l.max_intensity = l.max_intensity.max(0.0);

        self.effects.trail_length = self.effects.trail_length.max(1);
        self.connections.threshold = self.connections.threshold.max(0.0);
        self
    }

    /// Pool capacity for a viewport of the given width.
    pub fn capacity_for_width(&self, width: f32) -> usize {
        if width < self.particles.narrow_width {
            self.particles.narrow_capacity
        } else {
            self.particles.capacity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = FieldConfig::from_json("{}").unwrap();
        assert_eq!(config, FieldConfig::default().validated());
        assert_eq!(config.particles.capacity, 100);
    }

    #[test]
    fn partial_override() {
        let json = r#"{
            "seed": 9,
            "particles": { "capacity": 30, "boundary": "wrap" },
            "loop": { "overlay": false }
        }"#;
        let config = FieldConfig::from_json(json).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.particles.capacity, 30);
        assert_eq!(config.particles.boundary, BoundaryMode::Wrap);
        assert_eq!(config.particles.narrow_capacity, 30);
        assert!(!config.frame_loop.overlay);
        assert_eq!(config.connections.threshold, 400.0);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(FieldConfig::from_json("{ particles: ").is_err());
    }

    #[test]
    fn weak_active_tier_is_raised() {
        let json = r#"{ "attractors": { "active": { "strength": 50.0, "radius": 160.0 } } }"#;
        let config = FieldConfig::from_json(json).unwrap();
        let a = &config.attractors;
        assert!(a.active.strength >= a.inactive.strength * MIN_STRENGTH_RATIO);
        assert!(a.active.radius >= a.inactive.radius * MIN_RADIUS_RATIO);
        assert!(a.pointer.strength < a.active.strength);
    }

    #[test]
    fn narrow_viewports_get_smaller_pool() {
        let config = FieldConfig::default();
        assert_eq!(config.capacity_for_width(400.0), 50);
        assert_eq!(config.capacity_for_width(1280.0), 100);
    }
}
