//! Visual effects system: rings, bolts, bursts, pointer trail and vortex markers.
//!
//! This module provides the `EffectRegistry` facade for spawning and aging all
//! ephemeral effects, plus the individual effect types if they are needed directly.

mod rng;
mod effect;
mod ring;
mod bolt;
mod burst;
mod trail;
mod vortex;

// Re-export public types
pub use rng::Rng;
pub use effect::{Effect, EffectFamily, Lifespan};
pub use ring::{Ring, RingSpec};
pub use bolt::{jittered_path, Bolt, BoltSpec, CLICK_ARC, LIGHTNING};
pub use burst::{Burst, BurstSpec, CLICK_STAR};
pub use trail::TrailPoint;
pub use vortex::{VortexMarker, VORTEX_MARKERS};

use std::collections::VecDeque;

use glam::Vec2;

use crate::api::config::EffectsConfig;
use crate::renderer::draw_list::DrawList;

const HOVER_RINGS: usize = 5;
const CLICK_RINGS: usize = 6;

/// Container for all live effects: one queue per family, each in spawn
/// order (oldest first). Families draw in [`EffectFamily::ALL`] order.
/// Spawns never fail: a family at its soft cap evicts its oldest members first.
pub struct EffectRegistry {
    families: [VecDeque<Effect>; EffectFamily::COUNT],
    config: EffectsConfig,
    rng: Rng,
}

impl EffectRegistry {
    /// Create a new registry with the given RNG seed.
    pub fn new(config: EffectsConfig, seed: u64) -> Self {
        EffectRegistry {
            families: std::array::from_fn(|_| VecDeque::new()),
            config,
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    fn cap(&self, family: EffectFamily) -> usize {
        match family {
            EffectFamily::Ring => self.config.max_rings,
            EffectFamily::Bolt => self.config.max_bolts,
            EffectFamily::Burst => self.config.max_bursts,
            EffectFamily::Trail => self.config.trail_length,
            EffectFamily::Vortex => self.config.max_vortex,
        }
    }

    /// Insert one effect, evicting the oldest of its family while at capacity.
    pub fn spawn(&mut self, effect: Effect) {
        let family = effect.family();
        let cap = self.cap(family).max(1);
        let queue = &mut self.families[family.index()];
        while queue.len() >= cap {
            queue.pop_front();
            // Trail eviction is the normal case, not degradation.
            if family != EffectFamily::Trail {
                log::debug!("evicted oldest {:?} effect, soft cap {}", family, cap);
            }
        }
        queue.push_back(effect);
    }

    pub fn spawn_ring(&mut self, center: Vec2, spec: RingSpec) {
        self.spawn(Effect::Ring(Ring::new(center, spec)));
    }

    /// Five staggered rings around a freshly hovered anchor.
    pub fn spawn_shockwave(&mut self, center: Vec2) {
        for i in 0..HOVER_RINGS {
            self.spawn_ring(center, ring::shockwave(i));
        }
    }

    /// Six rings at a click position.
    pub fn spawn_explosion(&mut self, center: Vec2) {
        for i in 0..CLICK_RINGS {
            self.spawn_ring(center, ring::explosion(i));
        }
    }

    pub fn spawn_pulse_wave(&mut self, center: Vec2) {
        self.spawn_ring(center, ring::pulse_wave());
    }

    /// `count` rings at random points over a surface of `size`.
    pub fn spawn_scatter(&mut self, size: Vec2, count: usize) {
        for _ in 0..count {
            let center = self.rng.point_in(size);
            let max_radius = self.rng.range(60.0, 140.0);
            self.spawn_ring(center, ring::scatter(max_radius));
        }
    }

    pub fn spawn_bolt(&mut self, start: Vec2, end: Vec2, spec: BoltSpec) {
        let bolt = Bolt::new(start, end, spec, &mut self.rng);
        self.spawn(Effect::Bolt(bolt));
    }

    pub fn spawn_lightning(&mut self, start: Vec2, end: Vec2) {
        self.spawn_bolt(start, end, LIGHTNING);
    }

    pub fn spawn_arc(&mut self, start: Vec2, end: Vec2) {
        self.spawn_bolt(start, end, CLICK_ARC);
    }

    /// Radially symmetric star of bursts.
    pub fn spawn_star(&mut self, origin: Vec2, spec: &BurstSpec) {
        for ray in Burst::star(origin, spec) {
            self.spawn(Effect::Burst(ray));
        }
    }

    /// Record a pointer sample; the oldest sample is evicted past the trail length.
    pub fn push_trail(&mut self, position: Vec2) {
        self.spawn(Effect::Trail(TrailPoint::new(position)));
    }

    pub fn spawn_vortex(&mut self, center: Vec2) {
        for marker in VortexMarker::ring(center) {
            self.spawn(Effect::Vortex(marker));
        }
    }

    /// Age every effect by one tick and drop the expired ones.
    pub fn step(&mut self) {
        for queue in &mut self.families {
            for effect in queue.iter_mut() {
                effect.step();
            }
            queue.retain(|e| !e.is_expired());
        }
    }

    /// Draw every live effect, faded by age and scaled by `intensity`.
    pub fn draw_all(&self, list: &mut DrawList, intensity: f32) {
        for effect in self.iter() {
            if !effect.is_expired() {
                effect.draw(list, intensity);
            }
        }
    }

    /// Every live effect, family by family.
    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.families.iter().flatten()
    }

    pub fn iter_family(&self, family: EffectFamily) -> impl Iterator<Item = &Effect> {
        self.families[family.index()].iter()
    }

    pub fn count(&self, family: EffectFamily) -> usize {
        self.families[family.index()].len()
    }

    pub fn len(&self) -> usize {
        self.families.iter().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.families.iter().all(VecDeque::is_empty)
    }

    /// Clear all effects.
    pub fn clear(&mut self) {
        for queue in &mut self.families {
            queue.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_list::DrawKind;

    fn registry() -> EffectRegistry {
        EffectRegistry::new(EffectsConfig::default(), 42)
    }

    fn ring(max_life: u32) -> RingSpec {
        RingSpec {
            max_radius: 100.0,
            speed: 2.0,
            thickness: 2.0,
            opacity: 0.9,
            max_life,
        }
    }

    #[test]
    fn ring_burst_expires_in_order() {
        let mut effects = registry();
        for max_life in [40, 50, 60, 70, 80] {
            effects.spawn_ring(Vec2::new(100.0, 100.0), ring(max_life));
        }
        for _ in 0..41 {
            effects.step();
        }
        assert_eq!(effects.count(EffectFamily::Ring), 4);
        for _ in 41..81 {
            effects.step();
        }
        assert_eq!(effects.count(EffectFamily::Ring), 0);
    }

    #[test]
    fn life_is_monotonic_until_removal() {
        let mut effects = registry();
        effects.spawn_shockwave(Vec2::ZERO);
        effects.spawn_lightning(Vec2::ZERO, Vec2::new(100.0, 0.0));
        let mut last: Vec<u32> = effects.iter().map(|e| e.lifespan().life).collect();
        for _ in 0..5 {
            effects.step();
            let now: Vec<u32> = effects.iter().map(|e| e.lifespan().life).collect();
            for (a, b) in last.iter().zip(&now) {
                assert!(b > a);
            }
            last = now;
        }
    }

    #[test]
    fn expired_effects_are_not_drawn() {
        let mut effects = registry();
        effects.spawn_ring(Vec2::ZERO, ring(2));
        effects.step();
        let mut list = DrawList::new();
        effects.draw_all(&mut list, 1.0);
        assert_eq!(list.count(DrawKind::StrokeCircle), 1);

        effects.step();
        list.clear();
        effects.draw_all(&mut list, 1.0);
        assert!(list.is_empty());
    }

    #[test]
    fn opacity_fades_with_age_and_intensity() {
        let mut effects = registry();
        effects.spawn_ring(Vec2::ZERO, RingSpec { opacity: 1.0, ..ring(4) });
        effects.step();
        let mut list = DrawList::new();
        effects.draw_all(&mut list, 0.5);
        assert!((list.commands()[0].alpha - 0.375).abs() < 1e-6);
    }

    #[test]
    fn bolt_path_is_identical_across_frames() {
        let mut effects = registry();
        effects.spawn_lightning(Vec2::ZERO, Vec2::new(200.0, 80.0));
        let mut first = DrawList::new();
        effects.draw_all(&mut first, 1.0);
        effects.step();
        let mut second = DrawList::new();
        effects.draw_all(&mut second, 1.0);

        let geometry = |list: &DrawList| -> Vec<(Vec2, Vec2)> {
            list.commands().iter().map(|c| (c.start(), c.end())).collect()
        };
        assert_eq!(geometry(&first), geometry(&second));
        assert_eq!(geometry(&first).len(), 8);
    }

    #[test]
    fn soft_cap_evicts_oldest_of_same_family() {
        let config = EffectsConfig {
            max_rings: 3,
            ..EffectsConfig::default()
        };
        let mut effects = EffectRegistry::new(config, 1);
        effects.spawn_lightning(Vec2::ZERO, Vec2::ONE);
        for max_life in [10, 11, 12, 13, 14] {
            effects.spawn_ring(Vec2::ZERO, ring(max_life));
        }
        let lives: Vec<u32> = effects
            .iter_family(EffectFamily::Ring)
            .map(|e| e.lifespan().max_life)
            .collect();
        assert_eq!(lives, vec![12, 13, 14]);
        assert_eq!(effects.count(EffectFamily::Bolt), 1);
    }

    #[test]
    fn trail_is_capped_regardless_of_age() {
        let mut effects = registry();
        for i in 0..20 {
            effects.push_trail(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(effects.count(EffectFamily::Trail), 15);
        let first = effects.iter_family(EffectFamily::Trail).next();
        match first {
            Some(Effect::Trail(p)) => assert_eq!(p.position.x, 5.0),
            other => panic!("expected trail point, got {:?}", other),
        }
    }

    #[test]
    fn star_and_vortex_spawn_full_groups() {
        let mut effects = registry();
        effects.spawn_star(Vec2::ZERO, &CLICK_STAR);
        effects.spawn_vortex(Vec2::ZERO);
        assert_eq!(effects.count(EffectFamily::Burst), 8);
        assert_eq!(effects.count(EffectFamily::Vortex), VORTEX_MARKERS);
    }

    #[test]
    fn scatter_stays_on_surface() {
        let mut effects = registry();
        let size = Vec2::new(400.0, 300.0);
        effects.spawn_scatter(size, 15);
        assert_eq!(effects.count(EffectFamily::Ring), 15);
        for e in effects.iter() {
            if let Effect::Ring(r) = e {
                assert!(r.center.x >= 0.0 && r.center.x < size.x);
                assert!(r.center.y >= 0.0 && r.center.y < size.y);
            }
        }
    }

    #[test]
    fn families_draw_in_fixed_order() {
        let mut effects = registry();
        effects.spawn_ring(Vec2::ZERO, ring(10));
        effects.push_trail(Vec2::ZERO);
        effects.spawn_lightning(Vec2::ZERO, Vec2::new(100.0, 0.0));
        let order: Vec<EffectFamily> = effects.iter().map(Effect::family).collect();
        assert_eq!(order, vec![EffectFamily::Trail, EffectFamily::Ring, EffectFamily::Bolt]);
        assert_eq!(effects.len(), 3);
    }

    #[test]
    fn effects_state_clear() {
        let mut effects = registry();
        effects.spawn_explosion(Vec2::ZERO);
        effects.spawn_arc(Vec2::ZERO, Vec2::new(50.0, 50.0));
        effects.clear();
        assert!(effects.is_empty());
    }
}
