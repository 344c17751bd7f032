//! Fixed-capacity particle pool driven by the attractor field.

use glam::Vec2;

use crate::api::config::{BoundaryMode, ParticleConfig};
use crate::renderer::draw_list::DrawList;
use crate::systems::attractors::Attractor;
use crate::systems::effects::Rng;
use crate::systems::field::VectorField;

/// Velocity multiplier applied to the offending axis on reflection.
const REFLECT_DAMPING: f32 = -0.7;

/// A single particle with physics and rendering state.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub size: f32,
    pub mass: f32,
    pub max_speed: f32,
    pub opacity: f32,
    /// Remaining life in [0, 1].
    pub life: f32,
    pub decay_rate: f32,
}

impl Particle {
    /// A fresh particle at `position` with random velocity and appearance.
    pub fn spawn(position: Vec2, config: &ParticleConfig, rng: &mut Rng) -> Self {
        let velocity = Vec2::new(rng.signed(0.5), rng.signed(0.5));
        Particle {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            size: rng.range(config.size_range.0, config.size_range.1),
            mass: rng.range(config.mass_range.0, config.mass_range.1),
            max_speed: config.max_speed,
            opacity: rng.range(config.opacity_range.0, config.opacity_range.1),
            life: 1.0,
            decay_rate: rng.range(config.decay_range.0, config.decay_range.1),
        }
    }

    /// Advance one integration step. Returns false once life is exhausted.
    pub fn tick(&mut self, field: &VectorField, attractors: &[Attractor], jitter: Vec2) -> bool {
        self.acceleration = field.acceleration(self.position, self.mass, attractors) + jitter;
        self.velocity = (self.velocity + self.acceleration).clamp_length_max(self.max_speed);
        self.position += self.velocity;
        self.life -= self.decay_rate;
        self.life > 0.0
    }

    /// Keep the particle inside `bounds` according to the boundary mode.
    pub fn apply_boundary(&mut self, bounds: Vec2, mode: BoundaryMode) {
        match mode {
            BoundaryMode::Reflect => {
                if self.position.x < 0.0 || self.position.x > bounds.x {
                    self.velocity.x *= REFLECT_DAMPING;
                    self.position.x = self.position.x.clamp(0.0, bounds.x);
                }
                if self.position.y < 0.0 || self.position.y > bounds.y {
                    self.velocity.y *= REFLECT_DAMPING;
                    self.position.y = self.position.y.clamp(0.0, bounds.y);
                }
            }
            BoundaryMode::Wrap => {
                if bounds.x > 0.0 {
                    self.position.x = self.position.x.rem_euclid(bounds.x);
                }
                if bounds.y > 0.0 {
                    self.position.y = self.position.y.rem_euclid(bounds.y);
                }
            }
        }
    }

    /// Drawn radius shrinks to half as the particle ages.
    pub fn radius(&self) -> f32 {
        let age_factor = 0.5 * (1.0 - self.life.clamp(0.0, 1.0));
        self.size * (1.0 - age_factor)
    }

    pub fn alpha(&self) -> f32 {
        self.opacity * self.life.clamp(0.0, 1.0)
    }
}

/// Owns a constant number of particles for its whole lifetime.
pub struct ParticlePool {
    particles: Vec<Particle>,
    config: ParticleConfig,
    field: VectorField,
    bounds: Vec2,
}

impl ParticlePool {
    /// Fill the pool with `capacity` particles scattered over `bounds`.
    pub fn new(capacity: usize, config: ParticleConfig, bounds: Vec2, rng: &mut Rng) -> Self {
        let field = VectorField::new(config.force_cap, config.epsilon);
        let particles = (0..capacity)
            .map(|_| Particle::spawn(rng.point_in(bounds), &config, rng))
            .collect();
        Self {
            particles,
            config,
            field,
            bounds,
        }
    }

    /// Advance every particle one step; dead particles are replaced in place.
    pub fn step(&mut self, attractors: &[Attractor], rng: &mut Rng) {
        let jitter = self.config.jitter;
        for particle in &mut self.particles {
            let noise = Vec2::new(rng.signed(jitter), rng.signed(jitter));
            let alive = particle.tick(&self.field, attractors, noise);
            particle.apply_boundary(self.bounds, self.config.boundary);
            if !alive {
                *particle = Particle::spawn(rng.point_in(self.bounds), &self.config, rng);
            }
        }
    }

    /// Replace the most-decayed particle with a fresh one at `point`.
    pub fn spawn_at(&mut self, point: Vec2, rng: &mut Rng) {
        let oldest = self
            .particles
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.life.total_cmp(&b.1.life))
            .map(|(i, _)| i);
        if let Some(index) = oldest {
            self.particles[index] = Particle::spawn(point, &self.config, rng);
        }
    }

    /// New surface size. Particles keep their state; the boundary policy
    /// pulls stragglers back in on the next step.
    pub fn resize(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    pub fn draw(&self, list: &mut DrawList, intensity: f32) {
        for p in &self.particles {
            list.fill_circle(p.position, p.radius(), p.alpha() * intensity);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }
}
