//! Radial line bursts, spawned as symmetric stars.

use glam::Vec2;

use crate::renderer::draw_list::DrawList;

use super::effect::Lifespan;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstSpec {
    /// Number of rays in the star.
    pub rays: usize,
    pub max_length: f32,
    pub speed: f32,
    pub thickness: f32,
    pub opacity: f32,
    pub max_life: u32,
}

/// Click star: eight rays at 45° increments.
pub const CLICK_STAR: BurstSpec = BurstSpec {
    rays: 8,
    max_length: 120.0,
    speed: 6.0,
    thickness: 8.0,
    opacity: 0.9,
    max_life: 25,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Burst {
    pub origin: Vec2,
    pub angle: f32,
    pub length: f32,
    pub max_length: f32,
    pub speed: f32,
    pub thickness: f32,
    pub opacity: f32,
    pub span: Lifespan,
}

impl Burst {
    pub fn new(origin: Vec2, angle: f32, spec: &BurstSpec) -> Self {
        Self {
            origin,
            angle,
            length: 0.0,
            max_length: spec.max_length,
            speed: spec.speed,
            thickness: spec.thickness,
            opacity: spec.opacity,
            span: Lifespan::new(spec.max_life),
        }
    }

    /// One ray per evenly spaced angle around `origin`.
    pub fn star(origin: Vec2, spec: &BurstSpec) -> Vec<Burst> {
        let rays = spec.rays.max(1);
        (0..rays)
            .map(|i| {
                let angle = i as f32 / rays as f32 * std::f32::consts::TAU;
                Burst::new(origin, angle, spec)
            })
            .collect()
    }

    pub fn step(&mut self) {
        self.span.tick();
        self.length = (self.length + self.speed).min(self.max_length);
    }

    pub fn tip(&self) -> Vec2 {
        self.origin + Vec2::from_angle(self.angle) * self.length
    }

    pub fn draw(&self, list: &mut DrawList, intensity: f32) {
        let alpha = self.opacity * self.span.fade() * intensity;
        list.line(self.origin, self.tip(), self.thickness, alpha);
    }
}
