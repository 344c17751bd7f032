//! Expanding rings: shockwaves, click explosions and pulse waves.

use glam::Vec2;

use crate::renderer::draw_list::DrawList;

use super::effect::Lifespan;

/// Parameters for one ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub max_radius: f32,
    /// Radius growth per tick.
    pub speed: f32,
    pub thickness: f32,
    pub opacity: f32,
    pub max_life: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub center: Vec2,
    pub radius: f32,
    pub max_radius: f32,
    pub speed: f32,
    pub thickness: f32,
    pub opacity: f32,
    pub span: Lifespan,
}

impl Ring {
    pub fn new(center: Vec2, spec: RingSpec) -> Self {
        Self {
            center,
            radius: 0.0,
            max_radius: spec.max_radius,
            speed: spec.speed,
            thickness: spec.thickness.max(1.0),
            opacity: spec.opacity,
            span: Lifespan::new(spec.max_life),
        }
    }

    pub fn step(&mut self) {
        self.span.tick();
        self.radius = (self.radius + self.speed).min(self.max_radius);
    }

    pub fn draw(&self, list: &mut DrawList, intensity: f32) {
        let alpha = self.opacity * self.span.fade() * intensity;
        list.stroke_circle(self.center, self.radius, self.thickness, alpha);
    }
}

/// Hover shockwave: five staggered rings.
pub fn shockwave(i: usize) -> RingSpec {
    let i = i as f32;
    RingSpec {
        max_radius: 80.0 + i * 30.0,
        speed: 3.0 + i * 0.5,
        thickness: 8.0 - i,
        opacity: 0.9,
        max_life: 40 + (i as u32) * 10,
    }
}

/// Click explosion: six wider, faster rings.
pub fn explosion(i: usize) -> RingSpec {
    let i = i as f32;
    RingSpec {
        max_radius: 100.0 + i * 40.0,
        speed: 4.0 + i * 0.8,
        thickness: 10.0 - i,
        opacity: 0.9,
        max_life: 35 + (i as u32) * 8,
    }
}

/// Single thick, short pulse around a hovered anchor.
pub fn pulse_wave() -> RingSpec {
    RingSpec {
        max_radius: 150.0,
        speed: 5.0,
        thickness: 12.0,
        opacity: 0.6,
        max_life: 30,
    }
}

/// Scattered filter-change ring with a given max radius.
pub fn scatter(max_radius: f32) -> RingSpec {
    RingSpec {
        max_radius,
        speed: 4.0,
        thickness: 6.0,
        opacity: 0.6,
        max_life: 30,
    }
}
