//! Markers orbiting a freshly hovered anchor.

use glam::Vec2;

use crate::renderer::draw_list::DrawList;

use super::effect::Lifespan;

pub const VORTEX_MARKERS: usize = 12;
const VORTEX_RADIUS: f32 = 60.0;
const VORTEX_SPEED: f32 = 0.1;
const VORTEX_LIFE: u32 = 80;
const VORTEX_SIZE: f32 = 4.0;

#[derive(Debug, Clone, PartialEq)]
pub struct VortexMarker {
    pub center: Vec2,
    pub angle: f32,
    pub radius: f32,
    /// Radians per tick.
    pub angular_speed: f32,
    pub size: f32,
    pub opacity: f32,
    pub span: Lifespan,
}

impl VortexMarker {
    pub fn new(center: Vec2, angle: f32) -> Self {
        Self {
            center,
            angle,
            radius: VORTEX_RADIUS,
            angular_speed: VORTEX_SPEED,
            size: VORTEX_SIZE,
            opacity: 0.8,
            span: Lifespan::new(VORTEX_LIFE),
        }
    }

    /// Evenly spaced ring of markers around `center`.
    pub fn ring(center: Vec2) -> Vec<VortexMarker> {
        (0..VORTEX_MARKERS)
            .map(|i| {
                let angle = i as f32 / VORTEX_MARKERS as f32 * std::f32::consts::TAU;
                VortexMarker::new(center, angle)
            })
            .collect()
    }

    pub fn step(&mut self) {
        self.span.tick();
        self.angle = (self.angle + self.angular_speed) % std::f32::consts::TAU;
    }

    pub fn position(&self) -> Vec2 {
        self.center + Vec2::from_angle(self.angle) * self.radius
    }

    pub fn draw(&self, list: &mut DrawList, intensity: f32) {
        let alpha = self.opacity * self.span.fade() * intensity;
        list.fill_square(self.position(), self.size, alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_orbit_at_fixed_radius() {
        let mut marker = VortexMarker::new(Vec2::new(50.0, 50.0), 0.0);
        for _ in 0..10 {
            marker.step();
            assert!((marker.position().distance(marker.center) - VORTEX_RADIUS).abs() < 1e-3);
        }
        assert!((marker.angle - 1.0).abs() < 1e-4);
    }
}
