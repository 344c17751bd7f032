//! Pointer trail samples.

use glam::Vec2;

use crate::renderer::draw_list::DrawList;

use super::effect::Lifespan;

const TRAIL_LIFE: u32 = 20;
const TRAIL_SIZE: f32 = 8.0;
const TRAIL_OPACITY: f32 = 0.8;

/// One recorded pointer position; shrinks to half size as it fades.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailPoint {
    pub position: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub span: Lifespan,
}

impl TrailPoint {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            size: TRAIL_SIZE,
            opacity: TRAIL_OPACITY,
            span: Lifespan::new(TRAIL_LIFE),
        }
    }

    pub fn draw(&self, list: &mut DrawList, intensity: f32) {
        let radius = self.size * (1.0 - self.span.progress() * 0.5);
        list.fill_circle(self.position, radius, self.opacity * self.span.fade() * intensity);
    }
}
