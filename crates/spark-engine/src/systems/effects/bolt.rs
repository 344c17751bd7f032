//! Lightning bolts and click arcs with a jittered path fixed at spawn time.

use glam::Vec2;

use crate::renderer::draw_list::DrawList;

use super::effect::Lifespan;
use super::rng::Rng;

/// Parameters for one bolt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoltSpec {
    /// Number of segments; the path has `segments + 1` points.
    pub segments: usize,
    /// Peak jitter span at the midpoint (points move up to ±amplitude/2 per axis).
    pub amplitude: f32,
    pub thickness: f32,
    pub opacity: f32,
    pub max_life: u32,
}

/// Short lightning between the pointer and a nearby anchor.
pub const LIGHTNING: BoltSpec = BoltSpec {
    segments: 8,
    amplitude: 40.0,
    thickness: 3.0,
    opacity: 0.9,
    max_life: 8,
};

/// Wide arc between a clicked anchor and each anchor linked to it.
pub const CLICK_ARC: BoltSpec = BoltSpec {
    segments: 2,
    amplitude: 100.0,
    thickness: 5.0,
    opacity: 0.9,
    max_life: 15,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Bolt {
    pub start: Vec2,
    pub end: Vec2,
    pub points: Vec<Vec2>,
    pub thickness: f32,
    pub opacity: f32,
    pub span: Lifespan,
}

impl Bolt {
    pub fn new(start: Vec2, end: Vec2, spec: BoltSpec, rng: &mut Rng) -> Self {
        Self {
            start,
            end,
            points: jittered_path(start, end, spec.segments, spec.amplitude, rng),
            thickness: spec.thickness,
            opacity: spec.opacity,
            span: Lifespan::new(spec.max_life),
        }
    }

    pub fn draw(&self, list: &mut DrawList, intensity: f32) {
        let alpha = self.opacity * self.span.fade() * intensity;
        list.polyline(&self.points, self.thickness, alpha);
    }
}

/// Sample `segments + 1` points from `start` to `end`, perturbing each by random
/// jitter scaled by proximity to the midpoint. Both endpoints stay exact.
pub fn jittered_path(start: Vec2, end: Vec2, segments: usize, amplitude: f32, rng: &mut Rng) -> Vec<Vec2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let taper = 1.0 - (2.0 * t - 1.0).abs();
            let jitter = Vec2::new(rng.signed(0.5), rng.signed(0.5)) * amplitude * taper;
            start.lerp(end, t) + jitter
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_has_segments_plus_one_points() {
        let mut rng = Rng::new(42);
        let bolt = Bolt::new(Vec2::ZERO, Vec2::new(100.0, 0.0), LIGHTNING, &mut rng);
        assert_eq!(bolt.points.len(), 9);
    }

    #[test]
    fn endpoints_are_not_jittered() {
        let mut rng = Rng::new(42);
        let start = Vec2::new(10.0, 20.0);
        let end = Vec2::new(300.0, -40.0);
        let bolt = Bolt::new(start, end, LIGHTNING, &mut rng);
        assert_eq!(bolt.points[0], start);
        assert!((bolt.points[8] - end).length() < 1e-4);
    }

    #[test]
    fn jitter_is_bounded_by_taper() {
        let mut rng = Rng::new(7);
        let points = jittered_path(Vec2::ZERO, Vec2::new(80.0, 0.0), 8, 40.0, &mut rng);
        for (i, p) in points.iter().enumerate() {
            let t = i as f32 / 8.0;
            let taper = 1.0 - (2.0 * t - 1.0).abs();
            let base = Vec2::new(80.0 * t, 0.0);
            assert!((p.x - base.x).abs() <= 20.0 * taper + 1e-4);
            assert!((p.y - base.y).abs() <= 20.0 * taper + 1e-4);
        }
    }

    #[test]
    fn path_is_stable_across_ticks() {
        let mut rng = Rng::new(42);
        let mut bolt = Bolt::new(Vec2::ZERO, Vec2::new(100.0, 50.0), LIGHTNING, &mut rng);
        let first = bolt.points.clone();
        bolt.span.tick();
        bolt.span.tick();
        assert_eq!(bolt.points, first);
    }
}
