//! Stateless force computation shared by the particle pool.

use glam::Vec2;

use crate::systems::attractors::Attractor;

/// Inverse-square pull toward a set of attractors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorField {
    /// Upper bound on a single attractor's force magnitude.
    pub force_cap: f32,
    /// Minimum distance at which an attractor acts.
    pub epsilon: f32,
}

impl VectorField {
    pub fn new(force_cap: f32, epsilon: f32) -> Self {
        Self { force_cap, epsilon }
    }

    /// Acceleration contributed by one attractor on a body of `mass` at `point`.
    /// Zero outside the attractor's radius or inside the epsilon core.
    pub fn pull(&self, point: Vec2, mass: f32, attractor: &Attractor) -> Vec2 {
        if !attractor.active {
            return Vec2::ZERO;
        }
        let delta = attractor.position - point;
        let distance = delta.length();
        if distance <= self.epsilon || distance > attractor.radius {
            return Vec2::ZERO;
        }
        let force = (attractor.strength * mass / (distance * distance)).min(self.force_cap);
        delta / distance * (force / mass)
    }

    /// Summed acceleration from every attractor.
    pub fn acceleration(&self, point: Vec2, mass: f32, attractors: &[Attractor]) -> Vec2 {
        attractors
            .iter()
            .fold(Vec2::ZERO, |acc, a| acc + self.pull(point, mass, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attractor(position: Vec2, strength: f32, radius: f32) -> Attractor {
        Attractor {
            position,
            strength,
            radius,
            active: true,
            source: None,
        }
    }

    #[test]
    fn pulls_toward_attractor() {
        let field = VectorField::new(10.0, 1.0);
        let a = attractor(Vec2::new(100.0, 0.0), 40.0, 150.0);
        let acc = field.pull(Vec2::ZERO, 1.0, &a);
        assert!(acc.x > 0.0);
        assert_eq!(acc.y, 0.0);
        assert!((acc.x - 40.0 / 10_000.0).abs() < 1e-6);
    }

    #[test]
    fn ignores_points_outside_radius_or_inside_epsilon() {
        let field = VectorField::new(10.0, 5.0);
        let a = attractor(Vec2::new(100.0, 0.0), 40.0, 50.0);
        assert_eq!(field.pull(Vec2::ZERO, 1.0, &a), Vec2::ZERO);
        assert_eq!(field.pull(Vec2::new(98.0, 0.0), 1.0, &a), Vec2::ZERO);
    }

    #[test]
    fn force_is_capped() {
        let field = VectorField::new(0.5, 1.0);
        let a = attractor(Vec2::new(2.0, 0.0), 1000.0, 50.0);
        let acc = field.pull(Vec2::ZERO, 2.0, &a);
        assert!((acc.length() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn empty_field_is_zero() {
        let field = VectorField::new(1.0, 1.0);
        assert_eq!(field.acceleration(Vec2::ONE, 1.0, &[]), Vec2::ZERO);
    }
}
