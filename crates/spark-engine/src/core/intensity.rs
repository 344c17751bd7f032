/// Global visual intensity, eased toward a target every tick.
/// Scales the alpha of everything the field draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Intensity {
    current: f32,
    target: f32,
    easing: f32,
    max: f32,
}

impl Intensity {
    pub fn new(target: f32, easing: f32, max: f32) -> Self {
        Self {
            current: 0.0,
            target: target.clamp(0.0, max),
            easing,
            max,
        }
    }

    /// `current += (target - current) * easing`
    pub fn step(&mut self) {
        self.current += (self.target - self.current) * self.easing;
        self.current = self.current.clamp(0.0, self.max);
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target.clamp(0.0, self.max);
        }
    }

    /// Jump the current value (click and filter flashes); easing brings it back.
    pub fn spike(&mut self, value: f32) {
        if value.is_finite() {
            self.current = value.clamp(0.0, self.max);
        }
    }

    pub fn reset(&mut self) {
        self.current = 0.0;
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}
