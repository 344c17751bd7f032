//! The effect sum type and its shared lifecycle.

use crate::renderer::draw_list::DrawList;

use super::bolt::Bolt;
use super::burst::Burst;
use super::ring::Ring;
use super::trail::TrailPoint;
use super::vortex::VortexMarker;

/// Tick-based lifetime shared by every effect. `life` only ever increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifespan {
    pub life: u32,
    pub max_life: u32,
}

impl Lifespan {
    pub fn new(max_life: u32) -> Self {
        Self { life: 0, max_life }
    }

    pub fn tick(&mut self) {
        self.life = self.life.saturating_add(1);
    }

    pub fn is_expired(&self) -> bool {
        self.life >= self.max_life
    }

    /// Elapsed fraction in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.max_life == 0 {
            return 1.0;
        }
        (self.life as f32 / self.max_life as f32).min(1.0)
    }

    /// Linear fade-out factor, 1 at spawn and 0 at expiry.
    pub fn fade(&self) -> f32 {
        1.0 - self.progress()
    }
}

/// Effect family, used for per-family soft capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectFamily {
    Ring,
    Bolt,
    Burst,
    Trail,
    Vortex,
}

impl EffectFamily {
    pub const COUNT: usize = 5;

    /// Storage and draw order: trail under rings, bolts and bursts on top.
    pub const ALL: [EffectFamily; Self::COUNT] = [
        EffectFamily::Trail,
        EffectFamily::Ring,
        EffectFamily::Bolt,
        EffectFamily::Burst,
        EffectFamily::Vortex,
    ];

    /// Position in [`EffectFamily::ALL`].
    pub fn index(self) -> usize {
        match self {
            EffectFamily::Trail => 0,
            EffectFamily::Ring => 1,
            EffectFamily::Bolt => 2,
            EffectFamily::Burst => 3,
            EffectFamily::Vortex => 4,
        }
    }
}

/// A short-lived visual decoration.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Ring(Ring),
    Bolt(Bolt),
    Burst(Burst),
    Trail(TrailPoint),
    Vortex(VortexMarker),
}

impl Effect {
    pub fn family(&self) -> EffectFamily {
        match self {
            Effect::Ring(_) => EffectFamily::Ring,
            Effect::Bolt(_) => EffectFamily::Bolt,
            Effect::Burst(_) => EffectFamily::Burst,
            Effect::Trail(_) => EffectFamily::Trail,
            Effect::Vortex(_) => EffectFamily::Vortex,
        }
    }

    pub fn lifespan(&self) -> &Lifespan {
        match self {
            Effect::Ring(e) => &e.span,
            Effect::Bolt(e) => &e.span,
            Effect::Burst(e) => &e.span,
            Effect::Trail(e) => &e.span,
            Effect::Vortex(e) => &e.span,
        }
    }

    /// Age by one tick and advance variant geometry.
    pub fn step(&mut self) {
        match self {
            Effect::Ring(e) => e.step(),
            Effect::Bolt(e) => e.span.tick(),
            Effect::Burst(e) => e.step(),
            Effect::Trail(e) => e.span.tick(),
            Effect::Vortex(e) => e.step(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.lifespan().is_expired()
    }

    pub fn draw(&self, list: &mut DrawList, intensity: f32) {
        match self {
            Effect::Ring(e) => e.draw(list, intensity),
            Effect::Bolt(e) => e.draw(list, intensity),
            Effect::Burst(e) => e.draw(list, intensity),
            Effect::Trail(e) => e.draw(list, intensity),
            Effect::Vortex(e) => e.draw(list, intensity),
        }
    }
}
