//! Attractor derivation from anchors and pointer.

use glam::Vec2;

use crate::api::config::{AttractorConfig, AttractorTier};
use crate::api::types::{AnchorId, PointerState};
use crate::systems::anchors::AnchorState;

/// A point source of pull. Rebuilt every tick, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attractor {
    pub position: Vec2,
    pub strength: f32,
    pub radius: f32,
    pub active: bool,
    /// Anchor this attractor was derived from; `None` for the pointer.
    pub source: Option<AnchorId>,
}

impl Attractor {
    fn from_tier(position: Vec2, tier: AttractorTier, source: Option<AnchorId>) -> Self {
        Self {
            position,
            strength: tier.strength,
            radius: tier.radius,
            active: true,
            source,
        }
    }
}

/// Derives the attractor set from the current anchors and pointer.
pub struct AttractorRegistry {
    config: AttractorConfig,
    attractors: Vec<Attractor>,
}

impl AttractorRegistry {
    pub fn new(config: AttractorConfig) -> Self {
        Self {
            config,
            attractors: Vec::with_capacity(32),
        }
    }

    /// Rebuild from scratch: one attractor per anchor, tiered by activity,
    /// plus one for the pointer while it is over the surface.
    pub fn rebuild(&mut self, anchors: &[AnchorState], pointer: &PointerState) -> &[Attractor] {
        self.attractors.clear();
        for state in anchors {
            let tier = if state.is_active() {
                self.config.active
            } else {
                self.config.inactive
            };
            self.attractors
                .push(Attractor::from_tier(state.position(), tier, Some(state.id())));
        }
        if pointer.active {
            self.attractors
                .push(Attractor::from_tier(pointer.position, self.config.pointer, None));
        }
        &self.attractors
    }

    pub fn attractors(&self) -> &[Attractor] {
        &self.attractors
    }

    pub fn config(&self) -> &AttractorConfig {
        &self.config
    }
}
