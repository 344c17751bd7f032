//! Runtime state for anchors: hover detection, energy charge/decay and halo drawing.

use std::collections::HashMap;
use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::types::{Anchor, AnchorId, PointerState};
use crate::renderer::draw_list::DrawList;
use crate::systems::effects::Rng;

const MAX_ENERGY: f32 = 100.0;
const MAX_FIELD: f32 = 80.0;
const ENERGY_CHARGE: f32 = 8.0;
const ENERGY_DECAY: f32 = 3.0;
const FIELD_CHARGE: f32 = 6.0;
const FIELD_DECAY: f32 = 2.0;
const PULSE_SPEED: f32 = 0.1;
const SPIN_SPEED: f32 = 0.05;
const FIELD_MARKERS: usize = 8;

/// An anchor snapshot plus the state the engine derives from it over time.
#[derive(Debug, Clone)]
pub struct AnchorState {
    pub anchor: Anchor,
    pub hovered: bool,
    /// Charges while hovered, decays otherwise. Range [0, 100].
    pub energy: f32,
    /// Magnetic field level. Range [0, 80].
    pub field: f32,
    pub pulse_phase: f32,
    pub spin: f32,
    /// Hover requested by the UI; honoured for one update.
    forced: bool,
}

impl AnchorState {
    pub fn new(anchor: Anchor, pulse_phase: f32) -> Self {
        let hovered = anchor.active;
        Self {
            anchor,
            hovered,
            energy: 0.0,
            field: 0.0,
            pulse_phase,
            spin: 0.0,
            forced: false,
        }
    }

    pub fn id(&self) -> AnchorId {
        self.anchor.id
    }

    pub fn position(&self) -> Vec2 {
        self.anchor.position
    }

    /// Whether this anchor uses the active attractor tier.
    pub fn is_active(&self) -> bool {
        self.hovered
    }
}

/// All anchors currently on screen, in the order the UI supplied them.
pub struct AnchorSet {
    states: Vec<AnchorState>,
}

impl AnchorSet {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Replace the anchor snapshot. Anchors whose id survives keep their energy,
    /// field and phases; anchors with non-finite geometry are skipped.
    pub fn replace(&mut self, anchors: Vec<Anchor>, rng: &mut Rng) {
        let previous_len = self.states.len();
        let mut previous: HashMap<AnchorId, AnchorState> =
            self.states.drain(..).map(|s| (s.id(), s)).collect();

        for anchor in anchors {
            if !anchor.is_finite() {
                log::warn!("skipping anchor {:?} with non-finite geometry", anchor.id);
                continue;
            }
            let state = match previous.remove(&anchor.id) {
                Some(mut old) => {
                    old.hovered = old.hovered || anchor.active;
                    old.anchor = anchor;
                    old
                }
                None => AnchorState::new(anchor, rng.angle()),
            };
            self.states.push(state);
        }
        if self.states.len() != previous_len {
            log::info!("tracking {} anchors", self.states.len());
        }
    }

    /// Mark one anchor as hovered for the next update. Afterwards hover
    /// follows the pointer and the snapshot again.
    pub fn force_active(&mut self, id: AnchorId) -> bool {
        match self.states.iter_mut().find(|s| s.id() == id) {
            Some(state) => {
                state.forced = true;
                true
            }
            None => false,
        }
    }

    /// Recompute hover, charge or decay energy, advance phases.
    /// Returns the indices of anchors that became hovered this tick.
    pub fn update(&mut self, pointer: &PointerState, hover_margin: f32) -> Vec<usize> {
        let mut entered = Vec::new();
        for (index, state) in self.states.iter_mut().enumerate() {
            let was_hovered = state.hovered;
            let near_pointer = pointer.active
                && pointer.position.distance(state.anchor.position)
                    < state.anchor.hover_radius(hover_margin);
            let forced = std::mem::take(&mut state.forced);
            state.hovered = state.anchor.active || near_pointer || forced;

            if state.hovered {
                state.energy = (state.energy + ENERGY_CHARGE).min(MAX_ENERGY);
                state.field = (state.field + FIELD_CHARGE).min(MAX_FIELD);
                if !was_hovered {
                    entered.push(index);
                }
            } else {
                state.energy = (state.energy - ENERGY_DECAY).max(0.0);
                state.field = (state.field - FIELD_DECAY).max(0.0);
            }

            state.pulse_phase = (state.pulse_phase + PULSE_SPEED) % TAU;
            state.spin = (state.spin + SPIN_SPEED) % TAU;
        }
        entered
    }

    /// Energy halos and orbiting field markers around charged anchors.
    pub fn draw(&self, list: &mut DrawList, intensity: f32) {
        for state in &self.states {
            let center = state.position();

            if state.energy > 20.0 {
                let level = state.energy / MAX_ENERGY;
                let pulse = state.pulse_phase.sin() * 10.0 + 30.0;
                let radius = level * 60.0 + pulse;
                let alpha = level * 0.6 * intensity;
                list.stroke_circle(center, radius, 6.0, alpha);
                list.stroke_circle(center, radius * 0.6, 3.0, alpha);
            }

            if state.field > 10.0 {
                let level = state.field / MAX_FIELD;
                let distance = 40.0 + level * 30.0;
                let alpha = level * 0.7 * intensity;
                for i in 0..FIELD_MARKERS {
                    let angle = i as f32 / FIELD_MARKERS as f32 * TAU + state.spin;
                    let p = center + Vec2::from_angle(angle) * distance;
                    list.fill_square(p, 6.0, alpha);
                }
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&AnchorState> {
        self.states.get(index)
    }

    pub fn states(&self) -> &[AnchorState] {
        &self.states
    }

    /// First hovered anchor, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.states.iter().position(|s| s.hovered)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}

impl Default for AnchorSet {
    fn default() -> Self {
        Self::new()
    }
}
