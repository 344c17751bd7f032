//! Pulsing links between related anchors.

use std::f32::consts::TAU;

use crate::api::config::ConnectionConfig;
use crate::renderer::draw_list::DrawList;
use crate::systems::anchors::AnchorState;
use crate::systems::effects::Rng;

const SAME_CATEGORY_THICKNESS: f32 = 6.0;
const PROXIMITY_THICKNESS: f32 = 3.0;
const MARKER_SIZE: f32 = 8.0;

/// A derived link between two anchors, identified by their index in the anchor set.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
    /// 1.0 for same-category pairs, otherwise decays linearly with distance.
    pub strength: f32,
    pub thickness: f32,
    pub pulse_phase: f32,
    pub active: bool,
}

impl Connection {
    /// Sinusoidal pulse in [0, 1].
    pub fn pulse(&self) -> f32 {
        self.pulse_phase.sin() * 0.5 + 0.5
    }

    /// Fraction along the segment where the travelling marker sits.
    pub fn marker_position(&self) -> f32 {
        self.pulse_phase / TAU
    }

    pub fn touches(&self, index: usize) -> bool {
        self.a == index || self.b == index
    }

    /// The endpoint opposite `index`.
    pub fn other(&self, index: usize) -> usize {
        if self.a == index {
            self.b
        } else {
            self.a
        }
    }
}

/// All links between the current anchors.
pub struct ConnectionGraph {
    config: ConnectionConfig,
    connections: Vec<Connection>,
}

impl ConnectionGraph {
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            config,
            connections: Vec::new(),
        }
    }

    /// Recompute every pairwise link. Call whenever the anchor set changes.
    pub fn rebuild(&mut self, anchors: &[AnchorState], rng: &mut Rng) {
        self.connections.clear();
        let threshold = self.config.threshold;
        for i in 0..anchors.len() {
            for j in (i + 1)..anchors.len() {
                let (a, b) = (&anchors[i].anchor, &anchors[j].anchor);
                let distance = a.position.distance(b.position);
                let same_category = a.category == b.category;
                if !same_category && distance >= threshold {
                    continue;
                }
                let strength = if same_category {
                    1.0
                } else {
                    (1.0 - distance / threshold).max(0.0)
                };
                self.connections.push(Connection {
                    a: i,
                    b: j,
                    distance,
                    strength,
                    thickness: if same_category { SAME_CATEGORY_THICKNESS } else { PROXIMITY_THICKNESS },
                    pulse_phase: rng.angle(),
                    active: false,
                });
            }
        }
        log::debug!("{} connections between {} anchors", self.connections.len(), anchors.len());
    }

    /// Advance pulses and re-evaluate activity from the endpoints' hover/energy.
    pub fn step(&mut self, anchors: &[AnchorState]) {
        let energized = |index: usize| {
            anchors
                .get(index)
                .map(|s| s.hovered || s.energy > self.config.energy_threshold)
                .unwrap_or(false)
        };
        for link in &mut self.connections {
            link.pulse_phase = (link.pulse_phase + self.config.pulse_speed) % TAU;
            link.active = energized(link.a) || energized(link.b);
        }
    }

    pub fn draw(&self, anchors: &[AnchorState], list: &mut DrawList, intensity: f32) {
        for link in &self.connections {
            if !link.active && link.strength <= self.config.min_visible_strength {
                continue;
            }
            let (Some(a), Some(b)) = (anchors.get(link.a), anchors.get(link.b)) else {
                continue;
            };
            let (from, to) = (a.position(), b.position());
            let (width, alpha) = if link.active {
                (link.thickness + link.pulse() * 4.0, link.strength * 0.6 + 0.4)
            } else {
                (link.thickness, link.strength * 0.6)
            };
            list.line(from, to, width, alpha * intensity);

            if link.active {
                let marker = from.lerp(to, link.marker_position());
                list.fill_square(marker, MARKER_SIZE, 0.8 * intensity);
            }
        }
    }

    /// Links touching the anchor at `index`.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.connections
            .iter()
            .filter(move |c| c.touches(index))
            .map(move |c| c.other(index))
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    pub fn clear(&mut self) {
        self.connections.clear();
    }
}
