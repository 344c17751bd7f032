pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod input;

// Re-export key types at crate root for convenience
pub use api::config::{
    AttractorConfig, AttractorTier, BoundaryMode, ConnectionConfig, EffectsConfig, FieldConfig,
    LoopConfig, ParticleConfig,
};
pub use api::types::{Anchor, AnchorId, PointerState, Trigger, Viewport};
pub use core::intensity::Intensity;
pub use core::render_loop::{AnchorSource, LoopState, RenderLoop, StaticAnchors};
pub use core::scheduler::{FrameScheduler, FrameToken, ManualScheduler};
pub use core::time::FixedTimestep;
pub use input::queue::TriggerQueue;
pub use renderer::draw_list::{DrawCommand, DrawKind, DrawList};
pub use systems::anchors::{AnchorSet, AnchorState};
pub use systems::attractors::{Attractor, AttractorRegistry};
pub use systems::connections::{Connection, ConnectionGraph};
pub use systems::effects::{Effect, EffectFamily, EffectRegistry, Rng};
pub use systems::field::VectorField;
pub use systems::particles::{Particle, ParticlePool};
