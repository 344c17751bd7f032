pub mod anchors;
pub mod attractors;
pub mod connections;
pub mod effects;
pub mod field;
pub mod particles;
