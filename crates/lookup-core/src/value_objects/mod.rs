//! Value objects - immutable domain primitives

mod entity_id;

pub use entity_id::EntityId;
