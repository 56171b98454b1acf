// ============================================================================
// Binder Module
// Field bindings, registry, and construction paths
// ============================================================================

mod bound_field;
mod registry;

pub mod factory;

pub use bound_field::BoundField;
pub use factory::{create_from_config, BoundFieldBuilder};
pub use registry::FieldRegistry;
