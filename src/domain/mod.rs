// ============================================================================
// Domain Models Module
// Per-field configuration and semantics
// ============================================================================

pub mod config;

pub use config::{FieldConfig, FieldSemantic};
