// ============================================================================
// Decimal Entry Library
// Locale-tolerant decimal entry with explicit field binding
// ============================================================================

//! # Decimal Entry
//!
//! Canonicalization and display formatting for decimal values typed into
//! editable numeric fields, where the separator convention is ambiguous
//! (`1.234,56` vs `1,234.56`).
//!
//! ## Features
//!
//! - **Deterministic canonicalization** of locale-ambiguous input into a
//!   machine-readable decimal string (dot decimal point, no grouping)
//! - **Fixed decimal places** per field semantic (price = 2, quantity = 3),
//!   truncating rather than rounding
//! - **Formula bypass**: values starting with `=` pass through untouched
//! - **Explicit field binding** with injected codec and event handler, plus
//!   an id-keyed registry for whole-form serialization
//!
//! ## Example
//!
//! ```rust
//! use decimal_entry::prelude::*;
//! use std::sync::Arc;
//!
//! // Bind a price field
//! let mut bound = BoundFieldBuilder::new("unit_price")
//!     .price()
//!     .build(
//!         Box::new(MemoryField::new("1.234,5")),
//!         Arc::new(NoOpEventHandler),
//!     )
//!     .unwrap();
//!
//! // Commit, as on loss of focus: the field is reformatted in place
//! bound.commit();
//! assert_eq!(bound.raw_value(), "1234,50");
//!
//! // The canonical form is what gets serialized
//! assert_eq!(bound.canonical_value().unwrap().as_str(), "1234.50");
//! ```

pub mod binder;
pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::binder::{create_from_config, BoundField, BoundFieldBuilder, FieldRegistry};
    pub use crate::domain::{FieldConfig, FieldSemantic};
    pub use crate::interfaces::{
        DecimalCodec, EditableField, FieldEvent, FieldEventHandler, LoggingEventHandler,
        MemoryField, NoOpEventHandler, ValueCodec,
    };
    pub use crate::numeric::{canonicalize, is_formula, Canonical, Dp, EntryError, EntryResult};
}
