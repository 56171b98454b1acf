// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod editable_field;
mod event_handler;
mod value_codec;

pub use editable_field::{EditableField, MemoryField};
pub use event_handler::{FieldEvent, FieldEventHandler, LoggingEventHandler, NoOpEventHandler};
pub use value_codec::{DecimalCodec, ValueCodec};
