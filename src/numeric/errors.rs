// ============================================================================
// Entry Errors
// Error types for decimal-entry boundary violations
// ============================================================================

use std::fmt;

/// Errors raised at the crate's construction and conversion boundaries.
///
/// Unparseable user input on the primary `canonicalize` path is signaled by
/// `None`, never by an error; `Unparseable` only appears on strict paths
/// (`FromStr`, `TryFrom<String>`) that demand an already-valid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryError {
    /// Input does not reduce to the canonical decimal grammar
    Unparseable,
    /// Requested decimal-place count exceeds the supported range
    DpOutOfRange,
    /// Value does not fit the boundary decimal type
    Overflow,
    /// Field configuration carries an empty identifier
    EmptyFieldId,
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryError::Unparseable => {
                write!(f, "unparseable input: could not reduce to a canonical decimal")
            },
            EntryError::DpOutOfRange => {
                write!(f, "decimal-place count out of supported range")
            },
            EntryError::Overflow => write!(f, "value exceeds the decimal conversion range"),
            EntryError::EmptyFieldId => write!(f, "field identifier cannot be empty"),
        }
    }
}

impl std::error::Error for EntryError {}

/// Result type alias for entry operations
pub type EntryResult<T> = Result<T, EntryError>;
