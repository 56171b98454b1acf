// ============================================================================
// Event Handler Interface
// Defines the contract for observing field commit outcomes
// ============================================================================

use crate::numeric::Canonical;
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted when a bound field is committed
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldEvent {
    /// Input canonicalized; the field now shows the reformatted value
    ValueCommitted {
        field_id: String,
        canonical: Canonical,
        display: String,
        timestamp: DateTime<Utc>,
    },

    /// Input was unparseable; the field was cleared
    FieldCleared {
        field_id: String,
        raw: String,
        timestamp: DateTime<Utc>,
    },

    /// Input is a formula; the field was left untouched
    FormulaRetained {
        field_id: String,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing field commit events
/// Implementations can handle logging, dirty-tracking, notifications, etc.
pub trait FieldEventHandler: Send + Sync {
    /// Handle a field event
    fn on_event(&self, event: FieldEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<FieldEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl FieldEventHandler for NoOpEventHandler {
    fn on_event(&self, _event: FieldEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl FieldEventHandler for LoggingEventHandler {
    fn on_event(&self, event: FieldEvent) {
        tracing::debug!("Field binding event: {:?}", event);
    }
}
