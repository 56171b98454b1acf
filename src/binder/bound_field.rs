// ============================================================================
// Bound Field
// Core commit contract for one editable numeric field
// ============================================================================

use crate::domain::FieldConfig;
use crate::interfaces::{EditableField, FieldEvent, FieldEventHandler, ValueCodec};
use crate::numeric::Canonical;
use chrono::Utc;
use std::sync::Arc;

/// One editable field bound to a canonicalization contract.
///
/// The binding owns the field handle, its configuration, and the injected
/// codec and event handler. The caller forwards focus-loss notifications to
/// [`BoundField::commit`]; everything else is pull-based.
pub struct BoundField {
    /// Field configuration (id, semantic, decimal places)
    config: FieldConfig,

    /// The field being bound
    field: Box<dyn EditableField>,

    /// Injected canonicalization service
    codec: Arc<dyn ValueCodec>,

    /// Event handler for commit outcomes
    event_handler: Arc<dyn FieldEventHandler>,
}

impl BoundField {
    /// Create a binding.
    ///
    /// Construction does not validate the configuration; use
    /// [`crate::binder::create_from_config`] or [`crate::binder::BoundFieldBuilder`]
    /// for the validated path.
    pub fn new(
        config: FieldConfig,
        field: Box<dyn EditableField>,
        codec: Arc<dyn ValueCodec>,
        event_handler: Arc<dyn FieldEventHandler>,
    ) -> Self {
        Self {
            config,
            field,
            codec,
            event_handler,
        }
    }

    /// The field identifier.
    pub fn id(&self) -> &str {
        &self.config.id
    }

    /// The field configuration.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Current raw field value, exactly as displayed.
    pub fn raw_value(&self) -> String {
        self.field.value()
    }

    /// Apply the commit contract, as on loss of focus.
    ///
    /// - Formula values are left untouched.
    /// - Unparseable values clear the field; absence of a value is never
    ///   silently turned into zero.
    /// - Everything else is replaced by the display form of the canonical
    ///   value at the configured decimal places.
    ///
    /// An empty field stays empty and emits nothing. All emitted events are
    /// forwarded to the event handler and returned.
    pub fn commit(&mut self) -> Vec<FieldEvent> {
        let raw = self.field.value();
        let mut events = Vec::new();

        if raw.trim().is_empty() {
            self.field.clear();
            return events;
        }

        if self.codec.is_formula(&raw) {
            events.push(FieldEvent::FormulaRetained {
                field_id: self.config.id.clone(),
                timestamp: Utc::now(),
            });
        } else {
            match self.codec.canonicalize(&raw) {
                Some(value) => {
                    let canonical = self.codec.enforce_dp(&value, self.config.dp);
                    let display = self.codec.format_for_ui(&canonical);
                    self.field.set_value(&display);
                    tracing::debug!(
                        field = %self.config.id,
                        %canonical,
                        "committed field value"
                    );
                    events.push(FieldEvent::ValueCommitted {
                        field_id: self.config.id.clone(),
                        canonical,
                        display,
                        timestamp: Utc::now(),
                    });
                },
                None => {
                    self.field.clear();
                    tracing::debug!(field = %self.config.id, raw = %raw, "cleared unparseable field");
                    events.push(FieldEvent::FieldCleared {
                        field_id: self.config.id.clone(),
                        raw,
                        timestamp: Utc::now(),
                    });
                },
            }
        }

        self.event_handler.on_events(events.clone());
        events
    }

    /// Canonical form for serialization, independent of what is displayed.
    ///
    /// Applies the same formula bypass as [`commit`](Self::commit): formulas
    /// (and unparseable or empty values) yield `None`.
    pub fn canonical_value(&self) -> Option<Canonical> {
        let raw = self.field.value();
        if self.codec.is_formula(&raw) {
            return None;
        }
        self.codec
            .canonicalize(&raw)
            .map(|value| self.codec.enforce_dp(&value, self.config.dp))
    }

    /// Populate the field from a canonical value (e.g. server data),
    /// rendering it at the configured decimal places.
    pub fn write_canonical(&mut self, value: &Canonical) {
        let canonical = self.codec.enforce_dp(value, self.config.dp);
        let display = self.codec.format_for_ui(&canonical);
        self.field.set_value(&display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::{DecimalCodec, MemoryField, NoOpEventHandler};
    use crate::numeric::canonicalize;
    use parking_lot::Mutex;

    fn bind(config: FieldConfig, initial: &str) -> BoundField {
        BoundField::new(
            config,
            Box::new(MemoryField::new(initial)),
            Arc::new(DecimalCodec),
            Arc::new(NoOpEventHandler),
        )
    }

    #[test]
    fn test_commit_reformats_price() {
        let mut bound = bind(FieldConfig::price("unit_price"), "1.234,5");
        let events = bound.commit();

        assert_eq!(bound.raw_value(), "1234,50");
        assert!(matches!(
            events.as_slice(),
            [FieldEvent::ValueCommitted { display, .. }] if display == "1234,50"
        ));
    }

    #[test]
    fn test_commit_quantity_dp() {
        let mut bound = bind(FieldConfig::quantity("volume"), "12,5");
        bound.commit();
        assert_eq!(bound.raw_value(), "12,500");
    }

    #[test]
    fn test_commit_clears_unparseable() {
        let mut bound = bind(FieldConfig::price("unit_price"), "abc");
        let events = bound.commit();

        assert_eq!(bound.raw_value(), "");
        assert!(matches!(
            events.as_slice(),
            [FieldEvent::FieldCleared { raw, .. }] if raw == "abc"
        ));
    }

    #[test]
    fn test_commit_leaves_formula_untouched() {
        let mut bound = bind(FieldConfig::price("subtotal"), "=A1*B1");
        let events = bound.commit();

        assert_eq!(bound.raw_value(), "=A1*B1");
        assert!(matches!(
            events.as_slice(),
            [FieldEvent::FormulaRetained { .. }]
        ));
    }

    #[test]
    fn test_commit_empty_is_silent() {
        let mut bound = bind(FieldConfig::price("unit_price"), "   ");
        let events = bound.commit();

        assert_eq!(bound.raw_value(), "");
        assert!(events.is_empty());
    }

    #[test]
    fn test_canonical_value_independent_of_display() {
        let bound = bind(FieldConfig::price("unit_price"), "1.234,5");
        // no commit: the field still shows the raw input
        assert_eq!(bound.raw_value(), "1.234,5");
        assert_eq!(bound.canonical_value().unwrap().as_str(), "1234.50");
    }

    #[test]
    fn test_canonical_value_formula_bypass() {
        let bound = bind(FieldConfig::price("subtotal"), "=A1*B1");
        assert_eq!(bound.canonical_value(), None);
    }

    #[test]
    fn test_write_canonical() {
        let mut bound = bind(FieldConfig::quantity("volume"), "");
        bound.write_canonical(&canonicalize("7.2").unwrap());
        assert_eq!(bound.raw_value(), "7,200");
        assert_eq!(bound.canonical_value().unwrap().as_str(), "7.200");
    }

    #[test]
    fn test_events_reach_handler() {
        struct Recording(Mutex<Vec<FieldEvent>>);

        impl FieldEventHandler for Recording {
            fn on_event(&self, event: FieldEvent) {
                self.0.lock().push(event);
            }
        }

        let handler = Arc::new(Recording(Mutex::new(Vec::new())));
        let mut bound = BoundField::new(
            FieldConfig::price("unit_price"),
            Box::new(MemoryField::new("99,9")),
            Arc::new(DecimalCodec),
            handler.clone(),
        );

        bound.commit();
        let seen = handler.0.lock();
        assert_eq!(seen.len(), 1);
        assert!(matches!(
            &seen[0],
            FieldEvent::ValueCommitted { canonical, .. } if canonical.as_str() == "99.90"
        ));
    }
}
