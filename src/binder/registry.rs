// ============================================================================
// Field Registry
// Explicit per-field registration and whole-form serialization
// ============================================================================

use super::bound_field::BoundField;
use crate::interfaces::FieldEvent;
use crate::numeric::Canonical;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Registry of bound fields, keyed by field id.
///
/// This is the bootstrap surface a page wires its numeric fields through:
/// each field is registered once, explicitly, with its own configuration;
/// commits are routed by id and the whole form serializes from one place.
/// The registry is internally locked, so commit and snapshot calls go
/// through a shared handle without exterior `&mut` plumbing.
#[derive(Default)]
pub struct FieldRegistry {
    fields: RwLock<HashMap<String, BoundField>>,
}

impl FieldRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            fields: RwLock::new(HashMap::new()),
        }
    }

    /// Register a bound field.
    ///
    /// # Errors
    /// Rejects a duplicate id; double-binding a field is a wiring error.
    pub fn register(&self, field: BoundField) -> Result<(), String> {
        let mut fields = self.fields.write();
        let id = field.id().to_string();
        if fields.contains_key(&id) {
            return Err(format!("Field '{}' is already bound", id));
        }
        fields.insert(id, field);
        Ok(())
    }

    /// Remove a binding. Returns the bound field if it was registered.
    pub fn unregister(&self, id: &str) -> Option<BoundField> {
        self.fields.write().remove(id)
    }

    /// True if the id is bound.
    pub fn contains(&self, id: &str) -> bool {
        self.fields.read().contains_key(id)
    }

    /// Number of bound fields.
    pub fn len(&self) -> usize {
        self.fields.read().len()
    }

    /// True if no fields are bound.
    pub fn is_empty(&self) -> bool {
        self.fields.read().is_empty()
    }

    /// Commit one field by id, as on loss of focus.
    ///
    /// Returns `None` for an unknown id, otherwise the emitted events.
    pub fn commit(&self, id: &str) -> Option<Vec<FieldEvent>> {
        self.fields.write().get_mut(id).map(BoundField::commit)
    }

    /// Commit every bound field and collect all emitted events.
    pub fn commit_all(&self) -> Vec<FieldEvent> {
        let mut fields = self.fields.write();
        let mut events = Vec::new();
        for field in fields.values_mut() {
            events.extend(field.commit());
        }
        events
    }

    /// Canonical value of one field; `None` for an unknown id or no value.
    pub fn canonical_value(&self, id: &str) -> Option<Canonical> {
        self.fields.read().get(id).and_then(BoundField::canonical_value)
    }

    /// Canonical snapshot of every field, sorted by id.
    ///
    /// `None` entries are fields with no value (empty, unparseable, or
    /// formula); callers submit them as absent, never as zero.
    pub fn canonical_values(&self) -> Vec<(String, Option<Canonical>)> {
        let fields = self.fields.read();
        let mut values: Vec<_> = fields
            .iter()
            .map(|(id, field)| (id.clone(), field.canonical_value()))
            .collect();
        values.sort_by(|a, b| a.0.cmp(&b.0));
        values
    }

    /// Canonical snapshot as a JSON object (`null` for fields with no value).
    #[cfg(feature = "serde")]
    pub fn canonical_values_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .canonical_values()
            .into_iter()
            .map(|(id, value)| {
                let json = match value {
                    Some(canonical) => serde_json::Value::String(canonical.into_string()),
                    None => serde_json::Value::Null,
                };
                (id, json)
            })
            .collect();
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldConfig;
    use crate::interfaces::{DecimalCodec, MemoryField, NoOpEventHandler};
    use std::sync::Arc;

    fn bound(config: FieldConfig, initial: &str) -> BoundField {
        BoundField::new(
            config,
            Box::new(MemoryField::new(initial)),
            Arc::new(DecimalCodec),
            Arc::new(NoOpEventHandler),
        )
    }

    fn sample_registry() -> FieldRegistry {
        let registry = FieldRegistry::new();
        registry
            .register(bound(FieldConfig::price("unit_price"), "1.234,5"))
            .unwrap();
        registry
            .register(bound(FieldConfig::quantity("volume"), "12,5"))
            .unwrap();
        registry
            .register(bound(FieldConfig::price("subtotal"), "=A1*B1"))
            .unwrap();
        registry
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = sample_registry();
        assert_eq!(registry.len(), 3);
        assert!(registry.contains("volume"));
        assert!(!registry.contains("missing"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let registry = sample_registry();
        let err = registry.register(bound(FieldConfig::price("unit_price"), ""));
        assert!(err.is_err());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_unregister() {
        let registry = sample_registry();
        assert!(registry.unregister("volume").is_some());
        assert!(registry.unregister("volume").is_none());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_commit_by_id() {
        let registry = sample_registry();
        let events = registry.commit("unit_price").unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(
            registry.canonical_value("unit_price").unwrap().as_str(),
            "1234.50"
        );
        assert_eq!(registry.commit("missing"), None);
    }

    #[test]
    fn test_commit_all() {
        let registry = sample_registry();
        let events = registry.commit_all();
        // one event per field: committed, committed, formula retained
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_canonical_snapshot() {
        let registry = sample_registry();
        let values = registry.canonical_values();
        let as_strings: Vec<_> = values
            .iter()
            .map(|(id, v)| (id.as_str(), v.as_ref().map(Canonical::as_str)))
            .collect();
        assert_eq!(
            as_strings,
            vec![
                ("subtotal", None), // formula: serialized as absent
                ("unit_price", Some("1234.50")),
                ("volume", Some("12.500")),
            ]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_canonical_values_json() {
        let registry = sample_registry();
        let json = registry.canonical_values_json();
        assert_eq!(json["unit_price"], "1234.50");
        assert_eq!(json["volume"], "12.500");
        assert!(json["subtotal"].is_null());
    }
}
