// ============================================================================
// Binding Factory
// Creates validated field bindings
// ============================================================================

use super::bound_field::BoundField;
use crate::domain::FieldConfig;
use crate::interfaces::{DecimalCodec, EditableField, FieldEventHandler, ValueCodec};
use crate::numeric::Dp;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a field binding from configuration
///
/// # Arguments
/// * `config` - Field configuration
/// * `field` - The editable field to bind
/// * `event_handler` - Event handler for commit outcomes
///
/// # Returns
/// * `Result<BoundField, String>` - Configured binding or error
///
/// # Example
/// ```
/// use decimal_entry::prelude::*;
/// use std::sync::Arc;
///
/// let config = FieldConfig::price("unit_price");
/// let field = Box::new(MemoryField::new("1.234,5"));
/// let bound = create_from_config(config, field, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(bound.id(), "unit_price");
/// ```
pub fn create_from_config(
    config: FieldConfig,
    field: Box<dyn EditableField>,
    event_handler: Arc<dyn FieldEventHandler>,
) -> Result<BoundField, String> {
    assemble(config, field, Arc::new(DecimalCodec), event_handler)
}

/// Validates configuration, then assembles the binding.
fn assemble(
    config: FieldConfig,
    field: Box<dyn EditableField>,
    codec: Arc<dyn ValueCodec>,
    event_handler: Arc<dyn FieldEventHandler>,
) -> Result<BoundField, String> {
    config.validate()?;
    Ok(BoundField::new(config, field, codec, event_handler))
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating field bindings with fluent API
///
/// # Example
/// ```
/// use decimal_entry::prelude::*;
/// use std::sync::Arc;
///
/// let bound = BoundFieldBuilder::new("volume")
///     .quantity()
///     .build(Box::new(MemoryField::new("12,5")), Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(bound.canonical_value().unwrap().as_str(), "12.500");
/// ```
pub struct BoundFieldBuilder {
    config: FieldConfig,
    codec: Arc<dyn ValueCodec>,
}

impl BoundFieldBuilder {
    /// Create a new builder for the specified field id (price semantics by
    /// default).
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            config: FieldConfig::price(id),
            codec: Arc::new(DecimalCodec),
        }
    }

    // ========================================================================
    // Semantic Configuration
    // ========================================================================

    /// Configure as a price field (2 decimal places, default).
    pub fn price(mut self) -> Self {
        let id = self.config.id;
        self.config = FieldConfig::price(id);
        self
    }

    /// Configure as a quantity/volume field (3 decimal places).
    pub fn quantity(mut self) -> Self {
        let id = self.config.id;
        self.config = FieldConfig::quantity(id);
        self
    }

    /// Configure as a custom field with an explicit decimal-place count.
    pub fn custom(mut self, dp: Dp) -> Self {
        let id = self.config.id;
        self.config = FieldConfig::custom(id, dp);
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Override the decimal-place count, keeping the semantic.
    pub fn with_dp(mut self, dp: Dp) -> Self {
        self.config.dp = dp;
        self
    }

    /// Inject a non-standard codec.
    pub fn with_codec(mut self, codec: Arc<dyn ValueCodec>) -> Self {
        self.codec = codec;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the binding.
    pub fn build(
        self,
        field: Box<dyn EditableField>,
        event_handler: Arc<dyn FieldEventHandler>,
    ) -> Result<BoundField, String> {
        assemble(self.config, field, self.codec, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &FieldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldSemantic;
    use crate::interfaces::{MemoryField, NoOpEventHandler};

    fn field(initial: &str) -> Box<dyn EditableField> {
        Box::new(MemoryField::new(initial))
    }

    #[test]
    fn test_create_from_config() {
        let bound = create_from_config(
            FieldConfig::quantity("volume"),
            field("1,5"),
            Arc::new(NoOpEventHandler),
        )
        .unwrap();

        assert_eq!(bound.id(), "volume");
        assert_eq!(bound.canonical_value().unwrap().as_str(), "1.500");
    }

    #[test]
    fn test_create_rejects_invalid_config() {
        let result = create_from_config(
            FieldConfig::price(""),
            field(""),
            Arc::new(NoOpEventHandler),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_defaults_to_price() {
        let builder = BoundFieldBuilder::new("unit_price");
        assert_eq!(builder.get_config().semantic, FieldSemantic::Price);
        assert_eq!(builder.get_config().dp, Dp::PRICE);
    }

    #[test]
    fn test_builder_quantity() {
        let bound = BoundFieldBuilder::new("volume")
            .quantity()
            .build(field("2,25"), Arc::new(NoOpEventHandler))
            .unwrap();

        assert_eq!(bound.canonical_value().unwrap().as_str(), "2.250");
    }

    #[test]
    fn test_builder_custom_dp() {
        let bound = BoundFieldBuilder::new("weight")
            .custom(Dp::new(1).unwrap())
            .build(field("3,14"), Arc::new(NoOpEventHandler))
            .unwrap();

        assert_eq!(bound.canonical_value().unwrap().as_str(), "3.1");
    }

    #[test]
    fn test_builder_dp_override() {
        let bound = BoundFieldBuilder::new("rate")
            .price()
            .with_dp(Dp::new(4).unwrap())
            .build(field("0,5"), Arc::new(NoOpEventHandler))
            .unwrap();

        assert_eq!(bound.canonical_value().unwrap().as_str(), "0.5000");
    }

    #[test]
    fn test_builder_rejects_invalid_id() {
        let result = BoundFieldBuilder::new("bad id")
            .build(field(""), Arc::new(NoOpEventHandler));
        assert!(result.is_err());
    }
}
