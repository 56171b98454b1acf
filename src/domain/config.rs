// ============================================================================
// Field Configuration
// Per-field semantics and decimal-place configuration
// ============================================================================

use crate::numeric::Dp;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Field Semantic
// ============================================================================

/// What a bound field means to the surrounding application.
///
/// The semantic determines the default decimal-place count; callers can still
/// override it per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FieldSemantic {
    /// Monetary amount (unit price, subtotal). 2 decimal places.
    Price,

    /// Quantity or volume measure. 3 decimal places.
    Quantity,

    /// Caller-defined semantic with an explicit decimal-place count.
    Custom,
}

impl FieldSemantic {
    /// Default decimal places for this semantic.
    pub const fn default_dp(self) -> Dp {
        match self {
            FieldSemantic::Price => Dp::PRICE,
            FieldSemantic::Quantity => Dp::QUANTITY,
            FieldSemantic::Custom => Dp::INTEGER,
        }
    }
}

// ============================================================================
// Field Configuration
// ============================================================================

/// Configuration for binding one editable field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldConfig {
    /// Caller-supplied field identifier (e.g. the element id)
    pub id: String,

    /// Field semantic
    pub semantic: FieldSemantic,

    /// Decimal places enforced on commit and serialization
    pub dp: Dp,
}

impl FieldConfig {
    /// Create a configuration with an explicit semantic and its default dp.
    pub fn new(id: impl Into<String>, semantic: FieldSemantic) -> Self {
        Self {
            id: id.into(),
            semantic,
            dp: semantic.default_dp(),
        }
    }

    /// Price field preset (2 decimal places).
    pub fn price(id: impl Into<String>) -> Self {
        Self::new(id, FieldSemantic::Price)
    }

    /// Quantity/volume field preset (3 decimal places).
    pub fn quantity(id: impl Into<String>) -> Self {
        Self::new(id, FieldSemantic::Quantity)
    }

    /// Custom field with an explicit decimal-place count.
    pub fn custom(id: impl Into<String>, dp: Dp) -> Self {
        Self {
            id: id.into(),
            semantic: FieldSemantic::Custom,
            dp,
        }
    }

    /// Builder method: override the decimal-place count.
    pub fn with_dp(mut self, dp: Dp) -> Self {
        self.dp = dp;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.is_empty() {
            return Err("Field id cannot be empty".to_string());
        }
        if self.id.chars().any(char::is_whitespace) {
            return Err("Field id cannot contain whitespace".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let price = FieldConfig::price("unit_price");
        assert_eq!(price.semantic, FieldSemantic::Price);
        assert_eq!(price.dp, Dp::PRICE);

        let qty = FieldConfig::quantity("volume");
        assert_eq!(qty.semantic, FieldSemantic::Quantity);
        assert_eq!(qty.dp, Dp::QUANTITY);
    }

    #[test]
    fn test_dp_override() {
        let config = FieldConfig::price("discount_pct").with_dp(Dp::new(4).unwrap());
        assert_eq!(config.dp.get(), 4);
        assert_eq!(config.semantic, FieldSemantic::Price);
    }

    #[test]
    fn test_custom() {
        let config = FieldConfig::custom("weight", Dp::new(1).unwrap());
        assert_eq!(config.semantic, FieldSemantic::Custom);
        assert_eq!(config.dp.get(), 1);
    }

    #[test]
    fn test_validation() {
        assert!(FieldConfig::price("unit_price").validate().is_ok());
        assert!(FieldConfig::price("").validate().is_err());
        assert!(FieldConfig::price("unit price").validate().is_err());
    }
}
