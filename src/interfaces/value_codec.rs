// ============================================================================
// Value Codec Interface
// Injected canonicalization service for field bindings
// ============================================================================

use crate::numeric::{self, Canonical, Dp};

/// The canonicalization service a binding works against.
///
/// Bindings take a codec instance instead of reaching for a shared global,
/// so alternate locale rules or instrumented test doubles can be injected.
/// The default methods delegate to the standard pipeline in [`crate::numeric`];
/// implementations override only what they change.
pub trait ValueCodec: Send + Sync {
    /// Reduce free-form input to canonical form; `None` means no value.
    fn canonicalize(&self, raw: &str) -> Option<Canonical> {
        numeric::canonicalize(raw)
    }

    /// Enforce exactly `dp` fractional digits (truncating, zero-padding).
    fn enforce_dp(&self, canonical: &Canonical, dp: Dp) -> Canonical {
        canonical.with_dp(dp)
    }

    /// Format a canonical value for on-screen editing.
    fn format_for_ui(&self, canonical: &Canonical) -> String {
        canonical.to_display()
    }

    /// True iff the raw value is a formula and must bypass canonicalization.
    fn is_formula(&self, raw: &str) -> bool {
        numeric::is_formula(raw)
    }
}

/// The standard codec: exactly the crate's canonicalization pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct DecimalCodec;

impl ValueCodec for DecimalCodec {}
