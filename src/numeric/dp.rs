// ============================================================================
// Decimal Places
// Validated per-field decimal-place count
// ============================================================================

use super::errors::{EntryError, EntryResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of digits a field keeps after the decimal point.
///
/// Supplied per field semantic at configuration time (price fields use 2,
/// quantity/volume fields use 3). Construction rejects counts above
/// [`Dp::MAX`]; a malformed count is a configuration error, not a runtime
/// condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Dp(u8);

impl Dp {
    /// Upper bound on decimal places (matches the i64 fixed-point range)
    pub const MAX: u8 = 18;

    /// No fractional digits
    pub const INTEGER: Dp = Dp(0);

    /// Price fields keep 2 decimal places
    pub const PRICE: Dp = Dp(2);

    /// Quantity/volume fields keep 3 decimal places
    pub const QUANTITY: Dp = Dp(3);

    /// Create a validated decimal-place count.
    ///
    /// # Errors
    /// Returns `DpOutOfRange` if `digits > Dp::MAX`.
    #[inline]
    pub fn new(digits: u8) -> EntryResult<Self> {
        if digits > Self::MAX {
            return Err(EntryError::DpOutOfRange);
        }
        Ok(Self(digits))
    }

    /// Get the digit count.
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Dp {
    type Error = EntryError;

    fn try_from(digits: u8) -> EntryResult<Self> {
        Self::new(digits)
    }
}

impl From<Dp> for u8 {
    fn from(dp: Dp) -> u8 {
        dp.0
    }
}

impl fmt::Display for Dp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(Dp::PRICE.get(), 2);
        assert_eq!(Dp::QUANTITY.get(), 3);
        assert_eq!(Dp::INTEGER.get(), 0);
    }

    #[test]
    fn test_range_check() {
        assert!(Dp::new(0).is_ok());
        assert!(Dp::new(18).is_ok());
        assert_eq!(Dp::new(19), Err(EntryError::DpOutOfRange));
    }

    #[test]
    fn test_try_from() {
        let dp = Dp::try_from(4).unwrap();
        assert_eq!(dp.get(), 4);
        assert_eq!(u8::from(dp), 4);
        assert!(Dp::try_from(200).is_err());
    }
}
