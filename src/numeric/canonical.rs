// ============================================================================
// Canonical Decimal Values
// Locale-tolerant canonicalization of typed decimal input
// ============================================================================

use super::dp::Dp;
use super::errors::{EntryError, EntryResult};
use std::fmt;
use std::str::FromStr;

/// A machine-readable decimal string.
///
/// Invariant: the inner string matches `^-?\d+(\.\d+)?$` — ASCII digits, an
/// optional single leading minus, an optional single `.` decimal point, no
/// grouping separators. This is the only form ever serialized or handed to a
/// server.
///
/// Values are obtained from free-form input through [`canonicalize`], from
/// trusted canonical text through [`FromStr`]/[`TryFrom<String>`], or from a
/// [`rust_decimal::Decimal`] through [`Canonical::from_decimal`].
///
/// # Example
/// ```
/// use decimal_entry::numeric::{canonicalize, Dp};
///
/// let qty = canonicalize("1.234,5").unwrap();
/// assert_eq!(qty.as_str(), "1234.5");
/// assert_eq!(qty.with_dp(Dp::QUANTITY).as_str(), "1234.500");
/// assert_eq!(qty.with_dp(Dp::QUANTITY).to_display(), "1234,500");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Canonical(String);

// ============================================================================
// Canonicalization
// ============================================================================

/// True iff the trimmed raw value starts with `=`.
///
/// Formula values are opaque to this crate: they bypass canonicalization
/// entirely and must be left untouched by any field binding.
#[inline]
pub fn is_formula(raw: &str) -> bool {
    raw.trim().starts_with('=')
}

/// Convert a free-form, locale-ambiguous decimal string into canonical form.
///
/// Returns `None` for empty and for unparseable input. Callers must treat
/// `None` as "no value" (clear the field), never as zero.
///
/// The pipeline is deterministic and locale-independent:
/// 1. Trim; empty input yields `None`.
/// 2. Strip all whitespace (including non-breaking spaces) and underscores.
/// 3. Classify `.`/`,`:
///    - only one separator kind present: removed entirely when the string
///      matches the thousands-grouping shape (`\d{1,3}` then groups of three),
///      otherwise it is the decimal point;
///    - both present: the separator occurring later in the string is the
///      decimal point, every occurrence of the other is removed.
/// 4. Validate against the canonical grammar; failure yields `None`.
///
/// # Example
/// ```
/// use decimal_entry::numeric::canonicalize;
///
/// assert_eq!(canonicalize("1.234.567").unwrap().as_str(), "1234567");
/// assert_eq!(canonicalize("1,234.56").unwrap().as_str(), "1234.56");
/// assert_eq!(canonicalize("12,5").unwrap().as_str(), "12.5");
/// assert_eq!(canonicalize("abc"), None);
/// ```
pub fn canonicalize(raw: &str) -> Option<Canonical> {
    let compact = compact(raw);
    if compact.is_empty() {
        return None;
    }

    let unified = match (compact.rfind('.'), compact.rfind(',')) {
        (Some(_), None) => {
            if is_thousands_grouped(&compact, '.') {
                strip_separator(&compact, '.')
            } else {
                compact
            }
        },
        (None, Some(_)) => {
            if is_thousands_grouped(&compact, ',') {
                strip_separator(&compact, ',')
            } else {
                compact.replace(',', ".")
            }
        },
        (Some(last_dot), Some(last_comma)) => {
            if last_dot > last_comma {
                strip_separator(&compact, ',')
            } else {
                strip_separator(&compact, '.').replace(',', ".")
            }
        },
        (None, None) => compact,
    };

    if is_canonical(&unified) {
        Some(Canonical(unified))
    } else {
        None
    }
}

/// Strip whitespace and underscore separators.
///
/// U+00A0 and the other Unicode space characters are whitespace to
/// `char::is_whitespace`, so pasted non-breaking spaces are covered.
fn compact(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_')
        .collect()
}

/// Thousands-grouping shape: `\d{1,3}` followed by one or more
/// separator-delimited groups of exactly three digits, optional leading minus.
fn is_thousands_grouped(s: &str, sep: char) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let mut chunks = digits.split(sep);
    match chunks.next() {
        Some(head) if (1..=3).contains(&head.len()) && is_ascii_digits(head) => {},
        _ => return false,
    }
    let mut tail_groups = 0usize;
    for chunk in chunks {
        if chunk.len() != 3 || !is_ascii_digits(chunk) {
            return false;
        }
        tail_groups += 1;
    }
    tail_groups > 0
}

fn strip_separator(s: &str, sep: char) -> String {
    s.chars().filter(|&ch| ch != sep).collect()
}

fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// The canonical grammar: `^-?\d+(\.\d+)?$`.
fn is_canonical(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    match digits.split_once('.') {
        Some((int_part, frac_part)) => is_ascii_digits(int_part) && is_ascii_digits(frac_part),
        None => is_ascii_digits(digits),
    }
}

// ============================================================================
// Canonical Operations
// ============================================================================

impl Canonical {
    /// View the canonical string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the canonical string.
    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Enforce exactly `dp` fractional digits.
    ///
    /// Shorter fractions are zero-padded; longer fractions are truncated,
    /// never rounded, so a saved value never gains precision the user did
    /// not type. `dp == 0` yields no decimal point at all.
    ///
    /// # Example
    /// ```
    /// use decimal_entry::numeric::{canonicalize, Dp};
    ///
    /// let c = canonicalize("12.3456").unwrap();
    /// assert_eq!(c.with_dp(Dp::PRICE).as_str(), "12.34");
    /// assert_eq!(c.with_dp(Dp::INTEGER).as_str(), "12");
    /// ```
    pub fn with_dp(&self, dp: Dp) -> Canonical {
        let digits = dp.get() as usize;
        let (int_part, frac_part) = match self.0.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (self.0.as_str(), ""),
        };

        if digits == 0 {
            return Canonical(int_part.to_string());
        }

        let mut out = String::with_capacity(int_part.len() + 1 + digits);
        out.push_str(int_part);
        out.push('.');
        if frac_part.len() >= digits {
            out.push_str(&frac_part[..digits]);
        } else {
            out.push_str(frac_part);
            for _ in frac_part.len()..digits {
                out.push('0');
            }
        }
        Canonical(out)
    }

    /// Format for on-screen editing: decimal comma, no thousands grouping.
    ///
    /// Grouping is never reintroduced into the editable value; that keeps
    /// cursor behavior simple and the display trivially re-parseable.
    #[inline]
    pub fn to_display(&self) -> String {
        self.0.replace('.', ",")
    }

    /// True for the shapes the grouping heuristic re-reads as grouped:
    /// integer part of at most three digits with a fractional part of exactly
    /// three digits (`1.234` parses as one thousand two hundred thirty-four).
    ///
    /// Such values do not survive a display/re-canonicalize round trip;
    /// callers that need the round trip to hold can check this first.
    pub fn is_grouping_ambiguous(&self) -> bool {
        let digits = self.0.strip_prefix('-').unwrap_or(&self.0);
        match digits.split_once('.') {
            Some((int_part, frac_part)) => int_part.len() <= 3 && frac_part.len() == 3,
            None => false,
        }
    }

    /// True when the value is exactly zero (any number of zero digits).
    pub fn is_zero(&self) -> bool {
        self.0.bytes().all(|b| matches!(b, b'0' | b'.' | b'-'))
    }
}

// ============================================================================
// Conversions (API boundaries)
// ============================================================================

impl Canonical {
    /// Convert to `rust_decimal::Decimal` for arithmetic at API boundaries.
    ///
    /// # Errors
    /// Returns `Overflow` when the value exceeds the 96-bit decimal range.
    pub fn to_decimal(&self) -> EntryResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from_str(&self.0).map_err(|_| EntryError::Overflow)
    }

    /// Convert from `rust_decimal::Decimal`.
    ///
    /// `Decimal`'s display form is already canonical (dot decimal point, no
    /// grouping), so this cannot fail.
    pub fn from_decimal(value: rust_decimal::Decimal) -> Canonical {
        Canonical(value.to_string())
    }
}

/// Strict construction from text that is already canonical.
///
/// Unlike [`canonicalize`], no locale normalization is applied; anything
/// outside the canonical grammar is rejected. Intended for deserialization
/// and other trusted-source paths.
impl TryFrom<String> for Canonical {
    type Error = EntryError;

    fn try_from(value: String) -> EntryResult<Self> {
        if is_canonical(&value) {
            Ok(Canonical(value))
        } else {
            Err(EntryError::Unparseable)
        }
    }
}

impl From<Canonical> for String {
    fn from(value: Canonical) -> String {
        value.0
    }
}

/// Parse free-form input, for `?`-style call sites.
///
/// Runs the full [`canonicalize`] pipeline; empty and unparseable input
/// become `Unparseable`.
impl FromStr for Canonical {
    type Err = EntryError;

    fn from_str(raw: &str) -> EntryResult<Self> {
        canonicalize(raw).ok_or(EntryError::Unparseable)
    }
}

impl fmt::Display for Canonical {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Canonical {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Tests
// ============================================================================
