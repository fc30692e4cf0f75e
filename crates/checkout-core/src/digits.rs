//! # Digit Normalizer
//!
//! Strips everything but ASCII digits from user input and regroups the
//! result for display.
//!
//! ## Input Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types:     "4532-0151 1283o0366"                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  normalize_digits() ──► DigitString("4532015112830366")                 │
//! │       │                                                                 │
//! │       ├──► luhn / brand (always on the bare digits)                     │
//! │       │                                                                 │
//! │       └──► grouped() ──► "4532 0151 1283 0366" (written back to field)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;
use ts_rs::TS;

/// Digits per display block.
const GROUP_SIZE: usize = 4;

// =============================================================================
// DigitString
// =============================================================================

/// A string guaranteed to contain only ASCII decimal digits.
///
/// The only way to build one is [`normalize_digits`] (or `From<&str>`, which
/// does the same), so the invariant holds for every value in the program.
/// Serializes as a plain string; there is deliberately no `Deserialize`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
pub struct DigitString(String);

impl DigitString {
    /// Returns the digits as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no digits were present in the input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the digit count lies inside `min..=max`.
    #[inline]
    pub fn len_within(&self, min: usize, max: usize) -> bool {
        (min..=max).contains(&self.len())
    }

    /// Regroups the digits into space-separated blocks of four.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::digits::normalize_digits;
    ///
    /// assert_eq!(normalize_digits("340000000000009").grouped(), "3400 0000 0000 009");
    /// ```
    pub fn grouped(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.len() / GROUP_SIZE);
        for (i, c) in self.0.chars().enumerate() {
            if i > 0 && i % GROUP_SIZE == 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }

    /// The trailing four digits (or fewer for short input), for masked display.
    pub fn last_four(&self) -> &str {
        let start = self.len().saturating_sub(GROUP_SIZE);
        &self.0[start..]
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DigitString {
    fn from(text: &str) -> Self {
        normalize_digits(text)
    }
}

// =============================================================================
// Normalization
// =============================================================================

/// Keeps only the ASCII digits of `text`, in their original order.
///
/// Never fails; input without digits yields an empty [`DigitString`].
///
/// ## Example
/// ```rust
/// use checkout_core::digits::normalize_digits;
///
/// assert_eq!(normalize_digits("4111-1111 1111 1111").as_str(), "4111111111111111");
/// assert!(normalize_digits("no digits").is_empty());
/// ```
pub fn normalize_digits(text: &str) -> DigitString {
    DigitString(text.chars().filter(char::is_ascii_digit).collect())
}

/// Normalizes `text` and regroups it into blocks of four for the card field.
///
/// ## Example
/// ```rust
/// use checkout_core::digits::format_grouped;
///
/// assert_eq!(format_grouped("4111111111111111"), "4111 1111 1111 1111");
/// assert_eq!(format_grouped(""), "");
/// ```
pub fn format_grouped(text: &str) -> String {
    normalize_digits(text).grouped()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_strips_separators() {
        assert_eq!(normalize_digits("4111 1111-1111.1111").as_str(), "4111111111111111");
        assert_eq!(normalize_digits(" 12a3 ").as_str(), "123");
        assert_eq!(normalize_digits("").as_str(), "");
    }

    #[test]
    fn test_normalize_ignores_non_ascii_digits() {
        // Arabic-Indic and full-width digits are not card digits
        assert_eq!(normalize_digits("٤١١١").as_str(), "");
        assert_eq!(normalize_digits("４1").as_str(), "1");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_grouped("41111"), "4111 1");
        assert_eq!(format_grouped("411"), "411");
        assert_eq!(format_grouped("4111"), "4111");
        assert_eq!(format_grouped(""), "");
        assert_eq!(format_grouped("abc"), "");
    }

    #[test]
    fn test_last_four() {
        assert_eq!(normalize_digits("4532015112830366").last_four(), "0366");
        assert_eq!(normalize_digits("12").last_four(), "12");
        assert_eq!(DigitString::default().last_four(), "");
    }

    #[test]
    fn test_len_within() {
        let digits = normalize_digits("1234567890123");
        assert!(digits.len_within(13, 19));
        assert!(!digits.len_within(14, 19));
    }

    proptest! {
        #[test]
        fn prop_normalized_is_all_digits(input in ".*") {
            let digits = normalize_digits(&input);
            prop_assert!(digits.as_str().bytes().all(|b| b.is_ascii_digit()));
        }

        #[test]
        fn prop_grouping_is_idempotent(input in "[0-9 -]{0,40}") {
            let once = format_grouped(&input);
            prop_assert_eq!(format_grouped(&once), once.clone());
            prop_assert!(once.split(' ').all(|block| block.len() <= 4));
        }
    }
}
