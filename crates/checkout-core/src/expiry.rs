//! # Expiry Validator
//!
//! Strict `MM/YY` parsing and the "not yet elapsed" check.
//!
//! ## Comparison Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  today = 2026-10 (current_yy = 26, current_month = 10)                  │
//! │                                                                         │
//! │  "11/27" → year 27 > 26                        → valid                  │
//! │  "10/26" → same year, month 10 >= 10           → valid                  │
//! │  "09/26" → same year, month 9 < 10             → expired                │
//! │  "13/30" → month out of range                  → invalid                │
//! │  "1/27", "01-27", "01/2027"                    → wrong shape            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Years are compared as flat two-digit integers, not century-aware: a card
//! reading "01/00" entered in 2099 is expired.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// ExpiryDate
// =============================================================================

/// A parsed `MM/YY` expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExpiryDate {
    /// Month, 1-12.
    pub month: u8,

    /// Two-digit year, 0-99.
    pub year: u8,
}

impl ExpiryDate {
    /// Parses the strict `MM/YY` form.
    ///
    /// Returns `None` for any other shape and for months outside 1-12.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::expiry::ExpiryDate;
    ///
    /// let exp = ExpiryDate::parse("07/29").unwrap();
    /// assert_eq!((exp.month, exp.year), (7, 29));
    /// assert!(ExpiryDate::parse("7/29").is_none());
    /// assert!(ExpiryDate::parse("00/29").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        if bytes.len() != 5 || bytes[2] != b'/' {
            return None;
        }

        let month = two_digits(bytes[0], bytes[1])?;
        let year = two_digits(bytes[3], bytes[4])?;

        if !(1..=12).contains(&month) {
            return None;
        }

        Some(ExpiryDate { month, year })
    }

    /// True when this expiry has not elapsed in the month of `today`.
    pub fn is_current_or_future(&self, today: NaiveDate) -> bool {
        let current_year = (today.year().rem_euclid(100)) as u8;
        let current_month = today.month() as u8;

        self.year > current_year || (self.year == current_year && self.month >= current_month)
    }
}

impl fmt::Display for ExpiryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}", self.month, self.year)
    }
}

fn two_digits(tens: u8, ones: u8) -> Option<u8> {
    if tens.is_ascii_digit() && ones.is_ascii_digit() {
        Some((tens - b'0') * 10 + (ones - b'0'))
    } else {
        None
    }
}

// =============================================================================
// Validators
// =============================================================================

/// Validates `text` against the current local date.
pub fn is_valid_expiry(text: &str) -> bool {
    is_valid_expiry_at(text, Local::now().date_naive())
}

/// Validates `text` against an explicit `today`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use checkout_core::expiry::is_valid_expiry_at;
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// assert!(is_valid_expiry_at("10/26", today));
/// assert!(!is_valid_expiry_at("09/26", today));
/// assert!(!is_valid_expiry_at("13/25", today));
/// ```
pub fn is_valid_expiry_at(text: &str, today: NaiveDate) -> bool {
    ExpiryDate::parse(text).is_some_and(|exp| exp.is_current_or_future(today))
}

// =============================================================================
// Unit Tests
// =============================================================================
