//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    29 * 0.09 = 2.6099999999999999  ❌ needs toFixed() to look right     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents + Basis Points                             │
//! │    2900 cents × 900 bps / 10000 = 261 cents  ✅ exact                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(2900); // $29.00
//!
//! // Or from the text of a `price` query parameter
//! let parsed = Money::parse_price("29.00").unwrap();
//! assert_eq!(price, parsed);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use ts_rs::TS;

use crate::types::TaxRate;

/// Leading float literal: sign, digits with optional fraction, optional exponent.
static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
        .expect("valid float prefix pattern")
});

/// Cent amounts at or beyond this magnitude are refused (below `i64::MAX`).
const MAX_CENTS: f64 = 9.0e18;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: the price override is not validated, so negative
///   subtotals must still compute
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_cents(2900); // Represents $29.00
    /// assert_eq!(price.cents(), 2900);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a `price` override the way the checkout page reads it.
    ///
    /// ## Rules
    /// - Leading whitespace is skipped
    /// - The longest leading float literal is used (`"49abc"` reads as 49),
    ///   exponents included (`"4.9e1"` reads as 49)
    /// - The value is rounded half away from zero to whole cents
    ///
    /// Returns `None` when no number leads the text, and for infinite values
    /// or amounts that do not fit in cents.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::parse_price("19.5").map(|m| m.cents()), Some(1950));
    /// assert_eq!(Money::parse_price("1e3").map(|m| m.cents()), Some(100_000));
    /// assert_eq!(Money::parse_price("49abc").map(|m| m.cents()), Some(4900));
    /// assert_eq!(Money::parse_price("abc"), None);
    /// ```
    pub fn parse_price(text: &str) -> Option<Self> {
        let literal = FLOAT_PREFIX.find(text.trim_start())?.as_str();
        let value: f64 = literal.parse().ok()?;
        if !value.is_finite() {
            return None;
        }

        let cents = (value * 100.0).round();
        if cents.abs() >= MAX_CENTS {
            return None;
        }
        Some(Money(cents as i64))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(3161).dollars(), 31);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// The amount with exactly two decimals and no currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(261).to_decimal_string(), "2.61");
    /// assert_eq!(Money::from_cents(-5).to_decimal_string(), "-0.05");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// Calculates tax, rounding half away from zero to the nearest cent.
    ///
    /// ## Implementation
    /// Integer math on basis points: `(amount * bps ± 5000) / 10000`.
    /// The ±5000 is half a cent in the scaled domain; the sign follows the
    /// amount so negative subtotals round symmetrically.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    /// use checkout_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(2900); // $29.00
    /// let rate = TaxRate::from_bps(900);   // 9%
    /// assert_eq!(price.calculate_tax(rate).cents(), 261);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // Use i128 to prevent overflow on large amounts
        let scaled = self.0 as i128 * rate.bps() as i128;
        let half = if scaled < 0 { -5000 } else { 5000 };
        let tax_cents = (scaled + half) / 10000;
        Money::from_cents(tax_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with a dollar sign, e.g. `$31.61`.
///
/// ## Note
/// Front ends with another currency symbol format via
/// [`Money::to_decimal_string`].
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
