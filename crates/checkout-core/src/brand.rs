//! # Brand Detector
//!
//! Classifies a card number by its leading digits.
//!
//! ## Catalog (first match wins)
//! ```text
//! ┌──────────────────┬─────────────────────────────┬──────────────────────┐
//! │ Brand            │ Prefix                      │ Icon                 │
//! ├──────────────────┼─────────────────────────────┼──────────────────────┤
//! │ Visa             │ 4                           │ visa.png             │
//! │ Mastercard       │ 51-55, 222-229, 23-27       │ mastercard.png       │
//! │ American Express │ 34, 37                      │ amex.png             │
//! │ Discover         │ 6011, 65, 644-649           │ discover.png         │
//! └──────────────────┴─────────────────────────────┴──────────────────────┘
//! ```
//!
//! The prefix ranges are the literal rules the checkout page has always used,
//! not the complete ISO/IEC 7812 BIN table (e.g. only part of the Mastercard
//! 2-series is covered).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::digits::DigitString;

// =============================================================================
// Card Brand
// =============================================================================

/// A card brand the checkout accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CardBrand {
    Visa,
    Mastercard,
    AmericanExpress,
    Discover,
}

impl CardBrand {
    /// Display name shown next to the card field.
    pub const fn name(&self) -> &'static str {
        match self {
            CardBrand::Visa => "Visa",
            CardBrand::Mastercard => "Mastercard",
            CardBrand::AmericanExpress => "American Express",
            CardBrand::Discover => "Discover",
        }
    }

    /// The catalog rule for this brand.
    pub fn rule(&self) -> &'static CardBrandRule {
        // Position in the catalog
        let index = match self {
            CardBrand::Visa => 0,
            CardBrand::Mastercard => 1,
            CardBrand::AmericanExpress => 2,
            CardBrand::Discover => 3,
        };
        &catalog()[index]
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Brand Rule
// =============================================================================

/// One immutable entry of the brand catalog.
#[derive(Debug)]
pub struct CardBrandRule {
    /// Brand this rule identifies.
    pub brand: CardBrand,

    /// Display name (same as `brand.name()`).
    pub name: &'static str,

    /// Matched against the start of the digits to pick the brand.
    prefix: Regex,

    /// Complete well-formed number for this brand (length included).
    full: Regex,

    /// Icon resource shown in the card field.
    pub icon: &'static str,
}

impl CardBrandRule {
    fn new(brand: CardBrand, prefix: &str, full: &str, icon: &'static str) -> Self {
        CardBrandRule {
            brand,
            name: brand.name(),
            // Patterns are compile-time constants covered by the tests below
            prefix: Regex::new(prefix).expect("valid brand prefix pattern"),
            full: Regex::new(full).expect("valid brand number pattern"),
            icon,
        }
    }

    /// True when the start of `digits` belongs to this brand.
    pub fn matches_prefix(&self, digits: &DigitString) -> bool {
        self.prefix.is_match(digits.as_str())
    }

    /// True when `digits` is a complete, correctly sized number for this brand.
    ///
    /// Informational only: the submission path selects the brand by prefix.
    pub fn matches_full(&self, digits: &DigitString) -> bool {
        self.full.is_match(digits.as_str())
    }

    /// The prefix pattern source, for diagnostics.
    pub fn prefix_pattern(&self) -> &str {
        self.prefix.as_str()
    }
}

static CATALOG: Lazy<Vec<CardBrandRule>> = Lazy::new(|| {
    vec![
        CardBrandRule::new(
            CardBrand::Visa,
            r"^4",
            r"^4[0-9]{12}(?:[0-9]{3})?$",
            "assets/cards/visa.png",
        ),
        CardBrandRule::new(
            CardBrand::Mastercard,
            r"^(5[1-5]|22[2-9]|2[3-7])",
            r"^(5[1-5][0-9]{14}|2(?:2[2-9][0-9]{2}|2[3-9][0-9]{3}|[3-6][0-9]{4}|7[01][0-9]{3}|720[0-9]{2}))[0-9]*$",
            "assets/cards/mastercard.png",
        ),
        CardBrandRule::new(
            CardBrand::AmericanExpress,
            r"^3[47]",
            r"^3[47][0-9]{13}$",
            "assets/cards/amex.png",
        ),
        CardBrandRule::new(
            CardBrand::Discover,
            r"^(6011|65|64[4-9])",
            r"^(6011|65|64[4-9])[0-9]{12,15}$",
            "assets/cards/discover.png",
        ),
    ]
});

/// The ordered brand catalog, built once per process.
pub fn catalog() -> &'static [CardBrandRule] {
    &CATALOG
}

// =============================================================================
// Detection
// =============================================================================

/// Returns the first catalog rule whose prefix matches `digits`.
///
/// A prefix match is enough: the number may still fail Luhn or the brand's
/// full-length pattern.
///
/// ## Example
/// ```rust
/// use checkout_core::brand::{detect_brand, CardBrand};
/// use checkout_core::digits::normalize_digits;
///
/// let rule = detect_brand(&normalize_digits("4111 1111 1111 1111")).unwrap();
/// assert_eq!(rule.brand, CardBrand::Visa);
/// assert!(detect_brand(&normalize_digits("1234")).is_none());
/// ```
pub fn detect_brand(digits: &DigitString) -> Option<&'static CardBrandRule> {
    catalog().iter().find(|rule| rule.matches_prefix(digits))
}

// =============================================================================
// Unit Tests
// =============================================================================
