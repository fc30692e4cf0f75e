//! # checkout-core: Pure Card Validation for the Checkout Page
//!
//! This crate is the **heart** of the checkout form. It turns freely typed
//! card input into display strings, per-field verdicts and a detected brand,
//! and prices the selected plan. Every function is pure: no I/O, no logging,
//! no shared mutable state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Checkout Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Front End (web page / checkout-cli)                │   │
//! │  │   Card field ──► Brand icon ──► Pay button ──► Message area     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CheckoutView / controller              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────┐ ┌────────┐ ┌────────┐ ┌────────┐ ┌────────────┐   │   │
//! │  │   │ digits │ │  luhn  │ │ brand  │ │ expiry │ │ cvv        │   │   │
//! │  │   └────────┘ └────────┘ └────────┘ └────────┘ └────────────┘   │   │
//! │  │   ┌────────────────┐ ┌─────────────────┐ ┌──────────────────┐  │   │
//! │  │   │ money / types  │ │ pricing         │ │ checkout         │  │   │
//! │  │   │ Money, TaxRate │ │ PriceBreakdown  │ │ Orchestrator     │  │   │
//! │  │   └────────────────┘ └─────────────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE OF CARD DATA • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`digits`] - Digit normalization and 4-digit grouping
//! - [`luhn`] - Luhn checksum with a caller-supplied length window
//! - [`brand`] - Ordered brand catalog (Visa, Mastercard, Amex, Discover)
//! - [`expiry`] - Strict `MM/YY` parsing against the current month
//! - [`cvv`] - 3–4 digit security code format
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Subtotal / tax / total for the selected plan
//! - [`checkout`] - Submission orchestrator producing one [`Verdict`]
//! - [`types`] - Shared value types (TaxRate, Verdict, PaymentForm)
//! - [`error`] - Closed rejection taxonomy
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{digits, brand, luhn};
//!
//! let digits = digits::normalize_digits("4532 0151 1283 0366");
//! assert!(luhn::is_valid_card_number(&digits));
//! assert_eq!(brand::detect_brand(&digits).map(|r| r.name), Some("Visa"));
//! assert_eq!(digits.grouped(), "4532 0151 1283 0366");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod brand;
pub mod checkout;
pub mod cvv;
pub mod digits;
pub mod error;
pub mod expiry;
pub mod luhn;
pub mod money;
pub mod pricing;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use brand::{detect_brand, CardBrand, CardBrandRule};
pub use checkout::{review_submission, validate_submission, CheckoutReport};
pub use cvv::is_valid_cvv;
pub use digits::{format_grouped, normalize_digits, DigitString};
pub use error::RejectionReason;
pub use expiry::{is_valid_expiry, is_valid_expiry_at, ExpiryDate};
pub use luhn::is_valid_luhn;
pub use money::Money;
pub use pricing::{compute_price_breakdown, CheckoutParams, CheckoutSummary, PriceBreakdown};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Shortest card number accepted by the submission path.
pub const CARD_NUMBER_MIN_LEN: usize = 13;

/// Longest card number accepted by any path.
pub const CARD_NUMBER_MAX_LEN: usize = 19;

/// Shortest number accepted by the standalone quick check.
///
/// ## Known Inconsistency
/// The quick check has always allowed 12 digits while the submission path
/// requires 13. Both windows are kept until product confirms which is right.
pub const QUICK_CHECK_MIN_LEN: usize = 12;

/// Subtotal used when the page is opened without a `price` parameter ($29.00).
pub const DEFAULT_SUBTOTAL_CENTS: i64 = 2900;

/// Flat checkout tax rate in basis points (9%).
pub const CHECKOUT_TAX_RATE_BPS: u32 = 900;

/// Plan shown when the page is opened without a `plan` parameter.
pub const DEFAULT_PLAN_NAME: &str = "DevPilot Pro";
