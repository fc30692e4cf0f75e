//! # Domain Types
//!
//! Shared value types used throughout the checkout.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  PaymentForm    │   │    Verdict      │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  card_number    │   │  Approved       │   │  bps (u32)      │       │
//! │  │  expiry         │   │  Rejected {     │   │  900 = 9%       │       │
//! │  │  cvv            │   │    reason }     │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these are plain values with no identity beyond their fields.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::RejectionReason;
use crate::CHECKOUT_TAX_RATE_BPS;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 900 bps = 9% (the checkout's flat rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// The fixed checkout rate (9%).
    #[inline]
    pub const fn checkout() -> Self {
        TaxRate(CHECKOUT_TAX_RATE_BPS)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::checkout()
    }
}

// =============================================================================
// Verdict
// =============================================================================

/// Outcome of one submission: approved, or rejected for exactly one reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// Every check passed.
    Approved,
    /// The first failing check.
    Rejected { reason: RejectionReason },
}

impl Verdict {
    /// Shorthand for a rejection.
    #[inline]
    pub const fn rejected(reason: RejectionReason) -> Self {
        Verdict::Rejected { reason }
    }

    #[inline]
    pub const fn is_approved(&self) -> bool {
        matches!(self, Verdict::Approved)
    }

    /// The rejection reason, if any.
    #[inline]
    pub const fn reason(&self) -> Option<RejectionReason> {
        match self {
            Verdict::Approved => None,
            Verdict::Rejected { reason } => Some(*reason),
        }
    }
}

impl From<Result<(), RejectionReason>> for Verdict {
    fn from(result: Result<(), RejectionReason>) -> Self {
        match result {
            Ok(()) => Verdict::Approved,
            Err(reason) => Verdict::rejected(reason),
        }
    }
}

// =============================================================================
// Payment Form
// =============================================================================

/// Raw field values as typed into the payment form.
///
/// Nothing here is validated; see [`crate::checkout::validate_submission`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    /// Card number, possibly grouped with spaces.
    pub card_number: String,

    /// Expiry as typed (`MM/YY` expected).
    pub expiry: String,

    /// Security code as typed.
    pub cvv: String,
}

impl PaymentForm {
    pub fn new(
        card_number: impl Into<String>,
        expiry: impl Into<String>,
        cvv: impl Into<String>,
    ) -> Self {
        PaymentForm {
            card_number: card_number.into(),
            expiry: expiry.into(),
            cvv: cvv.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate() {
        assert_eq!(TaxRate::checkout().bps(), 900);
        assert_eq!(TaxRate::default(), TaxRate::checkout());
        assert!((TaxRate::from_bps(825).percentage() - 8.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_verdict_helpers() {
        assert!(Verdict::Approved.is_approved());
        let rejected = Verdict::rejected(RejectionReason::UnknownBrand);
        assert!(!rejected.is_approved());
        assert_eq!(rejected.reason(), Some(RejectionReason::UnknownBrand));
        assert_eq!(Verdict::from(Ok(())), Verdict::Approved);
        assert_eq!(Verdict::from(Err(RejectionReason::InvalidCvvFormat)), Verdict::rejected(RejectionReason::InvalidCvvFormat));
    }

    #[test]
    fn test_verdict_json_shape() {
        let json = serde_json::to_value(Verdict::rejected(RejectionReason::InvalidExpiry)).unwrap();
        assert_eq!(json, serde_json::json!({"status": "rejected", "reason": "invalid_expiry"}));

        let json = serde_json::to_value(Verdict::Approved).unwrap();
        assert_eq!(json, serde_json::json!({"status": "approved"}));
    }

    #[test]
    fn test_payment_form_camel_case() {
        let form: PaymentForm =
            serde_json::from_str(r#"{"cardNumber":"4111 1111 1111 1111","expiry":"12/30","cvv":"123"}"#).unwrap();
        assert_eq!(form, PaymentForm::new("4111 1111 1111 1111", "12/30", "123"));
    }
}
