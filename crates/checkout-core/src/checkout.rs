//! # Form Orchestrator
//!
//! Runs every validator against a submitted payment form and reports the
//! first failure, or approval.
//!
//! ## Submission Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PaymentForm { card_number, expiry, cvv }                               │
//! │       │                                                                 │
//! │  1.   normalize card ── len ∉ 13..=19 ──────────► InvalidLength         │
//! │  2.   luhn ──────────── fails ──────────────────► FailedLuhnCheck       │
//! │  3.   expiry (trimmed) ─ invalid / elapsed ─────► InvalidExpiry         │
//! │  4.   cvv (trimmed) ──── not 3-4 digits ────────► InvalidCvvFormat      │
//! │  5.   luhn (re-check) ── fails ─────────────────► FailedLuhnCheck       │
//! │  6.   brand ──────────── no prefix match ───────► UnknownBrand          │
//! │       │                                                                 │
//! │  7.   Approved                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Step 5 repeats step 2 and can never fail on its own. It is kept so the
//! sequence matches the page's historical behavior until the duplication is
//! confirmed as accidental.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::brand::{detect_brand, CardBrand, CardBrandRule};
use crate::cvv::is_valid_cvv;
use crate::digits::normalize_digits;
use crate::error::RejectionReason;
use crate::expiry::is_valid_expiry_at;
use crate::luhn::is_valid_card_number;
use crate::types::{PaymentForm, Verdict};
use crate::{CARD_NUMBER_MAX_LEN, CARD_NUMBER_MIN_LEN};

// =============================================================================
// Report
// =============================================================================

/// Verdict plus the facts a front end needs to describe it.
///
/// Holds only the last four digits; the full number never leaves the
/// orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutReport {
    pub verdict: Verdict,

    /// Brand selected by prefix, when the card got far enough to detect one.
    pub brand: Option<CardBrand>,

    /// Trailing digits of the normalized card number.
    pub last_four: String,
}

impl CheckoutReport {
    /// One-line description, e.g. `"Visa ending in 0366"`.
    pub fn card_label(&self) -> Option<String> {
        self.brand
            .map(|brand| format!("{} ending in {}", brand.name(), self.last_four))
    }
}

// =============================================================================
// Orchestration
// =============================================================================

/// Validates `form` against an explicit `today`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use checkout_core::checkout::validate_submission;
/// use checkout_core::{PaymentForm, RejectionReason, Verdict};
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
/// let form = PaymentForm::new("4532 0151 1283 0366", "10/27", "123");
/// assert_eq!(validate_submission(&form, today), Verdict::Approved);
///
/// let form = PaymentForm::new("4532 0151 1283 0366", "10/27", "12");
/// assert_eq!(
///     validate_submission(&form, today),
///     Verdict::rejected(RejectionReason::InvalidCvvFormat)
/// );
/// ```
pub fn validate_submission(form: &PaymentForm, today: NaiveDate) -> Verdict {
    run_checks(form, today).map(|_| ()).into()
}

/// Validates `form` against the current local date.
pub fn submit(form: &PaymentForm) -> Verdict {
    validate_submission(form, Local::now().date_naive())
}

/// Validates `form` and reports brand and last four digits with the verdict.
pub fn review_submission(form: &PaymentForm, today: NaiveDate) -> CheckoutReport {
    let digits = normalize_digits(&form.card_number);
    let result = run_checks(form, today);

    CheckoutReport {
        verdict: result.map(|_| ()).into(),
        brand: result.ok().map(|rule| rule.brand),
        last_four: digits.last_four().to_string(),
    }
}

fn run_checks(form: &PaymentForm, today: NaiveDate) -> Result<&'static CardBrandRule, RejectionReason> {
    let digits = normalize_digits(&form.card_number);

    if !digits.len_within(CARD_NUMBER_MIN_LEN, CARD_NUMBER_MAX_LEN) {
        return Err(RejectionReason::InvalidLength);
    }

    if !is_valid_card_number(&digits) {
        return Err(RejectionReason::FailedLuhnCheck);
    }

    if !is_valid_expiry_at(form.expiry.trim(), today) {
        return Err(RejectionReason::InvalidExpiry);
    }

    if !is_valid_cvv(form.cvv.trim()) {
        return Err(RejectionReason::InvalidCvvFormat);
    }

    // Re-check, see module docs
    if !is_valid_card_number(&digits) {
        return Err(RejectionReason::FailedLuhnCheck);
    }

    detect_brand(&digits).ok_or(RejectionReason::UnknownBrand)
}

// =============================================================================
// Unit Tests
// =============================================================================
