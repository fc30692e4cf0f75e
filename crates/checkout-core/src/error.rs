//! # Error Types
//!
//! The closed rejection taxonomy of the checkout form.
//!
//! ## Rejection Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Submission Rejections                              │
//! │                                                                         │
//! │  Card length ──► Luhn ──► Expiry ──► CVV ──► Luhn (again) ──► Brand    │
//! │       │            │        │         │          │              │      │
//! │       ▼            ▼        ▼         ▼          ▼              ▼      │
//! │  InvalidLength  FailedLuhnCheck  InvalidExpiry  InvalidCvvFormat       │
//! │                                                          UnknownBrand  │
//! │                                                                         │
//! │  Exactly one reason per submission: the first one hit.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. `Display` is the message shown in the form's message area
//! 3. Every rejection is recoverable; the user fixes the field and resubmits

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Rejection Reason
// =============================================================================

/// Why a submission was rejected.
///
/// The variants are mutually exclusive within one run of the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Card number has fewer than 13 or more than 19 digits.
    #[error("Card number must be between 13 and 19 digits.")]
    InvalidLength,

    /// Card number does not pass the Luhn checksum.
    ///
    /// Raised by both the primary check and the re-check.
    #[error("Invalid credit card number.")]
    FailedLuhnCheck,

    /// Expiry is not `MM/YY`, has a month outside 1-12, or has elapsed.
    #[error("Invalid expiry date.")]
    InvalidExpiry,

    /// CVV is not exactly 3 or 4 digits.
    #[error("Invalid CVV.")]
    InvalidCvvFormat,

    /// No brand in the catalog matches the card prefix.
    #[error("Unknown or unsupported card type.")]
    UnknownBrand,
}

impl RejectionReason {
    /// Every reason, in the order the orchestrator can raise them.
    pub const ALL: [RejectionReason; 5] = [
        RejectionReason::InvalidLength,
        RejectionReason::FailedLuhnCheck,
        RejectionReason::InvalidExpiry,
        RejectionReason::InvalidCvvFormat,
        RejectionReason::UnknownBrand,
    ];

    /// Machine-readable code (SCREAMING_SNAKE_CASE) for JSON consumers.
    pub const fn code(&self) -> &'static str {
        match self {
            RejectionReason::InvalidLength => "INVALID_LENGTH",
            RejectionReason::FailedLuhnCheck => "FAILED_LUHN_CHECK",
            RejectionReason::InvalidExpiry => "INVALID_EXPIRY",
            RejectionReason::InvalidCvvFormat => "INVALID_CVV_FORMAT",
            RejectionReason::UnknownBrand => "UNKNOWN_BRAND",
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
