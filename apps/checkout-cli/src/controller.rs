//! # Checkout Controller
//!
//! Connects page events to the validators and reports back through a
//! [`CheckoutView`].
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  card field input ──► on_card_input(raw)                                │
//! │                          ├── set_card_number("4111 1111 ...")           │
//! │                          └── show_brand(rule) / hide_brand()            │
//! │                                                                         │
//! │  form submit ───────► on_submit(form)                                   │
//! │                          ├── review_submission(form, today)             │
//! │                          ├── show_message(kind, text)   (exactly once)  │
//! │                          └── reset_form()               (approved only) │
//! │                                                                         │
//! │  page load ─────────► show_summary(summary)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Local, NaiveDate};
use checkout_core::{
    detect_brand, normalize_digits, review_submission, CardBrandRule, CheckoutReport,
    CheckoutSummary, PaymentForm, Verdict,
};
use tracing::{debug, info};

use crate::view::{CheckoutView, MessageKind};

/// Message shown when every check passes.
pub const APPROVED_MESSAGE: &str = "Payment Approved!";

/// Drives a [`CheckoutView`] from page events.
#[derive(Debug)]
pub struct CheckoutController<V: CheckoutView> {
    view: V,
    today: NaiveDate,
}

impl<V: CheckoutView> CheckoutController<V> {
    /// Controller that checks expiry against `today`.
    pub fn new(view: V, today: NaiveDate) -> Self {
        CheckoutController { view, today }
    }

    /// Controller that checks expiry against the local date.
    pub fn with_local_clock(view: V) -> Self {
        Self::new(view, Local::now().date_naive())
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    /// Formats the card field and updates the brand icon.
    pub fn on_card_input(&mut self, raw: &str) -> Option<&'static CardBrandRule> {
        let digits = normalize_digits(raw);
        self.view.set_card_number(&digits.grouped());

        let brand = detect_brand(&digits);
        match brand {
            Some(rule) => self.view.show_brand(rule),
            None => self.view.hide_brand(),
        }
        brand
    }

    /// Validates the form and shows exactly one message.
    pub fn on_submit(&mut self, form: &PaymentForm) -> CheckoutReport {
        let report = review_submission(form, self.today);

        match report.verdict {
            Verdict::Approved => {
                info!(card = ?report.card_label(), "Payment approved");
                self.view.show_message(MessageKind::Success, APPROVED_MESSAGE);
                self.view.reset_form();
            }
            Verdict::Rejected { reason } => {
                debug!(code = reason.code(), "Payment rejected");
                self.view.show_message(MessageKind::Error, &reason.to_string());
            }
        }

        report
    }

    pub fn show_summary(&mut self, summary: &CheckoutSummary) {
        self.view.render_summary(summary);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
