//! # Checkout View
//!
//! The UI hooks the controller drives. A browser front end implements
//! these against its elements; the CLI implements them with
//! [`TerminalView`], which collects lines for printing.

use checkout_core::{CardBrandRule, CheckoutSummary};
use serde::Serialize;

use crate::state::AppConfig;

/// Which style a status message is shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// Marker printed in front of the message text.
    pub fn marker(self) -> &'static str {
        match self {
            MessageKind::Success => "✅",
            MessageKind::Error => "❌",
        }
    }
}

/// UI surface of the payment page.
pub trait CheckoutView {
    /// Rewrites the card field with grouped digits.
    fn set_card_number(&mut self, formatted: &str);

    /// Makes the brand icon visible for `rule`.
    fn show_brand(&mut self, rule: &CardBrandRule);

    /// Hides the brand icon.
    fn hide_brand(&mut self);

    /// Replaces the message area.
    fn show_message(&mut self, kind: MessageKind, text: &str);

    /// Clears every form field.
    fn reset_form(&mut self);

    /// Shows plan name, subtotal, tax and total.
    fn render_summary(&mut self, summary: &CheckoutSummary);
}

// =============================================================================
// Terminal View
// =============================================================================

/// [`CheckoutView`] that renders to text lines.
#[derive(Debug, Clone)]
pub struct TerminalView {
    config: AppConfig,
    lines: Vec<String>,
    card_field: String,
}

impl TerminalView {
    pub fn new(config: AppConfig) -> Self {
        TerminalView {
            config,
            lines: Vec::new(),
            card_field: String::new(),
        }
    }

    /// Current contents of the card field.
    pub fn card_field(&self) -> &str {
        &self.card_field
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl CheckoutView for TerminalView {
    fn set_card_number(&mut self, formatted: &str) {
        self.card_field = formatted.to_string();
        self.lines.push(formatted.to_string());
    }

    fn show_brand(&mut self, rule: &CardBrandRule) {
        self.lines.push(format!("Brand: {} ({})", rule.name, rule.icon));
    }

    fn hide_brand(&mut self) {
        self.lines.push("Brand: unknown".to_string());
    }

    fn show_message(&mut self, kind: MessageKind, text: &str) {
        self.lines.push(format!("{} {}", kind.marker(), text));
    }

    fn reset_form(&mut self) {
        self.card_field.clear();
    }

    fn render_summary(&mut self, summary: &CheckoutSummary) {
        let breakdown = &summary.breakdown;
        self.lines.push(format!("Plan:     {}", summary.plan));
        self.lines.push(format!(
            "Subtotal: {}",
            self.config.format_currency(breakdown.subtotal)
        ));
        self.lines.push(format!(
            "Tax ({}%): {}",
            breakdown.tax_rate.percentage(),
            self.config.format_currency(breakdown.tax)
        ));
        self.lines.push(format!(
            "Total:    {}",
            self.config.format_currency(breakdown.total)
        ));
    }
}
