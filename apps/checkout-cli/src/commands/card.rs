//! # Card Commands
//!
//! `format`, `pay` and `luhn`: the card-field events of the payment page.

use checkout_core::luhn::{quick_check, quick_check_message};
use checkout_core::{normalize_digits, PaymentForm};
use serde::Serialize;
use tracing::debug;

use super::{to_json, CommandOutput};
use crate::controller::CheckoutController;
use crate::error::AppError;
use crate::state::AppConfig;
use crate::view::TerminalView;

/// JSON payload of `format`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormatResponse<'a> {
    formatted: String,
    brand: Option<&'a str>,
    icon: Option<&'a str>,
}

/// JSON payload of `luhn`.
#[derive(Debug, Serialize)]
struct LuhnResponse {
    valid: bool,
    message: &'static str,
}

/// Formats the typed number and detects its brand.
pub fn format(config: &AppConfig, input: &str) -> Result<CommandOutput, AppError> {
    let mut controller = CheckoutController::with_local_clock(TerminalView::new(config.clone()));
    let rule = controller.on_card_input(input);

    let response = FormatResponse {
        formatted: controller.view().card_field().to_string(),
        brand: rule.map(|r| r.name),
        icon: rule.map(|r| r.icon),
    };
    let json = to_json(&response)?;

    Ok(CommandOutput::new(controller.into_view().into_lines(), json))
}

/// Validates a payment form. Not successful when rejected.
pub fn pay(
    config: &AppConfig,
    card: &str,
    expiry: &str,
    cvv: &str,
) -> Result<CommandOutput, AppError> {
    let form = PaymentForm::new(card, expiry, cvv);
    let digits = normalize_digits(card);
    debug!(last_four = digits.last_four(), "Validating payment");

    let mut controller = CheckoutController::with_local_clock(TerminalView::new(config.clone()));
    let report = controller.on_submit(&form);

    let mut lines = controller.into_view().into_lines();
    if let Some(label) = report.card_label().filter(|_| report.verdict.is_approved()) {
        lines.push(label);
    }

    Ok(CommandOutput::new(lines, to_json(&report)?).with_success(report.verdict.is_approved()))
}

/// Quick format check of a number as typed.
pub fn luhn(input: &str) -> Result<CommandOutput, AppError> {
    let response = LuhnResponse {
        valid: quick_check(input),
        message: quick_check_message(input),
    };

    Ok(CommandOutput::new(vec![response.message.to_string()], to_json(&response)?)
        .with_success(response.valid))
}
