//! # Summary Command
//!
//! Plan name and price breakdown shown beside the payment form.

use checkout_core::CheckoutParams;
use tracing::{debug, warn};

use super::{to_json, CommandOutput};
use crate::controller::CheckoutController;
use crate::error::AppError;
use crate::state::AppConfig;
use crate::view::TerminalView;

/// Builds the summary from `query` when given, otherwise from the
/// configured plan and price.
pub fn summary(config: &AppConfig, query: Option<&str>) -> Result<CommandOutput, AppError> {
    let params = summary_params(config, query);
    if let Some(price) = params.unreadable_price() {
        warn!(price, "Unparsable price, using the default");
    }

    let summary = params.summary();
    debug!(plan = %summary.plan, total = %summary.breakdown.total, "Summary computed");

    let mut controller = CheckoutController::with_local_clock(TerminalView::new(config.clone()));
    controller.show_summary(&summary);

    Ok(CommandOutput::new(
        controller.into_view().into_lines(),
        to_json(&summary)?,
    ))
}

/// Where `plan` and `price` come from: the query string wins over config.
fn summary_params(config: &AppConfig, query: Option<&str>) -> CheckoutParams {
    match query {
        Some(query) => CheckoutParams::from_query(query),
        None => CheckoutParams {
            plan: config.plan.clone(),
            price: config.price.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_summary() {
        let output = summary(&AppConfig::default(), None).unwrap();
        assert!(output.success);
        assert_eq!(output.lines[0], "Plan:     DevPilot Pro");
        assert_eq!(output.lines[3], "Total:    $31.61");
        assert_eq!(output.json["plan"], "DevPilot Pro");
    }

    #[test]
    fn test_query_wins_over_config() {
        let config = AppConfig::default().with_overrides(Some("Ignored".into()), Some("1".into()), None);
        let output = summary(&config, Some("?plan=DevPilot+Team&price=49")).unwrap();
        assert_eq!(output.lines[0], "Plan:     DevPilot Team");
        assert_eq!(output.lines[1], "Subtotal: $49.00");
        assert_eq!(output.lines[2], "Tax (9%): $4.41");
        assert_eq!(output.lines[3], "Total:    $53.41");
    }

    #[test]
    fn test_unreadable_price_detected_on_both_paths() {
        let config = AppConfig::default().with_overrides(None, Some("abc".into()), None);
        assert_eq!(summary_params(&config, None).unreadable_price(), Some("abc"));

        let params = summary_params(&AppConfig::default(), Some("price=abc"));
        assert_eq!(params.unreadable_price(), Some("abc"));

        let output = summary(&AppConfig::default(), Some("price=abc")).unwrap();
        assert_eq!(output.lines[1], "Subtotal: $29.00");
    }

    #[test]
    fn test_float_price_flag() {
        let config = AppConfig::default().with_overrides(None, Some("4.9e1".into()), None);
        let output = summary(&config, None).unwrap();
        assert_eq!(output.lines[1], "Subtotal: $49.00");
    }

    #[test]
    fn test_bad_price_falls_back() {
        let config = AppConfig::default().with_overrides(None, Some("abc".into()), None);
        let output = summary(&config, None).unwrap();
        assert_eq!(output.lines[1], "Subtotal: $29.00");
    }
}
