//! # Price Calculator
//!
//! Subtotal, tax and total for the plan being purchased.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  /checkout?plan=DevPilot%20Team&price=49                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CheckoutSummary::from_query() ← THIS MODULE                            │
//! │       │                                                                 │
//! │       ├── plan missing/empty → "DevPilot Pro"                           │
//! │       ├── price missing/unparsable → 29.00                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────┐                                       │
//! │  │  DevPilot Team               │                                       │
//! │  │  Subtotal            $49.00  │                                       │
//! │  │  Tax (9%)             $4.41  │                                       │
//! │  │  Total               $53.41  │                                       │
//! │  └──────────────────────────────┘                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::TaxRate;
use crate::{DEFAULT_PLAN_NAME, DEFAULT_SUBTOTAL_CENTS};

// =============================================================================
// Price Breakdown
// =============================================================================

/// Subtotal, tax and total for one purchase.
///
/// ## Invariants
/// - `tax == subtotal.calculate_tax(tax_rate)`
/// - `total == subtotal + tax`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub subtotal: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
}

impl PriceBreakdown {
    /// Computes tax and total for `subtotal` at `tax_rate`.
    pub fn new(subtotal: Money, tax_rate: TaxRate) -> Self {
        let tax = subtotal.calculate_tax(tax_rate);
        PriceBreakdown {
            subtotal,
            tax_rate,
            tax,
            total: subtotal + tax,
        }
    }

    /// Display strings `(subtotal, tax, total)`, two decimals, no symbol.
    pub fn display_amounts(&self) -> (String, String, String) {
        (
            self.subtotal.to_decimal_string(),
            self.tax.to_decimal_string(),
            self.total.to_decimal_string(),
        )
    }
}

impl Default for PriceBreakdown {
    fn default() -> Self {
        compute_price_breakdown(None)
    }
}

/// Computes the checkout breakdown at the fixed 9% rate.
///
/// `None` uses the default subtotal of $29.00. Negative subtotals are not
/// rejected.
///
/// ## Example
/// ```rust
/// use checkout_core::pricing::compute_price_breakdown;
///
/// let breakdown = compute_price_breakdown(None);
/// assert_eq!(
///     breakdown.display_amounts(),
///     ("29.00".to_string(), "2.61".to_string(), "31.61".to_string())
/// );
/// ```
pub fn compute_price_breakdown(subtotal: Option<Money>) -> PriceBreakdown {
    let subtotal = subtotal.unwrap_or(Money::from_cents(DEFAULT_SUBTOTAL_CENTS));
    PriceBreakdown::new(subtotal, TaxRate::checkout())
}

/// Parses a price override, falling back to the default subtotal.
///
/// The text is read as a float literal (see [`Money::parse_price`]).
/// Missing, empty or unparsable text all yield $29.00.
pub fn subtotal_from_text(price: Option<&str>) -> Money {
    price
        .and_then(Money::parse_price)
        .unwrap_or(Money::from_cents(DEFAULT_SUBTOTAL_CENTS))
}

// =============================================================================
// Checkout Summary
// =============================================================================

/// Plan name plus its price breakdown, as shown beside the payment form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub plan: String,
    pub breakdown: PriceBreakdown,
}

impl CheckoutSummary {
    /// Builds a summary from the `plan` and `price` parameter values.
    ///
    /// An empty plan name counts as missing.
    pub fn from_params(plan: Option<&str>, price: Option<&str>) -> Self {
        let plan = plan
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PLAN_NAME)
            .to_string();

        CheckoutSummary {
            plan,
            breakdown: compute_price_breakdown(Some(subtotal_from_text(price))),
        }
    }

    /// Builds a summary from a URL query string (`plan=...&price=...`).
    ///
    /// See [`CheckoutParams::from_query`] for the decoding rules.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::pricing::CheckoutSummary;
    ///
    /// let summary = CheckoutSummary::from_query("?plan=DevPilot+Team&price=49");
    /// assert_eq!(summary.plan, "DevPilot Team");
    /// assert_eq!(summary.breakdown.total.cents(), 5341);
    /// ```
    pub fn from_query(query: &str) -> Self {
        CheckoutParams::from_query(query).summary()
    }
}

// =============================================================================
// Checkout Params
// =============================================================================

/// Raw `plan` and `price` values as the page received them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutParams {
    pub plan: Option<String>,
    pub price: Option<String>,
}

impl CheckoutParams {
    /// Decodes a URL query string.
    ///
    /// A leading `?` is allowed. Values are percent-decoded and `+` means a
    /// space. When a key repeats, the first occurrence wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut params = CheckoutParams::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match &*key {
                "plan" if params.plan.is_none() => params.plan = Some(value.into_owned()),
                "price" if params.price.is_none() => params.price = Some(value.into_owned()),
                _ => {}
            }
        }
        params
    }

    /// The price text when it is present but does not read as a number.
    ///
    /// Such a price silently becomes the default subtotal.
    pub fn unreadable_price(&self) -> Option<&str> {
        self.price
            .as_deref()
            .filter(|p| !p.trim().is_empty() && Money::parse_price(p).is_none())
    }

    pub fn summary(&self) -> CheckoutSummary {
        CheckoutSummary::from_params(self.plan.as_deref(), self.price.as_deref())
    }
}

impl Default for CheckoutSummary {
    fn default() -> Self {
        Self::from_params(None, None)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_breakdown() {
        let breakdown = compute_price_breakdown(Some(Money::from_cents(2900)));
        let (subtotal, tax, total) = breakdown.display_amounts();
        assert_eq!(subtotal, "29.00");
        assert_eq!(tax, "2.61");
        assert_eq!(total, "31.61");
        assert_eq!(breakdown, compute_price_breakdown(None));
        assert_eq!(breakdown.tax_rate.bps(), 900);
    }

    #[test]
    fn test_breakdown_invariants() {
        for cents in [0, 1, 50, 999, 4900, 123_456] {
            let b = compute_price_breakdown(Some(Money::from_cents(cents)));
            assert_eq!(b.total, b.subtotal + b.tax);
            assert_eq!(b.tax, b.subtotal.calculate_tax(b.tax_rate));
        }
    }

    #[test]
    fn test_negative_subtotal_is_not_rejected() {
        let b = compute_price_breakdown(Some(Money::from_cents(-1000)));
        assert_eq!(b.display_amounts(), ("-10.00".into(), "-0.90".into(), "-10.90".into()));
    }

    #[test]
    fn test_subtotal_fallback() {
        assert_eq!(subtotal_from_text(None).cents(), 2900);
        assert_eq!(subtotal_from_text(Some("")).cents(), 2900);
        assert_eq!(subtotal_from_text(Some("free")).cents(), 2900);
        assert_eq!(subtotal_from_text(Some("49.5")).cents(), 4950);
    }

    #[test]
    fn test_summary_defaults() {
        let summary = CheckoutSummary::default();
        assert_eq!(summary.plan, "DevPilot Pro");
        assert_eq!(summary.breakdown.total.cents(), 3161);

        let summary = CheckoutSummary::from_query("");
        assert_eq!(summary, CheckoutSummary::default());

        let summary = CheckoutSummary::from_query("plan=&price=abc");
        assert_eq!(summary, CheckoutSummary::default());
    }

    #[test]
    fn test_summary_from_query() {
        let summary = CheckoutSummary::from_query("?plan=Team%20Plan&price=49&utm=x");
        assert_eq!(summary.plan, "Team Plan");
        assert_eq!(
            summary.breakdown.display_amounts(),
            ("49.00".into(), "4.41".into(), "53.41".into())
        );
    }

    #[test]
    fn test_summary_first_key_wins() {
        let summary = CheckoutSummary::from_query("price=10&price=20&plan=A&plan=B");
        assert_eq!(summary.plan, "A");
        assert_eq!(summary.breakdown.subtotal.cents(), 1000);
    }

    #[test]
    fn test_float_price_text() {
        assert_eq!(subtotal_from_text(Some("1e3")).cents(), 100_000);
        assert_eq!(subtotal_from_text(Some("4.9e1")).cents(), 4900);
        assert_eq!(subtotal_from_text(Some("49abc")).cents(), 4900);
        assert_eq!(subtotal_from_text(Some("NaN")).cents(), 2900);

        let summary = CheckoutSummary::from_query("price=4.9e1");
        assert_eq!(summary.breakdown.total.cents(), 5341);
    }

    #[test]
    fn test_params_unreadable_price() {
        let params = CheckoutParams::from_query("?plan=Team&price=abc");
        assert_eq!(params.plan.as_deref(), Some("Team"));
        assert_eq!(params.unreadable_price(), Some("abc"));
        assert_eq!(params.summary().breakdown.subtotal.cents(), 2900);

        assert_eq!(CheckoutParams::from_query("price=49abc").unreadable_price(), None);
        assert_eq!(CheckoutParams::from_query("price=").unreadable_price(), None);
        assert_eq!(CheckoutParams::from_query("plan=Team").unreadable_price(), None);
    }

    #[test]
    fn test_summary_json_shape() {
        let json = serde_json::to_value(CheckoutSummary::default()).unwrap();
        assert_eq!(json["plan"], "DevPilot Pro");
        assert_eq!(json["breakdown"]["taxRate"], 900);
        assert_eq!(json["breakdown"]["total"], 3161);
    }
}
