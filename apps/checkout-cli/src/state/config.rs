//! # Configuration State
//!
//! Settings loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--plan`, `--price`, `--prefs-path`)
//! 2. Environment variables (`CHECKOUT_*`)
//! 3. Defaults (this file)

use checkout_core::Money;
use serde::Serialize;
use std::path::PathBuf;

/// Environment variable names.
pub const ENV_PLAN: &str = "CHECKOUT_PLAN";
pub const ENV_PRICE: &str = "CHECKOUT_PRICE";
pub const ENV_CURRENCY_SYMBOL: &str = "CHECKOUT_CURRENCY_SYMBOL";
pub const ENV_PREFS_PATH: &str = "CHECKOUT_PREFS_PATH";
pub const ENV_PREFERS_DARK: &str = "CHECKOUT_PREFERS_DARK";

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Plan name shown in the summary. `None` means the default plan.
    pub plan: Option<String>,

    /// Price override as typed (e.g. "49" or "19.99"). Unparsable text
    /// falls back to the default price.
    pub price: Option<String>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Preferences file. `None` uses the platform config directory.
    pub prefs_path: Option<PathBuf>,

    /// Stand-in for the OS dark-mode setting, used when no theme is saved.
    pub system_prefers_dark: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            plan: None,
            price: None,
            currency_symbol: "$".to_string(),
            prefs_path: None,
            system_prefers_dark: false,
        }
    }
}

impl AppConfig {
    /// Creates a new AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `CHECKOUT_PLAN`: Plan name
    /// - `CHECKOUT_PRICE`: Price override (e.g., "49")
    /// - `CHECKOUT_CURRENCY_SYMBOL`: Currency symbol (default "$")
    /// - `CHECKOUT_PREFS_PATH`: Preferences file path
    /// - `CHECKOUT_PREFERS_DARK`: "1" or "true" when the system is in dark mode
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(plan) = lookup(ENV_PLAN) {
            config.plan = Some(plan);
        }

        if let Some(price) = lookup(ENV_PRICE) {
            config.price = Some(price);
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        if let Some(path) = lookup(ENV_PREFS_PATH).filter(|p| !p.is_empty()) {
            config.prefs_path = Some(PathBuf::from(path));
        }

        if let Some(flag) = lookup(ENV_PREFERS_DARK) {
            config.system_prefers_dark = matches!(flag.trim(), "1" | "true" | "yes");
        }

        config
    }

    /// Applies command-line overrides on top of env and defaults.
    pub fn with_overrides(
        mut self,
        plan: Option<String>,
        price: Option<String>,
        prefs_path: Option<PathBuf>,
    ) -> Self {
        if plan.is_some() {
            self.plan = plan;
        }
        if price.is_some() {
            self.price = price;
        }
        if prefs_path.is_some() {
            self.prefs_path = prefs_path;
        }
        self
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_cli::state::AppConfig;
    /// use checkout_core::Money;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part().abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.plan, None);
        assert_eq!(config.currency_symbol, "$");
        assert!(!config.system_prefers_dark);
    }

    #[test]
    fn test_env_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_PLAN, "DevPilot Team"),
            (ENV_PRICE, "49"),
            (ENV_CURRENCY_SYMBOL, "€"),
            (ENV_PREFS_PATH, "/tmp/p.toml"),
            (ENV_PREFERS_DARK, "true"),
        ]));
        assert_eq!(config.plan.as_deref(), Some("DevPilot Team"));
        assert_eq!(config.price.as_deref(), Some("49"));
        assert_eq!(config.format_currency(Money::from_cents(4900)), "€49.00");
        assert_eq!(config.prefs_path, Some(PathBuf::from("/tmp/p.toml")));
        assert!(config.system_prefers_dark);
    }

    #[test]
    fn test_flags_override_env() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_PLAN, "Env Plan")]))
            .with_overrides(Some("Flag Plan".into()), None, None);
        assert_eq!(config.plan.as_deref(), Some("Flag Plan"));
        assert_eq!(config.price, None);
    }

    #[test]
    fn test_format_currency() {
        let config = AppConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(3161)), "$31.61");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
    }
}
