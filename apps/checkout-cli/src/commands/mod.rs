//! # Commands Module
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (dispatch + output)
//! ├── summary.rs  ◄─── Order summary
//! ├── card.rs     ◄─── format, pay, luhn
//! └── prefs.rs    ◄─── Theme / font size
//! ```
//!
//! Every command returns a [`CommandOutput`] holding both renderings; the
//! `--json` switch only decides which one is printed.

pub mod card;
pub mod prefs;
pub mod summary;

use anyhow::Context;
use serde::Serialize;
use serde_json::Value;

use crate::cli::Command;
use crate::error::AppError;
use crate::state::AppConfig;

/// Result of a command in text and JSON form.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Lines for the terminal
    pub lines: Vec<String>,

    /// Payload for `--json`
    pub json: Value,

    /// False for a rejected payment or failed quick check (exit code 1)
    pub success: bool,
}

impl CommandOutput {
    pub fn new(lines: Vec<String>, json: Value) -> Self {
        CommandOutput {
            lines,
            json,
            success: true,
        }
    }

    pub fn with_success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    /// Renders the output as printed to stdout.
    pub fn render(&self, json: bool) -> anyhow::Result<String> {
        if json {
            serde_json::to_string_pretty(&self.json).context("Failed to encode JSON output")
        } else {
            Ok(self.lines.join("\n"))
        }
    }
}

/// Runs `command` with `config`.
pub fn execute(command: &Command, config: &AppConfig) -> Result<CommandOutput, AppError> {
    match command {
        Command::Summary { query, plan, price } => {
            let config = config
                .clone()
                .with_overrides(plan.clone(), price.clone(), None);
            summary::summary(&config, query.as_deref())
        }
        Command::Format { input } => card::format(config, input),
        Command::Pay { card, expiry, cvv } => card::pay(config, card, expiry, cvv),
        Command::Luhn { input } => card::luhn(input),
        Command::Prefs { action } => prefs::prefs(config, action),
    }
}

/// Serializes a command payload.
pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::internal(e.to_string()))
}
