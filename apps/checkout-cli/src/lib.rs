//! # Checkout CLI Library
//!
//! Terminal front end for the DevPilot checkout page.
//!
//! ## Module Organization
//! ```text
//! checkout_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── config.rs   ◄─── AppConfig (env vars + flags)
//! ├── view.rs         ◄─── CheckoutView trait, TerminalView
//! ├── controller.rs   ◄─── CheckoutController (page events)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Dispatch and CommandOutput
//! │   ├── summary.rs  ◄─── Order summary
//! │   ├── card.rs     ◄─── format / pay / luhn
//! │   └── prefs.rs    ◄─── Theme and font size
//! └── error.rs        ◄─── AppError for commands
//! ```

pub mod cli;
pub mod commands;
pub mod controller;
pub mod error;
pub mod state;
pub mod view;

use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use state::AppConfig;

/// Exit code for a rejected payment or failed quick check.
pub const EXIT_REJECTED: u8 = 1;

/// Exit code when a command could not run.
pub const EXIT_FAILURE: u8 = 2;

/// Runs the CLI.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Parse arguments (clap exits on --help / usage errors)               │
/// │  2. Initialize logging (stderr, RUST_LOG)                               │
/// │  3. AppConfig::from_env(), then global flags                            │
/// │  4. commands::execute()                                                 │
/// │  5. Print text or JSON to stdout, pick the exit code                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing();

    let config = AppConfig::from_env().with_overrides(None, None, cli.prefs_path.clone());
    debug!(?config, command = ?cli.command, "Starting checkout");

    match commands::execute(&cli.command, &config) {
        Ok(output) => {
            println!("{}", output.render(cli.json)?);
            Ok(if output.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(EXIT_REJECTED)
            })
        }
        Err(err) if cli.json => {
            let body = serde_json::to_string_pretty(&err).context("Failed to encode error")?;
            println!("{}", body);
            Ok(ExitCode::from(EXIT_FAILURE))
        }
        Err(err) => Err(err.into()),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - Default: WARN only, so stdout/stderr stay quiet for scripts
/// - `RUST_LOG=checkout=debug` - Show debug for the checkout crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
