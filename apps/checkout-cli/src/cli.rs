//! # Command-Line Arguments
//!
//! ```text
//! checkout [--json] [--prefs-path FILE] <COMMAND>
//!
//!   summary [--query Q] [--plan P] [--price X]   plan, subtotal, tax, total
//!   format <INPUT>                              grouped digits + brand
//!   pay --card C --expiry MM/YY --cvv N         validate a payment
//!   luhn <INPUT>                                quick format check
//!   prefs <ACTION>                              theme / font size
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// DevPilot checkout: card validation and order summary.
#[derive(Debug, Parser)]
#[command(name = "checkout", version, about)]
pub struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Preferences file (default: platform config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub prefs_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the order summary for a plan
    Summary {
        /// Page query string, e.g. "plan=DevPilot+Team&price=49"
        #[arg(long)]
        query: Option<String>,

        /// Plan name
        #[arg(long)]
        plan: Option<String>,

        /// Price override, e.g. 49 or 19.99
        #[arg(long)]
        price: Option<String>,
    },

    /// Group card digits in blocks of four and detect the brand
    Format {
        /// Card number as typed
        input: String,
    },

    /// Validate a payment form
    Pay {
        /// Card number (spaces and dashes allowed)
        #[arg(long)]
        card: String,

        /// Expiry date as MM/YY
        #[arg(long)]
        expiry: String,

        /// Security code
        #[arg(long)]
        cvv: String,
    },

    /// Quick Luhn check of a number as typed
    Luhn {
        input: String,
    },

    /// Show or change display preferences
    Prefs {
        #[command(subcommand)]
        action: PrefsAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum PrefsAction {
    /// Print current preferences
    Show,

    /// Switch between light and dark
    ToggleTheme,

    /// Set the theme explicitly
    Theme {
        /// light or dark
        name: String,
    },

    /// Increase font size by one step
    FontUp,

    /// Decrease font size by one step
    FontDown,

    /// Set font size in pixels (clamped to 14-20)
    Font {
        #[arg(allow_negative_numbers = true)]
        px: i64,
    },
}
