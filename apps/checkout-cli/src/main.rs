//! # Checkout CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (stderr)
//! 3. Load configuration (env vars, then flags)
//! 4. Run the command
//! 5. Map the outcome to an exit code
//!
//! ## Exit Codes
//! - `0` - success / payment approved
//! - `1` - payment rejected (or quick check failed)
//! - `2` - usage or preferences error

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match checkout_cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(checkout_cli::EXIT_FAILURE)
        }
    }
}
