//! Letterpress: turn development-session memory letters into blog drafts.
//!
//! This is the entry point for the `letterpress` CLI. It loads `.env` values,
//! parses arguments, runs the locate → generate → write pipeline once, and
//! maps any failure to an exit code in a single place.

mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod generator;
pub mod locator;
pub mod run;
pub mod writer;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Best-effort .env loading; a missing file is not an error.
    let _ = dotenvy::dotenv();

    let _cli = Cli::parse_args();

    match run::run(&config::Config::default()) {
        Ok(_) => {
            println!("🚀 Ready for review and publishing!");
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("❌ Error: {}", err);

            // Return appropriate exit code
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
