//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mailcheck` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mailcheck::config::EXIT_FATAL;
use mailcheck::initialization::init_logger_with;
use mailcheck::{evaluate_exit_code, run, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run(&config).await {
        Ok(summary) => process::exit(evaluate_exit_code(config.fail_on, &summary)),
        Err(e) => {
            eprintln!("mailcheck error: {:#}", e);
            process::exit(EXIT_FATAL);
        }
    }
}
