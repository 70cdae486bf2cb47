//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, record prefixes, header lines)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    Config, ConfigValidationError, FailOn, HeaderStyle, LogFormat, LogLevel, OutputFormat,
};
