//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, address splitting, run failures)
//! - Failure categories for DNS lookups and rejected lines
//! - Per-run statistics over those categories
//!
//! Failures are split into two severities:
//! - **Fatal**: stop the run (`CheckError`)
//! - **Counted**: logged and tallied, processing continues (`LookupErrorType`,
//!   `RejectionType`)

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{AddressError, CheckError, InitializationError, LookupErrorType, RejectionType};
