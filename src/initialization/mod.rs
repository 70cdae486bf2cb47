//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (env_logger, plain or JSON)
//! - DNS resolver (system configuration, per-query timeout)
//!
//! All initialization functions return `InitializationError` on failure.

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::init_resolver;
