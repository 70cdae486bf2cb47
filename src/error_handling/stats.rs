//! Processing statistics tracking.
//!
//! Counts rejected input lines and failed DNS lookups over a run. The run is
//! sequential, so counters are plain integers behind `&mut self`.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::{LookupErrorType, RejectionType};

/// Per-run counters for rejected lines and failed lookups.
///
/// All categories are initialized to zero on creation so every kind shows up
/// in summaries even when it never occurred.
#[derive(Debug, Clone)]
pub struct ProcessingStats {
    lookup_errors: HashMap<LookupErrorType, usize>,
    rejections: HashMap<RejectionType, usize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    pub fn new() -> Self {
        ProcessingStats {
            lookup_errors: LookupErrorType::iter().map(|e| (e, 0)).collect(),
            rejections: RejectionType::iter().map(|r| (r, 0)).collect(),
        }
    }

    /// Increment a lookup failure counter.
    pub fn increment_lookup_error(&mut self, error: LookupErrorType) {
        *self.lookup_errors.entry(error).or_insert(0) += 1;
    }

    /// Increment a rejected-line counter.
    pub fn increment_rejection(&mut self, rejection: RejectionType) {
        *self.rejections.entry(rejection).or_insert(0) += 1;
    }

    pub fn get_lookup_error_count(&self, error: LookupErrorType) -> usize {
        self.lookup_errors.get(&error).copied().unwrap_or(0)
    }

    pub fn get_rejection_count(&self, rejection: RejectionType) -> usize {
        self.rejections.get(&rejection).copied().unwrap_or(0)
    }

    /// Total lookup failures across all lookup kinds.
    pub fn total_lookup_errors(&self) -> usize {
        LookupErrorType::iter()
            .map(|e| self.get_lookup_error_count(e))
            .sum()
    }

    /// Total rejected lines across all rejection kinds.
    pub fn total_rejections(&self) -> usize {
        RejectionType::iter()
            .map(|r| self.get_rejection_count(r))
            .sum()
    }

    /// Logs a per-category breakdown at info level; categories with zero
    /// occurrences are omitted.
    pub fn log_summary(&self) {
        for error in LookupErrorType::iter() {
            let count = self.get_lookup_error_count(error);
            if count > 0 {
                log::info!("{}: {}", error.as_str(), count);
            }
        }
        for rejection in RejectionType::iter() {
            let count = self.get_rejection_count(rejection);
            if count > 0 {
                log::info!("{}: {}", rejection.as_str(), count);
            }
        }
    }
}
