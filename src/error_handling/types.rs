//! Error type definitions.
//!
//! This module defines the error types and failure categories used throughout
//! the application.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Why a line was rejected by the address splitter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The line has no "@" at all.
    #[error("Kindly include the @ in the email address: {0}")]
    MissingAt(String),

    /// The line has an "@" but does not split into exactly two non-empty parts.
    #[error("Kindly enter a valid email address: {0}")]
    Malformed(String),
}

/// Errors that stop a check run.
#[derive(Error, Debug)]
pub enum CheckError {
    /// A line without "@" was read while running fail-fast.
    #[error(transparent)]
    InvalidAddress(#[from] AddressError),

    /// The input stream failed mid-read.
    #[error("could not read from input: {0}")]
    InputRead(#[source] std::io::Error),

    /// Reports or diagnostics could not be written.
    #[error("could not write output: {0}")]
    OutputWrite(#[source] std::io::Error),
}

/// Kinds of DNS lookups that can fail while checking a domain.
///
/// A failure here never stops the run; the lookup is treated as returning no
/// records and counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupErrorType {
    MxLookup,
    SpfTxtLookup,
    DmarcTxtLookup,
}

/// Kinds of input lines rejected before any lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum RejectionType {
    /// No "@" present
    MissingAt,
    /// Multiple "@" or an empty side
    Malformed,
}

impl std::fmt::Display for LookupErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LookupErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupErrorType::MxLookup => "DNS MX lookup error",
            LookupErrorType::SpfTxtLookup => "DNS TXT (SPF) lookup error",
            LookupErrorType::DmarcTxtLookup => "DNS TXT (DMARC) lookup error",
        }
    }
}

impl RejectionType {
    /// Returns a human-readable string representation of the rejection type.
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionType::MissingAt => "Missing @",
            RejectionType::Malformed => "Malformed address",
        }
    }
}

impl From<&AddressError> for RejectionType {
    fn from(e: &AddressError) -> Self {
        match e {
            AddressError::MissingAt(_) => RejectionType::MissingAt,
            AddressError::Malformed(_) => RejectionType::Malformed,
        }
    }
}
