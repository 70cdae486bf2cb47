//! Email address splitting.
//!
//! Only the presence and position of "@" is checked; the local part and domain
//! are not validated further. A domain that is not a valid DNS name simply
//! produces failed or empty lookups later on.

use crate::error_handling::AddressError;

/// An input line split into its local part and domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    pub local_part: String,
    pub domain: String,
}

/// Splits one input line into an [`EmailAddress`].
///
/// Surrounding whitespace is ignored. The line must contain exactly one "@"
/// with non-empty text on both sides.
///
/// # Errors
///
/// - [`AddressError::MissingAt`] if the line contains no "@"
/// - [`AddressError::Malformed`] if it contains more than one "@", or either
///   side of the "@" is empty
///
/// Both variants carry the original line for reporting.
pub fn split_address(line: &str) -> Result<EmailAddress, AddressError> {
    let trimmed = line.trim();
    if !trimmed.contains('@') {
        return Err(AddressError::MissingAt(line.to_string()));
    }

    let mut parts = trimmed.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
            Ok(EmailAddress {
                local_part: local.to_string(),
                domain: domain.to_string(),
            })
        }
        _ => Err(AddressError::Malformed(line.to_string())),
    }
}
