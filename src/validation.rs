use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{RolodexError, RolodexResult};

// The trailing \S+ is greedy, so non-whitespace garbage after a valid
// prefix ("a@b.c!!!") is absorbed and accepted. The phone rule has no
// such escape hatch: digits only, nothing before or after.
static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("identifier pattern"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d{10,15}$").expect("phone pattern"));

/// Validates an email-shaped string (used for both the unique identifier
/// and the email field). Returns the value unchanged on success.
pub fn identifier(value: &str, field: &str) -> RolodexResult<String> {
    if IDENTIFIER_RE.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(RolodexError::InvalidField {
            field: field.to_string(),
        })
    }
}

/// Validates a phone number: optional leading `+`, then 10-15 digits.
pub fn phone(value: &str, field: &str) -> RolodexResult<String> {
    if PHONE_RE.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(RolodexError::InvalidField {
            field: field.to_string(),
        })
    }
}
