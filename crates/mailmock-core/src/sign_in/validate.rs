//! Field Validation
//!
//! Pure checks for the two sign-in fields. The patterns are deliberately
//! loose and are part of the page's contract.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

fn phone_re() -> &'static Regex {
    // ASCII digits only, like the browser's `\d`
    PHONE_RE.get_or_init(|| Regex::new(r"^\+?[0-9\s\-()]+$").expect("phone pattern"))
}

/// Validate an email address or phone number. Surrounding whitespace is
/// ignored.
pub fn validate_identifier(input: &str) -> Result<(), ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::MissingIdentifier);
    }
    if !email_re().is_match(input) && !phone_re().is_match(input) {
        return Err(ValidationError::InvalidIdentifier);
    }
    Ok(())
}

/// Validate a password against the default minimum length
pub fn validate_password(input: &str) -> Result<(), ValidationError> {
    validate_password_len(input, MIN_PASSWORD_LEN)
}

/// Length is counted in characters; the input is not trimmed.
pub fn validate_password_len(input: &str, min_len: usize) -> Result<(), ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    if input.chars().count() < min_len {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Avatar glyph for the password step header
pub fn avatar_glyph(identifier: &str) -> String {
    identifier
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
