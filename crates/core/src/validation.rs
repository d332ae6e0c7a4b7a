//! Field-level validation for submitter contact details.
//!
//! The email address doubles as the submitter's identity key, so it is
//! validated and normalized (trimmed, lowercased) before it is stored or
//! compared. Names and phone numbers follow the same character rules the
//! public submission form enforces.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// RFC-like email pattern. Deliberately permissive: dots and dashes in the
/// local part, a dotted domain with a 2-5 letter TLD.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[_a-zA-Z0-9-]+(\.[_a-zA-Z0-9-]+)*@[a-zA-Z0-9-]+(\.[a-zA-Z0-9-]+)*\.[a-zA-Z]{2,5}$")
        .expect("email regex is valid")
});

/// Person names: letters, spaces, hyphens, apostrophes.
static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z '\-]+$").expect("name regex is valid"));

/// Phone / WhatsApp numbers: digits only. Stored as strings since a number
/// can exceed what fits in an integer and may later allow separators.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("phone regex is valid"));

/// Validate and normalize a submitter email.
///
/// Returns the trimmed, lowercased form used as the canonical owner key.
pub fn normalize_email(email: &str) -> Result<String, CoreError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyInformation(
            "No associated email address was received".to_string(),
        ));
    }
    if !EMAIL_RE.is_match(trimmed) {
        return Err(CoreError::EmptyInformation(format!(
            "'{trimmed}' is not a valid email address"
        )));
    }
    Ok(trimmed.to_lowercase())
}

/// Validate an optional submitter display name.
pub fn validate_person_name(name: &str) -> Result<(), CoreError> {
    if !NAME_RE.is_match(name.trim()) {
        return Err(CoreError::EmptyInformation(
            "Submitter name may contain only letters, spaces, hyphens and apostrophes"
                .to_string(),
        ));
    }
    Ok(())
}

/// Validate an optional phone or WhatsApp number.
pub fn validate_phone(number: &str) -> Result<(), CoreError> {
    if !PHONE_RE.is_match(number) {
        return Err(CoreError::EmptyInformation(
            "Phone number may contain only numeric digits".to_string(),
        ));
    }
    Ok(())
}
