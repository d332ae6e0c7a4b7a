//! Prayer-request lifecycle policy.
//!
//! Pure rules shared by the create, update, extend, and delete flows:
//! name trimming and conditional paired-name validation, ownership checks,
//! and expiry computation. The HTTP handlers orchestrate persistence around
//! these functions; nothing here performs I/O.
//!
//! Ownership is verified by case-insensitive string equality between the
//! caller-supplied email and the record's stored owner email. Possession of
//! the email is the sole access-control factor — a deliberately low-assurance
//! trust model, kept as designed.

use chrono::Days;

use crate::error::CoreError;
use crate::types::DayDate;

/// The trimmed, validated name fields of a prayer request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedNames {
    pub name_english: String,
    pub name_hebrew: String,
    /// Present iff the category requires a second name, or the caller
    /// supplied one anyway. `(english, hebrew)`.
    pub spouse: Option<(String, String)>,
}

/// Trim and validate the name fields of a submission.
///
/// The English and Hebrew names are always required. When the category
/// carries the `requires_second_name` capability (e.g. a couple praying for
/// children), both spouse names must be present as well; a blank value
/// counts as absent.
pub fn validate_names(
    name_english: &str,
    name_hebrew: &str,
    name_english_spouse: Option<&str>,
    name_hebrew_spouse: Option<&str>,
    requires_second_name: bool,
) -> Result<ValidatedNames, CoreError> {
    let name_english = name_english.trim();
    let name_hebrew = name_hebrew.trim();
    if name_english.is_empty() || name_hebrew.is_empty() {
        return Err(CoreError::EmptyInformation(
            "Both an English and a Hebrew name must be submitted".to_string(),
        ));
    }

    let spouse_english = name_english_spouse.map(str::trim).filter(|s| !s.is_empty());
    let spouse_hebrew = name_hebrew_spouse.map(str::trim).filter(|s| !s.is_empty());

    let spouse = match (spouse_english, spouse_hebrew) {
        (Some(en), Some(he)) => Some((en.to_string(), he.to_string())),
        (None, None) if !requires_second_name => None,
        _ if requires_second_name => {
            return Err(CoreError::EmptyInformation(
                "This category requires a spouse name (English and Hebrew) to be submitted"
                    .to_string(),
            ));
        }
        // One spouse name without the other, in a category that does not
        // require them: drop the half-filled pair rather than persist it.
        _ => None,
    };

    Ok(ValidatedNames {
        name_english: name_english.to_string(),
        name_hebrew: name_hebrew.to_string(),
        spouse,
    })
}

/// Compute the expiry date from a renewal day and the category's update rate.
///
/// `expire_at = renewed_on + update_rate_days`. Always recomputed server-side;
/// never taken from the client.
pub fn compute_expire_at(renewed_on: DayDate, update_rate_days: i32) -> DayDate {
    renewed_on
        .checked_add_days(Days::new(update_rate_days.max(0) as u64))
        .unwrap_or(DayDate::MAX)
}

/// Case-insensitive ownership comparison. Both sides are trimmed first.
pub fn owner_matches(stored_owner: &str, caller_email: &str) -> bool {
    stored_owner
        .trim()
        .eq_ignore_ascii_case(caller_email.trim())
}

/// Verify the caller owns the record, or fail with [`CoreError::Permission`].
pub fn ensure_owner(stored_owner: &str, caller_email: &str) -> Result<(), CoreError> {
    if owner_matches(stored_owner, caller_email) {
        Ok(())
    } else {
        Err(CoreError::Permission(
            "This name is registered under a different email address".to_string(),
        ))
    }
}
