//! Prayer request model and DTOs.
//!
//! The request is the only entity a submitter may mutate, and only when the
//! caller-supplied email matches the stored `owner_email` (case-insensitive).
//! All lifecycle dates are computed server-side; the payloads deliberately
//! carry no date fields.

use davenlist_core::types::{DayDate, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `prayer_requests` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PrayerRequest {
    pub id: DbId,
    pub name_english: String,
    pub name_hebrew: String,
    pub name_english_spouse: Option<String>,
    pub name_hebrew_spouse: Option<String>,
    pub category_id: DbId,
    /// Plain string copy of the submitter email, not a foreign key.
    pub owner_email: String,
    pub created_at: DayDate,
    pub updated_at: Option<DayDate>,
    pub last_confirmed_at: DayDate,
    /// Computed: last renewal day + the category's update rate. Informational
    /// for readers; nothing deletes a request on expiry.
    pub expire_at: DayDate,
    pub active: bool,
}

/// DTO for submitting a new name.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequestPayload {
    pub category_id: DbId,
    pub name_english: String,
    pub name_hebrew: String,
    pub name_english_spouse: Option<String>,
    pub name_hebrew_spouse: Option<String>,
}

/// DTO for updating an existing name (full replace of the name fields).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRequestPayload {
    pub id: DbId,
    pub category_id: DbId,
    pub name_english: String,
    pub name_hebrew: String,
    pub name_english_spouse: Option<String>,
    pub name_hebrew_spouse: Option<String>,
}

/// Validated, fully-computed column values for an insert.
///
/// Built by the lifecycle engine after trimming, paired-name validation, and
/// expiry computation; the repository binds it verbatim.
#[derive(Debug, Clone)]
pub struct NewPrayerRequest {
    pub name_english: String,
    pub name_hebrew: String,
    pub name_english_spouse: Option<String>,
    pub name_hebrew_spouse: Option<String>,
    pub category_id: DbId,
    pub owner_email: String,
    pub created_at: DayDate,
    pub last_confirmed_at: DayDate,
    pub expire_at: DayDate,
}
