//! Submitter model and admin DTOs.
//!
//! A submitter is the lightweight identity record keyed by email. Rows are
//! auto-created on first submission with only the email populated; the admin
//! surface can fill in the rest or toggle the `active` flag that controls
//! weekly digest delivery.

use davenlist_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `submitters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Submitter {
    pub id: DbId,
    pub name: Option<String>,
    /// The identity key. Stored as submitted; compared case-insensitively.
    pub email: String,
    pub whatsapp: Option<String>,
    pub phone: Option<String>,
    /// Inactive submitters are excluded from digest delivery.
    pub active: bool,
    pub created_at: Timestamp,
}

/// DTO for the admin creating a submitter directly.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubmitter {
    pub name: Option<String>,
    pub email: String,
    pub whatsapp: Option<String>,
    pub phone: Option<String>,
}

/// DTO for the admin patching a submitter. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSubmitter {
    pub name: Option<String>,
    pub whatsapp: Option<String>,
    pub phone: Option<String>,
    pub active: Option<bool>,
}
