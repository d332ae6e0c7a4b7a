//! Admin settings model.
//!
//! A single-row table (the schema pins `id = 1`). The boundary fetches the
//! row and passes it into the lifecycle flows explicitly; domain code never
//! looks it up by a magic identifier.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The settings row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminSettings {
    pub id: i16,
    /// Where submission/update notices are sent.
    pub admin_email: String,
    /// When set, the admin is emailed on every new or updated submission.
    pub notify_on_submission: bool,
}

/// DTO for patching the settings row. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAdminSettings {
    pub admin_email: Option<String>,
    pub notify_on_submission: Option<bool>,
}
