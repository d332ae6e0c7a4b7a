//! Repository for the single-row `admin_settings` table.

use sqlx::PgPool;

use crate::models::admin_settings::{AdminSettings, UpdateAdminSettings};

/// Column list for `admin_settings` queries.
const SETTINGS_COLUMNS: &str = "id, admin_email, notify_on_submission";

/// Provides access to the settings row.
pub struct AdminSettingsRepo;

impl AdminSettingsRepo {
    /// Fetch the settings row. The row is seeded by migration, so `None`
    /// indicates a broken installation.
    pub async fn get(pool: &PgPool) -> Result<Option<AdminSettings>, sqlx::Error> {
        let query = format!("SELECT {SETTINGS_COLUMNS} FROM admin_settings WHERE id = 1");
        sqlx::query_as::<_, AdminSettings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Patch the settings row. Returns the updated row, or `None` when the
    /// seed row is missing.
    pub async fn update(
        pool: &PgPool,
        payload: &UpdateAdminSettings,
    ) -> Result<Option<AdminSettings>, sqlx::Error> {
        let query = format!(
            "UPDATE admin_settings SET \
                 admin_email = COALESCE($1, admin_email), \
                 notify_on_submission = COALESCE($2, notify_on_submission) \
             WHERE id = 1 \
             RETURNING {SETTINGS_COLUMNS}"
        );
        sqlx::query_as::<_, AdminSettings>(&query)
            .bind(payload.admin_email.as_deref())
            .bind(payload.notify_on_submission)
            .fetch_optional(pool)
            .await
    }
}
