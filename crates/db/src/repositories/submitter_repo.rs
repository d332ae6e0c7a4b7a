//! Repository for the `submitters` table.
//!
//! Lookups by email are case-insensitive; a unique index on `LOWER(email)`
//! backstops the get-or-create path against concurrent first submissions.

use davenlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::submitter::{CreateSubmitter, Submitter, UpdateSubmitter};

/// Column list for `submitters` queries.
const SUBMITTER_COLUMNS: &str = "id, name, email, whatsapp, phone, active, created_at";

/// Provides CRUD operations for submitters.
pub struct SubmitterRepo;

impl SubmitterRepo {
    /// Find a submitter by email, case-insensitively.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Submitter>, sqlx::Error> {
        let query = format!("SELECT {SUBMITTER_COLUMNS} FROM submitters WHERE LOWER(email) = LOWER($1)");
        sqlx::query_as::<_, Submitter>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a submitter by email, creating one with only the email populated
    /// when absent. Idempotent: the `ON CONFLICT` on the case-insensitive
    /// unique index guarantees at most one row per email.
    pub async fn resolve_or_create(
        pool: &PgPool,
        email: &str,
    ) -> Result<Submitter, sqlx::Error> {
        if let Some(existing) = Self::find_by_email(pool, email).await? {
            return Ok(existing);
        }

        tracing::info!(%email, "Auto-creating submitter on first submission");

        let query = format!(
            "INSERT INTO submitters (email) VALUES ($1) \
             ON CONFLICT ((LOWER(email))) DO UPDATE SET email = submitters.email \
             RETURNING {SUBMITTER_COLUMNS}"
        );
        sqlx::query_as::<_, Submitter>(&query)
            .bind(email)
            .fetch_one(pool)
            .await
    }

    /// List all submitters, newest first.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Submitter>, sqlx::Error> {
        let query = format!("SELECT {SUBMITTER_COLUMNS} FROM submitters ORDER BY id");
        sqlx::query_as::<_, Submitter>(&query).fetch_all(pool).await
    }

    /// Emails of all active submitters (the digest recipient list).
    pub async fn list_active_emails(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT email FROM submitters WHERE active ORDER BY id",
        )
        .fetch_all(pool)
        .await
    }

    /// Create a submitter from the admin DTO.
    pub async fn create(
        pool: &PgPool,
        payload: &CreateSubmitter,
    ) -> Result<Submitter, sqlx::Error> {
        let query = format!(
            "INSERT INTO submitters (name, email, whatsapp, phone) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {SUBMITTER_COLUMNS}"
        );
        sqlx::query_as::<_, Submitter>(&query)
            .bind(payload.name.as_deref())
            .bind(&payload.email)
            .bind(payload.whatsapp.as_deref())
            .bind(payload.phone.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Patch a submitter. Returns `None` if no row with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        payload: &UpdateSubmitter,
    ) -> Result<Option<Submitter>, sqlx::Error> {
        let query = format!(
            "UPDATE submitters SET \
                 name = COALESCE($2, name), \
                 whatsapp = COALESCE($3, whatsapp), \
                 phone = COALESCE($4, phone), \
                 active = COALESCE($5, active) \
             WHERE id = $1 \
             RETURNING {SUBMITTER_COLUMNS}"
        );
        sqlx::query_as::<_, Submitter>(&query)
            .bind(id)
            .bind(payload.name.as_deref())
            .bind(payload.whatsapp.as_deref())
            .bind(payload.phone.as_deref())
            .bind(payload.active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a submitter by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM submitters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Toggle the `active` flag by email. Returns the updated row, or `None`
    /// if no submitter with that email exists.
    pub async fn set_active(
        pool: &PgPool,
        email: &str,
        active: bool,
    ) -> Result<Option<Submitter>, sqlx::Error> {
        let query = format!(
            "UPDATE submitters SET active = $2 \
             WHERE LOWER(email) = LOWER($1) \
             RETURNING {SUBMITTER_COLUMNS}"
        );
        sqlx::query_as::<_, Submitter>(&query)
            .bind(email)
            .bind(active)
            .fetch_optional(pool)
            .await
    }
}
