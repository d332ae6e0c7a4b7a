//! Repository for the `prayer_requests` table.
//!
//! Owner-scoped queries compare emails case-insensitively. There is no
//! optimistic-concurrency token; concurrent writes to the same row resolve
//! last-write-wins at the storage layer, an accepted trade-off for this
//! low-contention domain.

use davenlist_core::types::{DayDate, DbId};
use sqlx::PgPool;

use crate::models::prayer_request::{NewPrayerRequest, PrayerRequest};

/// Column list for `prayer_requests` queries.
const REQUEST_COLUMNS: &str = "\
    id, name_english, name_hebrew, name_english_spouse, name_hebrew_spouse, \
    category_id, owner_email, created_at, updated_at, last_confirmed_at, \
    expire_at, active";

/// Provides CRUD operations for prayer requests.
pub struct PrayerRequestRepo;

impl PrayerRequestRepo {
    /// Find a request by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PrayerRequest>, sqlx::Error> {
        let query = format!("SELECT {REQUEST_COLUMNS} FROM prayer_requests WHERE id = $1");
        sqlx::query_as::<_, PrayerRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all requests owned by an email, case-insensitively.
    pub async fn list_by_owner_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Vec<PrayerRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {REQUEST_COLUMNS} FROM prayer_requests \
             WHERE LOWER(owner_email) = LOWER($1) \
             ORDER BY id"
        );
        sqlx::query_as::<_, PrayerRequest>(&query)
            .bind(email)
            .fetch_all(pool)
            .await
    }

    /// List every request (admin view).
    pub async fn list_all(pool: &PgPool) -> Result<Vec<PrayerRequest>, sqlx::Error> {
        let query = format!("SELECT {REQUEST_COLUMNS} FROM prayer_requests ORDER BY id");
        sqlx::query_as::<_, PrayerRequest>(&query).fetch_all(pool).await
    }

    /// List the requests that belong in the weekly digest: active flag set
    /// and not yet past expiry as of `today`.
    pub async fn list_active(
        pool: &PgPool,
        today: DayDate,
    ) -> Result<Vec<PrayerRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {REQUEST_COLUMNS} FROM prayer_requests \
             WHERE active AND expire_at >= $1 \
             ORDER BY id"
        );
        sqlx::query_as::<_, PrayerRequest>(&query)
            .bind(today)
            .fetch_all(pool)
            .await
    }

    /// Insert a validated, fully-computed request.
    pub async fn create(
        pool: &PgPool,
        new: &NewPrayerRequest,
    ) -> Result<PrayerRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO prayer_requests \
                 (name_english, name_hebrew, name_english_spouse, name_hebrew_spouse, \
                  category_id, owner_email, created_at, last_confirmed_at, expire_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {REQUEST_COLUMNS}"
        );
        sqlx::query_as::<_, PrayerRequest>(&query)
            .bind(&new.name_english)
            .bind(&new.name_hebrew)
            .bind(new.name_english_spouse.as_deref())
            .bind(new.name_hebrew_spouse.as_deref())
            .bind(new.category_id)
            .bind(&new.owner_email)
            .bind(new.created_at)
            .bind(new.last_confirmed_at)
            .bind(new.expire_at)
            .fetch_one(pool)
            .await
    }

    /// Full replace of an existing request's mutable fields.
    ///
    /// Returns `None` if no row with the given ID exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        new: &NewPrayerRequest,
        updated_at: DayDate,
    ) -> Result<Option<PrayerRequest>, sqlx::Error> {
        let query = format!(
            "UPDATE prayer_requests SET \
                 name_english = $2, name_hebrew = $3, \
                 name_english_spouse = $4, name_hebrew_spouse = $5, \
                 category_id = $6, owner_email = $7, \
                 updated_at = $8, last_confirmed_at = $9, expire_at = $10 \
             WHERE id = $1 \
             RETURNING {REQUEST_COLUMNS}"
        );
        sqlx::query_as::<_, PrayerRequest>(&query)
            .bind(id)
            .bind(&new.name_english)
            .bind(&new.name_hebrew)
            .bind(new.name_english_spouse.as_deref())
            .bind(new.name_hebrew_spouse.as_deref())
            .bind(new.category_id)
            .bind(&new.owner_email)
            .bind(updated_at)
            .bind(new.last_confirmed_at)
            .bind(new.expire_at)
            .fetch_optional(pool)
            .await
    }

    /// Extend a request's expiry: only the date columns change, the name
    /// fields are untouched and need no re-validation.
    ///
    /// Returns `true` if the row was updated.
    pub async fn extend_expiry(
        pool: &PgPool,
        id: DbId,
        new_expire_at: DayDate,
        today: DayDate,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE prayer_requests SET \
                 expire_at = $2, updated_at = $3, last_confirmed_at = $3 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(new_expire_at)
        .bind(today)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a request by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prayer_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
