//! Handlers for the submitter-facing `/requests` resource.
//!
//! These implement the request lifecycle engine: create, update, extend,
//! delete, and list, all authorized solely by possession of the owner email
//! (case-insensitive comparison against the stored `owner_email`).
//!
//! Admin notices fire after the mutation is committed and are non-fatal: a
//! delivery failure is reported as a `warning` field beside the saved
//! record, never as a request failure.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use davenlist_core::error::CoreError;
use davenlist_core::notices::{self, Notice};
use davenlist_core::types::{DayDate, DbId};
use davenlist_core::{lifecycle, validation};
use davenlist_db::models::category::Category;
use davenlist_db::models::prayer_request::{
    CreateRequestPayload, NewPrayerRequest, PrayerRequest, UpdateRequestPayload,
};
use davenlist_db::repositories::{
    AdminSettingsRepo, CategoryRepo, PrayerRequestRepo, SubmitterRepo,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for the extend and delete operations.
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub email: Option<String>,
}

/// GET /api/v1/requests/mine/{email}
///
/// List the caller's requests. An unknown email and a known email with zero
/// requests both yield an empty list; the two cases are intentionally not
/// distinguishable.
pub async fn list_my_requests(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    if SubmitterRepo::find_by_email(&state.pool, &email).await?.is_none() {
        return Ok(Json(serde_json::json!({ "data": [] })));
    }

    let requests = PrayerRequestRepo::list_by_owner_email(&state.pool, &email).await?;
    Ok(Json(serde_json::json!({ "data": requests })))
}

/// POST /api/v1/requests/submit/{email}
///
/// Submit a new name. Creates the submitter record on first submission.
pub async fn create_request(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<CreateRequestPayload>,
) -> AppResult<Json<serde_json::Value>> {
    let owner_email = validation::normalize_email(&email)?;
    let category = resolve_category(&state, payload.category_id).await?;

    let names = lifecycle::validate_names(
        &payload.name_english,
        &payload.name_hebrew,
        payload.name_english_spouse.as_deref(),
        payload.name_hebrew_spouse.as_deref(),
        category.requires_second_name,
    )?;

    SubmitterRepo::resolve_or_create(&state.pool, &owner_email).await?;

    let today = today();
    let new = build_record(names, &category, owner_email.clone(), today);
    let request = PrayerRequestRepo::create(&state.pool, &new).await?;

    tracing::info!(request_id = request.id, owner = %owner_email, "Prayer request created");

    let notice = notices::submission_notice(
        &request.name_english,
        &request.name_hebrew,
        &category.name_english,
        &owner_email,
    );
    let warning = notify_admin(&state, notice).await;

    Ok(Json(mutation_response(&request, warning)))
}

/// PUT /api/v1/requests/submit/{email}
///
/// Full replace of an existing request. The caller must own the record.
pub async fn update_request(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(payload): Json<UpdateRequestPayload>,
) -> AppResult<Json<serde_json::Value>> {
    let existing = find_request(&state, payload.id).await?;

    // Compare against the stored owner, not the inbound payload: the payload
    // may carry no email at all.
    lifecycle::ensure_owner(&existing.owner_email, &email)?;

    let owner_email = validation::normalize_email(&email)?;
    let category = resolve_category(&state, payload.category_id).await?;

    let names = lifecycle::validate_names(
        &payload.name_english,
        &payload.name_hebrew,
        payload.name_english_spouse.as_deref(),
        payload.name_hebrew_spouse.as_deref(),
        category.requires_second_name,
    )?;

    SubmitterRepo::resolve_or_create(&state.pool, &owner_email).await?;

    let today = today();
    let new = build_record(names, &category, owner_email.clone(), today);
    let updated = PrayerRequestRepo::update(&state.pool, payload.id, &new, today)
        .await?
        .ok_or_else(|| not_found("Request", payload.id))?;

    tracing::info!(request_id = updated.id, owner = %owner_email, "Prayer request updated");

    let notice = notices::update_notice(
        &updated.name_english,
        &updated.name_hebrew,
        &category.name_english,
        &owner_email,
    );
    let warning = notify_admin(&state, notice).await;

    Ok(Json(mutation_response(&updated, warning)))
}

/// POST /api/v1/requests/{id}/extend?email=
///
/// Renew a request: expiry moves to today + the category's update rate.
/// Only the date columns change; the names are not re-validated.
pub async fn extend_request(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<OwnerQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let email = params
        .email
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| {
            CoreError::EmptyInformation("No associated email address was received".to_string())
        })?;

    let existing = find_request(&state, id).await?;
    lifecycle::ensure_owner(&existing.owner_email, &email)?;

    let category = resolve_category(&state, existing.category_id).await?;

    let today = today();
    let new_expire_at = lifecycle::compute_expire_at(today, category.update_rate_days);
    // The row may have been deleted since the ownership check read it.
    let extended = PrayerRequestRepo::extend_expiry(&state.pool, id, new_expire_at, today).await?;
    if !extended {
        return Err(not_found("Request", id).into());
    }

    tracing::info!(request_id = id, %new_expire_at, "Prayer request extended");

    Ok(Json(serde_json::json!({ "data": true })))
}

/// DELETE /api/v1/requests/{id}?email=
///
/// Delete an owned request. Returns the caller's remaining requests rather
/// than a bare acknowledgement.
pub async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<OwnerQuery>,
) -> AppResult<Json<serde_json::Value>> {
    let email = params.email.unwrap_or_default();
    let email = email.trim();

    let existing = find_request(&state, id).await?;
    lifecycle::ensure_owner(&existing.owner_email, email)?;

    PrayerRequestRepo::delete(&state.pool, id).await?;
    tracing::info!(request_id = id, "Prayer request deleted");

    let remaining = PrayerRequestRepo::list_by_owner_email(&state.pool, email).await?;
    Ok(Json(serde_json::json!({ "data": remaining })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn today() -> DayDate {
    Utc::now().date_naive()
}

fn not_found(entity: &'static str, id: DbId) -> CoreError {
    CoreError::NotFound {
        entity,
        key: id.to_string(),
    }
}

async fn find_request(state: &AppState, id: DbId) -> Result<PrayerRequest, crate::error::AppError> {
    PrayerRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Request", id).into())
}

async fn resolve_category(
    state: &AppState,
    category_id: DbId,
) -> Result<Category, crate::error::AppError> {
    CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or_else(|| not_found("Category", category_id).into())
}

/// Assemble the fully-computed insert/replace record from validated names.
fn build_record(
    names: lifecycle::ValidatedNames,
    category: &Category,
    owner_email: String,
    today: DayDate,
) -> NewPrayerRequest {
    let (name_english_spouse, name_hebrew_spouse) = match names.spouse {
        Some((en, he)) => (Some(en), Some(he)),
        None => (None, None),
    };
    NewPrayerRequest {
        name_english: names.name_english,
        name_hebrew: names.name_hebrew,
        name_english_spouse,
        name_hebrew_spouse,
        category_id: category.id,
        owner_email,
        created_at: today,
        last_confirmed_at: today,
        expire_at: lifecycle::compute_expire_at(today, category.update_rate_days),
    }
}

/// Shape a successful mutation response, attaching a `warning` field when
/// the admin notice could not be delivered.
fn mutation_response(request: &PrayerRequest, warning: Option<String>) -> serde_json::Value {
    match warning {
        Some(warning) => serde_json::json!({ "data": request, "warning": warning }),
        None => serde_json::json!({ "data": request }),
    }
}

/// Send an admin notice if the settings ask for one.
///
/// Runs after the mutation is committed. Any failure here — missing settings
/// row, unconfigured SMTP, delivery error — is logged and returned as a
/// warning string; it never rolls back or fails the request.
async fn notify_admin(state: &AppState, notice: Notice) -> Option<String> {
    let settings = match AdminSettingsRepo::get(&state.pool).await {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            tracing::warn!("Admin settings row is missing; notice skipped");
            return Some("The name was saved, but the admin notice could not be sent".to_string());
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to load admin settings; notice skipped");
            return Some("The name was saved, but the admin notice could not be sent".to_string());
        }
    };

    if !settings.notify_on_submission {
        return None;
    }

    let Some(mailer) = &state.mailer else {
        tracing::warn!("SMTP not configured; admin notice skipped");
        return Some("The name was saved, but the admin notice could not be sent".to_string());
    };

    match mailer
        .send(&settings.admin_email, &notice.subject, &notice.body)
        .await
    {
        Ok(()) => None,
        Err(err) => {
            tracing::warn!(error = %err, to = %settings.admin_email, "Admin notice failed");
            Some(format!(
                "The name was saved, but the admin notice failed: {err}"
            ))
        }
    }
}
