//! Handlers for the `/admin` surface.
//!
//! Authentication of the administrative actor happens upstream of this
//! service; these handlers assume the caller is already verified.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use davenlist_core::digest::{self, DigestCategory, DigestName};
use davenlist_core::error::CoreError;
use davenlist_core::types::DbId;
use davenlist_core::{notices, parasha, validation};
use davenlist_db::models::admin_settings::UpdateAdminSettings;
use davenlist_db::models::submitter::{CreateSubmitter, UpdateSubmitter};
use davenlist_db::repositories::{
    AdminSettingsRepo, CategoryRepo, PrayerRequestRepo, SubmitterRepo,
};
use davenlist_email::{weekly, EmailError};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/requests
///
/// List every request, regardless of owner.
pub async fn list_all_requests(
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let requests = PrayerRequestRepo::list_all(&state.pool).await?;
    Ok(Json(serde_json::json!({ "data": requests })))
}

/// DELETE /api/v1/admin/requests/{id}
///
/// Delete any request. No ownership check: the admin may remove anything.
pub async fn delete_any_request(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PrayerRequestRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found("Request", id.to_string()).into());
    }
    tracing::info!(request_id = id, "Request deleted by admin");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/settings
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let settings = AdminSettingsRepo::get(&state.pool)
        .await?
        .ok_or_else(|| not_found("AdminSettings", "1".to_string()))?;
    Ok(Json(serde_json::json!({ "data": settings })))
}

/// PUT /api/v1/admin/settings
pub async fn update_settings(
    State(state): State<AppState>,
    Json(mut payload): Json<UpdateAdminSettings>,
) -> AppResult<Json<serde_json::Value>> {
    if let Some(email) = &payload.admin_email {
        payload.admin_email = Some(validation::normalize_email(email)?);
    }

    let settings = AdminSettingsRepo::update(&state.pool, &payload)
        .await?
        .ok_or_else(|| not_found("AdminSettings", "1".to_string()))?;
    Ok(Json(serde_json::json!({ "data": settings })))
}

// ---------------------------------------------------------------------------
// Submitters
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/submitters
pub async fn list_submitters(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let submitters = SubmitterRepo::list_all(&state.pool).await?;
    Ok(Json(serde_json::json!({ "data": submitters })))
}

/// POST /api/v1/admin/submitters
pub async fn create_submitter(
    State(state): State<AppState>,
    Json(mut payload): Json<CreateSubmitter>,
) -> AppResult<Json<serde_json::Value>> {
    payload.email = validation::normalize_email(&payload.email)?;
    validate_contact_fields(payload.name.as_deref(), payload.whatsapp.as_deref(), payload.phone.as_deref())?;

    let submitter = SubmitterRepo::create(&state.pool, &payload).await?;
    Ok(Json(serde_json::json!({ "data": submitter })))
}

/// PUT /api/v1/admin/submitters/{id}
pub async fn update_submitter(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(payload): Json<UpdateSubmitter>,
) -> AppResult<Json<serde_json::Value>> {
    validate_contact_fields(payload.name.as_deref(), payload.whatsapp.as_deref(), payload.phone.as_deref())?;

    let submitter = SubmitterRepo::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| not_found("Submitter", id.to_string()))?;
    Ok(Json(serde_json::json!({ "data": submitter })))
}

/// DELETE /api/v1/admin/submitters/{id}
pub async fn delete_submitter(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SubmitterRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(not_found("Submitter", id.to_string()).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/admin/submitters/activate/{email}
///
/// Re-include a submitter in digest delivery. Returns the full submitter
/// list so the admin view can refresh in one round trip.
pub async fn activate_submitter(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    set_submitter_active(&state, &email, true).await
}

/// POST /api/v1/admin/submitters/deactivate/{email}
pub async fn deactivate_submitter(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    set_submitter_active(&state, &email, false).await
}

async fn set_submitter_active(
    state: &AppState,
    email: &str,
    active: bool,
) -> AppResult<Json<serde_json::Value>> {
    SubmitterRepo::set_active(&state.pool, email, active)
        .await?
        .ok_or_else(|| not_found("Submitter", email.to_string()))?;

    tracing::info!(%email, active, "Submitter activation toggled");

    let submitters = SubmitterRepo::list_all(&state.pool).await?;
    Ok(Json(serde_json::json!({ "data": submitters })))
}

// ---------------------------------------------------------------------------
// Weekly digest / urgent broadcast
// ---------------------------------------------------------------------------

/// Body of the admin-composed weekly send.
#[derive(Debug, Deserialize)]
pub struct WeeklyMessage {
    pub message: Option<String>,
}

/// POST /api/v1/admin/weekly/{parasha_id}
///
/// Assemble and send the weekly digest with an optional admin message.
pub async fn send_weekly(
    State(state): State<AppState>,
    Path(parasha_id): Path<DbId>,
    Json(body): Json<WeeklyMessage>,
) -> AppResult<Json<serde_json::Value>> {
    let message = body.message.map(|m| m.trim().to_string()).filter(|m| !m.is_empty());
    send_weekly_digest(&state, parasha_id, message).await
}

/// GET /api/v1/admin/weekly/{parasha_id}
///
/// Link-triggered resend (e.g. from the admin's own email): same assembly
/// path, no custom message.
pub async fn send_weekly_from_link(
    State(state): State<AppState>,
    Path(parasha_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    send_weekly_digest(&state, parasha_id, None).await
}

async fn send_weekly_digest(
    state: &AppState,
    parasha_id: DbId,
    message: Option<String>,
) -> AppResult<Json<serde_json::Value>> {
    let parasha = parasha::find(parasha_id)
        .ok_or_else(|| not_found("Parasha", parasha_id.to_string()))?;

    let categories = CategoryRepo::list_all(&state.pool).await?;
    let today = Utc::now().date_naive();
    let active = PrayerRequestRepo::list_active(&state.pool, today).await?;

    let digest_categories: Vec<DigestCategory> = categories
        .iter()
        .map(|c| DigestCategory {
            id: c.id,
            name_english: c.name_english.clone(),
            name_hebrew: c.name_hebrew.clone(),
            display_order: c.display_order,
        })
        .collect();

    let names: Vec<DigestName> = active
        .iter()
        .map(|r| DigestName {
            category_id: r.category_id,
            name_english: r.name_english.clone(),
            name_hebrew: r.name_hebrew.clone(),
            spouse: r
                .name_english_spouse
                .clone()
                .zip(r.name_hebrew_spouse.clone()),
        })
        .collect();

    let payload = digest::assemble_weekly(parasha, &digest_categories, names, message);
    let subject = weekly::digest_subject(&payload);
    let body = weekly::render_digest(&payload);

    let recipients = SubmitterRepo::list_active_emails(&state.pool).await?;
    let (sent, failed) = broadcast(state, &recipients, &subject, &body).await?;

    tracing::info!(
        parasha = %payload.parasha_name,
        sent,
        failed,
        "Weekly digest sent"
    );

    Ok(Json(serde_json::json!({
        "data": { "parasha": payload.parasha_name, "sent": sent, "failed": failed }
    })))
}

/// POST /api/v1/admin/urgent/{request_id}
///
/// Broadcast a one-off urgent notice for a specific request to all active
/// submitters.
pub async fn send_urgent(
    State(state): State<AppState>,
    Path(request_id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let request = PrayerRequestRepo::find_by_id(&state.pool, request_id)
        .await?
        .ok_or_else(|| not_found("Request", request_id.to_string()))?;
    let category = CategoryRepo::find_by_id(&state.pool, request.category_id)
        .await?
        .ok_or_else(|| not_found("Category", request.category_id.to_string()))?;

    let notice = notices::urgent_notice(
        &request.name_english,
        &request.name_hebrew,
        &category.name_english,
    );

    let recipients = SubmitterRepo::list_active_emails(&state.pool).await?;
    let (sent, failed) = broadcast(&state, &recipients, &notice.subject, &notice.body).await?;

    tracing::info!(request_id, sent, failed, "Urgent notice sent");

    Ok(Json(serde_json::json!({
        "data": { "sent": sent, "failed": failed }
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn not_found(entity: &'static str, key: String) -> CoreError {
    CoreError::NotFound { entity, key }
}

fn validate_contact_fields(
    name: Option<&str>,
    whatsapp: Option<&str>,
    phone: Option<&str>,
) -> Result<(), CoreError> {
    if let Some(name) = name {
        validation::validate_person_name(name)?;
    }
    if let Some(whatsapp) = whatsapp {
        validation::validate_phone(whatsapp)?;
    }
    if let Some(phone) = phone {
        validation::validate_phone(phone)?;
    }
    Ok(())
}

/// Send one message to every recipient, counting failures instead of
/// aborting mid-broadcast. Fails outright only when SMTP is unconfigured.
async fn broadcast(
    state: &AppState,
    recipients: &[String],
    subject: &str,
    body: &str,
) -> Result<(usize, usize), AppError> {
    let mailer = state
        .mailer
        .as_ref()
        .ok_or(AppError::Email(EmailError::NotConfigured))?;

    let mut sent = 0;
    let mut failed = 0;
    for recipient in recipients {
        match mailer.send(recipient, subject, body).await {
            Ok(()) => sent += 1,
            Err(err) => {
                tracing::warn!(to = %recipient, error = %err, "Broadcast delivery failed");
                failed += 1;
            }
        }
    }
    Ok((sent, failed))
}
