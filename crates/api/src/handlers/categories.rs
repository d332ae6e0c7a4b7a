//! Handlers for the read-only `/categories` resource.

use axum::extract::{Path, State};
use axum::Json;
use davenlist_core::error::CoreError;
use davenlist_core::types::DbId;
use davenlist_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/categories
///
/// List all categories in display order.
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    Ok(Json(serde_json::json!({ "data": categories })))
}

/// GET /api/v1/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Category",
            key: id.to_string(),
        })?;
    Ok(Json(serde_json::json!({ "data": category })))
}
