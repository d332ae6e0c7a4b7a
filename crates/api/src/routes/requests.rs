//! Routes for the submitter-facing request lifecycle, mounted at `/requests`.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::requests;
use crate::state::AppState;

/// ```text
/// GET    /mine/{email}     -> list_my_requests
/// POST   /submit/{email}   -> create_request
/// PUT    /submit/{email}   -> update_request
/// POST   /{id}/extend      -> extend_request
/// DELETE /{id}             -> delete_request
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/mine/{email}", get(requests::list_my_requests))
        .route(
            "/submit/{email}",
            post(requests::create_request).put(requests::update_request),
        )
        .route("/{id}/extend", post(requests::extend_request))
        .route("/{id}", delete(requests::delete_request))
}
