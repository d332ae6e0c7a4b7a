//! Routes for the admin surface, mounted at `/admin`.
//!
//! The administrative actor is authenticated upstream of this service.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// ```text
/// GET    /requests                      -> list_all_requests
/// DELETE /requests/{id}                 -> delete_any_request
/// GET    /settings                      -> get_settings
/// PUT    /settings                      -> update_settings
/// GET    /submitters                    -> list_submitters
/// POST   /submitters                    -> create_submitter
/// PUT    /submitters/{id}               -> update_submitter
/// DELETE /submitters/{id}               -> delete_submitter
/// POST   /submitters/activate/{email}   -> activate_submitter
/// POST   /submitters/deactivate/{email} -> deactivate_submitter
/// POST   /weekly/{parasha_id}           -> send_weekly
/// GET    /weekly/{parasha_id}           -> send_weekly_from_link
/// POST   /urgent/{request_id}           -> send_urgent
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/requests", get(admin::list_all_requests))
        .route("/requests/{id}", axum::routing::delete(admin::delete_any_request))
        .route("/settings", get(admin::get_settings).put(admin::update_settings))
        .route(
            "/submitters",
            get(admin::list_submitters).post(admin::create_submitter),
        )
        .route(
            "/submitters/{id}",
            put(admin::update_submitter).delete(admin::delete_submitter),
        )
        .route("/submitters/activate/{email}", post(admin::activate_submitter))
        .route(
            "/submitters/deactivate/{email}",
            post(admin::deactivate_submitter),
        )
        .route(
            "/weekly/{parasha_id}",
            post(admin::send_weekly).get(admin::send_weekly_from_link),
        )
        .route("/urgent/{request_id}", post(admin::send_urgent))
}
