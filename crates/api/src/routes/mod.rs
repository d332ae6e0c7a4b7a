//! Route definitions.
//!
//! Each submodule provides a `router()` mounted under `/api/v1`. The
//! unversioned `/health` probe lives in the router module itself.

pub mod admin;
pub mod categories;
pub mod requests;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /requests/mine/{email}            GET     list my requests
/// /requests/submit/{email}          POST    create
/// /requests/submit/{email}          PUT     update
/// /requests/{id}/extend             POST    extend expiry
/// /requests/{id}                    DELETE  delete (returns remaining list)
///
/// /categories                       GET     list categories
/// /categories/{id}                  GET     category detail
///
/// /admin/requests                   GET     list all requests
/// /admin/requests/{id}              DELETE  delete any request
/// /admin/settings                   GET PUT notification settings
/// /admin/submitters                 GET POST
/// /admin/submitters/{id}            PUT DELETE
/// /admin/submitters/activate/{email}    POST
/// /admin/submitters/deactivate/{email}  POST
/// /admin/weekly/{parasha_id}        POST    send digest with message
/// /admin/weekly/{parasha_id}        GET     link-triggered resend
/// /admin/urgent/{request_id}        POST    urgent broadcast
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/requests", requests::router())
        .nest("/categories", categories::router())
        .nest("/admin", admin::router())
}
