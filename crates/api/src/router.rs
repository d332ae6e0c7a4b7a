//! Application router.
//!
//! The route tree plus the middleware the whole service runs under. The
//! builder is shared by `main.rs` and the integration tests so both exercise
//! the same stack.

use std::time::Duration;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Assemble the application router.
///
/// `/health` sits outside the versioned tree so probes need not know the API
/// version. Layers apply bottom-up: every request gets an `x-request-id`, is
/// traced, and is cut off at the configured timeout; a panicking handler
/// answers 500 rather than dropping the connection.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static("x-request-id");

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors_layer(config))
        .with_state(state)
}

/// GET /health
///
/// Answers 200 while the process is up. `database` reports whether the pool
/// can reach PostgreSQL and `mailer` whether SMTP delivery is configured;
/// `status` turns `degraded` when the database is unreachable so a probe can
/// tell an impaired service from a dead one.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let database = davenlist_db::health_check(&state.pool).await.is_ok();

    Json(serde_json::json!({
        "status": if database { "ok" } else { "degraded" },
        "version": env!("CARGO_PKG_VERSION"),
        "database": database,
        "mailer": state.mailer.is_some(),
    }))
}

/// CORS for the public submission frontend.
///
/// The API speaks plain JSON without cookies or auth headers, so only
/// `Content-Type` needs allowing, and only the methods the route tree
/// serves. A malformed `CORS_ORIGINS` entry aborts startup.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|origin| {
            origin
                .parse()
                .unwrap_or_else(|err| panic!("Invalid CORS origin '{origin}': {err}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600))
}
