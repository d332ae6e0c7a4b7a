use std::sync::Arc;

use davenlist_email::Mailer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: davenlist_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// SMTP mailer; `None` when `SMTP_HOST` is unset. Handlers degrade
    /// gracefully: admin notices become warnings, digest sends fail with 503.
    pub mailer: Option<Arc<Mailer>>,
}
