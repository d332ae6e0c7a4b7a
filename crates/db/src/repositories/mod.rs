//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_settings_repo;
pub mod category_repo;
pub mod prayer_request_repo;
pub mod submitter_repo;

pub use admin_settings_repo::AdminSettingsRepo;
pub use category_repo::CategoryRepo;
pub use prayer_request_repo::PrayerRequestRepo;
pub use submitter_repo::SubmitterRepo;
