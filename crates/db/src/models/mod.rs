//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for the create and update payloads

pub mod admin_settings;
pub mod category;
pub mod prayer_request;
pub mod submitter;
