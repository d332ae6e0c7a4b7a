//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers orchestrate the pure lifecycle policy from `davenlist_core`
//! around the repositories in `davenlist_db`, and map errors via
//! [`AppError`](crate::error::AppError).

pub mod admin;
pub mod categories;
pub mod requests;
