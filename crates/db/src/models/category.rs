//! Category model.
//!
//! Categories are read-mostly reference data seeded by migration. The
//! `requires_second_name` flag marks paired categories (a couple rather than
//! a single name); the update rate drives expiry computation.

use davenlist_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name_english: String,
    pub name_hebrew: String,
    /// Days until a request in this category expires. Always positive.
    pub update_rate_days: i32,
    pub display_order: i32,
    /// Paired categories require both spouse names on submission.
    pub requires_second_name: bool,
}
