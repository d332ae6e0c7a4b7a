//! Repository for the `categories` table.
//!
//! Read-only: categories are seeded by migration and edited out-of-band.

use davenlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;

/// Column list for `categories` queries.
const CATEGORY_COLUMNS: &str = "\
    id, name_english, name_hebrew, update_rate_days, display_order, \
    requires_second_name";

/// Provides read access to the category registry.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories in display order.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY display_order");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
