//! Category entity model and DTOs.

use cinedex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A category row from the `categories` table.
///
/// `name` is globally unique (`uq_categories_name`); a duplicate surfaces
/// as a constraint conflict, never as a silent overwrite.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Lightweight category projection embedded in movie detail responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryRef {
    pub id: DbId,
    pub name: String,
}

/// DTO for creating a new category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}

/// DTO for renaming a category. Full replace.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategory {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}
