//! Director entity model and DTOs.

use cinedex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A director row from the `directors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Director {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Lightweight director projection embedded in movie detail responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DirectorSummary {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
}

/// DTO for creating a new director.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateDirector {
    #[validate(length(min = 1, max = 100, message = "first_name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last_name must be 1-100 characters"))]
    pub last_name: String,
    pub date_of_birth: Timestamp,
}

/// DTO for updating a director. Full replace.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateDirector {
    #[validate(length(min = 1, max = 100, message = "first_name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last_name must be 1-100 characters"))]
    pub last_name: String,
    pub date_of_birth: Timestamp,
}
