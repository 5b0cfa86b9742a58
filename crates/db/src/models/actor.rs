//! Actor entity model and DTOs.

use cinedex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// An actor row from the `actors` table.
///
/// Actors and directors share the same person-field shape but are
/// independent entities with independent tables; there is no shared
/// person base type.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Actor {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new actor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateActor {
    #[validate(length(min = 1, max = 100, message = "first_name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last_name must be 1-100 characters"))]
    pub last_name: String,
    pub date_of_birth: Timestamp,
}

/// DTO for updating an actor. Full replace.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateActor {
    #[validate(length(min = 1, max = 100, message = "first_name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last_name must be 1-100 characters"))]
    pub last_name: String,
    pub date_of_birth: Timestamp,
}
