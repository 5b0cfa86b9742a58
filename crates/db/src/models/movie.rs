//! Movie entity model and DTOs.

use cinedex_core::catalog::{MovieSortKey, PageQuery};
use cinedex_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::category::{Category, CategoryRef};
use crate::models::director::DirectorSummary;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub release_date: Timestamp,
    pub rating: f64,
    /// NULL means no director is assigned; a valid state.
    pub director_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Listing projection: the page data shape for every movie listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieSummary {
    pub id: DbId,
    pub title: String,
    pub release_date: Timestamp,
    pub rating: f64,
}

/// Detail projection: a movie enriched with its categories and director.
#[derive(Debug, Clone, Serialize)]
pub struct MovieDetails {
    pub id: DbId,
    pub title: String,
    pub release_date: Timestamp,
    pub rating: f64,
    pub categories: Vec<CategoryRef>,
    pub director: Option<DirectorSummary>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl MovieDetails {
    /// Assemble the detail projection from already-loaded parts.
    pub fn from_parts(
        movie: Movie,
        categories: Vec<Category>,
        director: Option<DirectorSummary>,
    ) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            release_date: movie.release_date,
            rating: movie.rating,
            categories: categories
                .into_iter()
                .map(|c| CategoryRef { id: c.id, name: c.name })
                .collect(),
            director,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}

/// DTO for creating a new movie.
///
/// Referenced ids may contain duplicates; they are de-duplicated and
/// resolved as a full set before the insert runs.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMovie {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    pub release_date: Timestamp,
    #[validate(range(min = 0.0, max = 10.0, message = "rating must be between 0 and 10"))]
    pub rating: f64,
    #[serde(default)]
    pub category_ids: Vec<DbId>,
    #[serde(default)]
    pub actor_ids: Vec<DbId>,
    pub director_id: Option<DbId>,
}

/// DTO for updating a movie's scalar fields and category set. Full replace.
///
/// Actor and director changes go through the dedicated sub-resource
/// operations so relationship and scalar changes can be composed in any
/// order.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateMovie {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    pub release_date: Timestamp,
    #[validate(range(min = 0.0, max = 10.0, message = "rating must be between 0 and 10"))]
    pub rating: f64,
    #[serde(default)]
    pub category_ids: Vec<DbId>,
}

/// DTO for replacing a movie's actor set.
#[derive(Debug, Clone, Deserialize)]
pub struct SetMovieActors {
    pub actor_ids: Vec<DbId>,
}

/// DTO for assigning or clearing a movie's director.
#[derive(Debug, Clone, Deserialize)]
pub struct SetMovieDirector {
    pub director_id: Option<DbId>,
}

/// Normalized listing query: clamped window, whitelisted sort, optional
/// case-insensitive title search.
#[derive(Debug, Clone)]
pub struct MovieQuery {
    pub search: Option<String>,
    pub sort: MovieSortKey,
    pub page: PageQuery,
}
