//! Handlers for the `/movies` resource.
//!
//! Movie mutations resolve their referenced association ids up front:
//! requested sets are de-duplicated and must resolve in full before any
//! write runs, so an invalid id fails the request and persists nothing.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::catalog::{distinct_ids, require_all_resolved, Page};
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::category::Category;
use cinedex_db::models::director::DirectorSummary;
use cinedex_db::models::movie::{
    CreateMovie, MovieDetails, MovieSummary, SetMovieActors, SetMovieDirector, UpdateMovie,
};
use cinedex_db::repositories::{ActorRepo, CategoryRepo, DirectorRepo, MovieRepo};
use cinedex_db::DbPool;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::CatalogPageParams;
use crate::state::AppState;

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<MovieDetails>)> {
    input.validate()?;

    let (category_ids, categories) = resolve_categories(&state.pool, &input.category_ids).await?;
    let actor_ids = resolve_actors(&state.pool, &input.actor_ids).await?;
    let director = resolve_director(&state.pool, input.director_id).await?;

    let movie = MovieRepo::create(&state.pool, &input, &category_ids, &actor_ids).await?;
    let details = MovieDetails::from_parts(movie, categories, director);
    Ok((StatusCode::CREATED, Json(details)))
}

/// GET /api/v1/movies
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CatalogPageParams>,
) -> AppResult<Json<Page<MovieSummary>>> {
    let query = params.into_movie_query();
    let page = MovieRepo::page(&state.pool, &query).await?;
    Ok(Json(page))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MovieDetails>> {
    let details = MovieRepo::find_details(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;
    Ok(Json(details))
}

/// PUT /api/v1/movies/{id}
///
/// Full replace of the movie's scalar fields and category set. Actor and
/// director changes go through the sub-resource routes below.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMovie>,
) -> AppResult<Json<MovieDetails>> {
    input.validate()?;

    let (category_ids, categories) = resolve_categories(&state.pool, &input.category_ids).await?;

    let movie = MovieRepo::update(&state.pool, id, &input, &category_ids)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;

    let director = match movie.director_id {
        Some(director_id) => DirectorRepo::find_summary(&state.pool, director_id).await?,
        None => None,
    };
    Ok(Json(MovieDetails::from_parts(movie, categories, director)))
}

/// PUT /api/v1/movies/{id}/actors
///
/// Replaces the movie's actor set.
pub async fn set_actors(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetMovieActors>,
) -> AppResult<StatusCode> {
    let actor_ids = resolve_actors(&state.pool, &input.actor_ids).await?;

    let updated = MovieRepo::set_actors(&state.pool, id, &actor_ids).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Movie", id }))
    }
}

/// PUT /api/v1/movies/{id}/director
///
/// Assigns or clears the movie's director; `{"director_id": null}` clears.
pub async fn set_director(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetMovieDirector>,
) -> AppResult<StatusCode> {
    resolve_director(&state.pool, input.director_id).await?;

    let updated = MovieRepo::set_director(&state.pool, id, input.director_id).await?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Movie", id }))
    }
}

/// DELETE /api/v1/movies/{id}
///
/// Idempotent: an absent id is treated as already deleted.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    MovieRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Association resolution
// ---------------------------------------------------------------------------

/// De-duplicate and resolve requested category ids as a full set.
async fn resolve_categories(
    pool: &DbPool,
    requested: &[DbId],
) -> Result<(Vec<DbId>, Vec<Category>), AppError> {
    let distinct = distinct_ids(requested);
    let categories = CategoryRepo::find_by_ids(pool, &distinct).await?;
    require_all_resolved("category", &distinct, categories.len())?;
    Ok((distinct, categories))
}

/// De-duplicate and resolve requested actor ids as a full set.
async fn resolve_actors(pool: &DbPool, requested: &[DbId]) -> Result<Vec<DbId>, AppError> {
    let distinct = distinct_ids(requested);
    let actors = ActorRepo::find_by_ids(pool, &distinct).await?;
    require_all_resolved("actor", &distinct, actors.len())?;
    Ok(distinct)
}

/// Resolve an optional director reference to its summary projection.
async fn resolve_director(
    pool: &DbPool,
    director_id: Option<DbId>,
) -> Result<Option<DirectorSummary>, AppError> {
    match director_id {
        Some(id) => {
            let summary = DirectorRepo::find_summary(pool, id).await?.ok_or_else(|| {
                AppError::Core(CoreError::InvalidReference(format!(
                    "director id {id} is invalid"
                )))
            })?;
            Ok(Some(summary))
        }
        None => Ok(None),
    }
}
