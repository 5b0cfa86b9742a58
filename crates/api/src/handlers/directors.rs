//! Handlers for the `/directors` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::catalog::Page;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::director::{CreateDirector, Director, UpdateDirector};
use cinedex_db::models::movie::MovieSummary;
use cinedex_db::repositories::{DirectorRepo, MovieRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::CatalogPageParams;
use crate::state::AppState;

/// POST /api/v1/directors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDirector>,
) -> AppResult<(StatusCode, Json<Director>)> {
    input.validate()?;
    let director = DirectorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(director)))
}

/// GET /api/v1/directors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Director>>> {
    let directors = DirectorRepo::list(&state.pool).await?;
    Ok(Json(directors))
}

/// GET /api/v1/directors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Director>> {
    let director = DirectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    Ok(Json(director))
}

/// GET /api/v1/directors/{id}/movies
///
/// Paged listing of the movies credited to the director; an unknown
/// director id yields an empty page rather than an error.
pub async fn movies(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<CatalogPageParams>,
) -> AppResult<Json<Page<MovieSummary>>> {
    let query = params.into_movie_query();
    let page = MovieRepo::page_by_director(&state.pool, id, &query).await?;
    Ok(Json(page))
}

/// PUT /api/v1/directors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDirector>,
) -> AppResult<Json<Director>> {
    input.validate()?;
    let director = DirectorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Director",
            id,
        }))?;
    Ok(Json(director))
}

/// DELETE /api/v1/directors/{id}
///
/// Idempotent: an absent id is treated as already deleted. Movies that
/// referenced the director keep existing with no director assigned.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    DirectorRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
