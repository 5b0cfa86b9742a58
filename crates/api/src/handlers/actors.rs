//! Handlers for the `/actors` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinedex_core::catalog::Page;
use cinedex_core::error::CoreError;
use cinedex_core::types::DbId;
use cinedex_db::models::actor::{Actor, CreateActor, UpdateActor};
use cinedex_db::models::movie::MovieSummary;
use cinedex_db::repositories::{ActorRepo, MovieRepo};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::CatalogPageParams;
use crate::state::AppState;

/// POST /api/v1/actors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateActor>,
) -> AppResult<(StatusCode, Json<Actor>)> {
    input.validate()?;
    let actor = ActorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(actor)))
}

/// GET /api/v1/actors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Actor>>> {
    let actors = ActorRepo::list(&state.pool).await?;
    Ok(Json(actors))
}

/// GET /api/v1/actors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Actor>> {
    let actor = ActorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Actor", id }))?;
    Ok(Json(actor))
}

/// GET /api/v1/actors/{id}/movies
///
/// Paged listing of the movies the actor appears in; an unknown actor id
/// yields an empty page rather than an error.
pub async fn movies(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<CatalogPageParams>,
) -> AppResult<Json<Page<MovieSummary>>> {
    let query = params.into_movie_query();
    let page = MovieRepo::page_by_actor(&state.pool, id, &query).await?;
    Ok(Json(page))
}

/// PUT /api/v1/actors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateActor>,
) -> AppResult<Json<Actor>> {
    input.validate()?;
    let actor = ActorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Actor", id }))?;
    Ok(Json(actor))
}

/// DELETE /api/v1/actors/{id}
///
/// Idempotent: an absent id is treated as already deleted. Join rows
/// cascade; movies the actor appeared in are untouched.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ActorRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
