//! Route definitions.
//!
//! Every resource router is nested under `/api/v1`; the health check is
//! mounted at the root.

pub mod actors;
pub mod categories;
pub mod directors;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// All `/api/v1` routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/categories", categories::router())
        .nest("/actors", actors::router())
        .nest("/directors", directors::router())
}
