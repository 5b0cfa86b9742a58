//! Route definitions for the `/directors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::directors;
use crate::state::AppState;

/// Routes mounted at `/directors`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// GET    /{id}/movies  -> movies (paged, filtered, sorted)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(directors::list).post(directors::create))
        .route(
            "/{id}",
            get(directors::get_by_id)
                .put(directors::update)
                .delete(directors::delete),
        )
        .route("/{id}/movies", get(directors::movies))
}
