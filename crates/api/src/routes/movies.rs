//! Route definitions for the `/movies` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /               -> list (paged, filtered, sorted)
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update (scalars + category set)
/// DELETE /{id}           -> delete
/// PUT    /{id}/actors    -> set_actors (replace actor set)
/// PUT    /{id}/director  -> set_director (assign or clear)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list).post(movies::create))
        .route(
            "/{id}",
            get(movies::get_by_id)
                .put(movies::update)
                .delete(movies::delete),
        )
        .route("/{id}/actors", put(movies::set_actors))
        .route("/{id}/director", put(movies::set_director))
}
