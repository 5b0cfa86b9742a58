//! Shared query parameter types for API handlers.
//!
//! The paged movie listing parameters appear on several routes (the main
//! movie listing plus the by-actor and by-director listings), so the
//! extraction struct lives here.

use cinedex_core::catalog::{MovieSortKey, PageQuery};
use cinedex_db::models::movie::MovieQuery;
use serde::Deserialize;

/// Raw listing parameters
/// (`?page_number=&page_size=&sort_by=&search=`).
///
/// Values are attacker-controllable and normalized in
/// [`CatalogPageParams::into_movie_query`]: the window is clamped and the
/// sort key is resolved against the core whitelist.
#[derive(Debug, Deserialize)]
pub struct CatalogPageParams {
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_by: Option<String>,
    pub search: Option<String>,
}

impl CatalogPageParams {
    /// Normalize into the repository query shape.
    ///
    /// A blank search token applies no filter.
    pub fn into_movie_query(self) -> MovieQuery {
        MovieQuery {
            search: self.search.filter(|s| !s.trim().is_empty()),
            sort: MovieSortKey::parse(self.sort_by.as_deref()),
            page: PageQuery::clamped(self.page_number, self.page_size),
        }
    }
}
