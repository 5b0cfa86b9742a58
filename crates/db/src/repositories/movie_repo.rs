//! Repository for the `movies` table and its association tables.
//!
//! Mutations that touch a movie and its junction rows run inside one
//! transaction: the owning write and the junction replacement commit
//! atomically or not at all.
//!
//! Listing queries follow a fixed pipeline: build the predicate, count the
//! filtered set (`total_records`), then fetch the sorted window and project
//! it to [`MovieSummary`]. Counting before filtering or paging before
//! sorting changes the envelope semantics and is a bug, not a style choice.

use cinedex_core::catalog::Page;
use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::Category;
use crate::models::director::DirectorSummary;
use crate::models::movie::{CreateMovie, Movie, MovieDetails, MovieQuery, MovieSummary, UpdateMovie};

/// Column list for `movies` queries.
const COLUMNS: &str = "id, title, release_date, rating, director_id, created_at, updated_at";

/// Column list for the listing projection (alias `m` for join queries).
const SUMMARY_COLUMNS: &str = "m.id, m.title, m.release_date, m.rating";

/// Provides CRUD operations for movies plus the paged listing pipeline.
pub struct MovieRepo;

impl MovieRepo {
    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Insert a new movie and its association rows in one transaction.
    ///
    /// `category_ids` and `actor_ids` must already be de-duplicated and
    /// resolved by the caller; the junction primary keys are only a
    /// backstop.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMovie,
        category_ids: &[DbId],
        actor_ids: &[DbId],
    ) -> Result<Movie, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO movies (title, release_date, rating, director_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&insert_query)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(input.rating)
            .bind(input.director_id)
            .fetch_one(&mut *tx)
            .await?;

        Self::set_categories_inner(&mut tx, movie.id, category_ids).await?;
        Self::set_actors_inner(&mut tx, movie.id, actor_ids).await?;

        tx.commit().await?;
        Ok(movie)
    }

    /// Find a movie by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a movie by ID, enriched with its categories and director.
    pub async fn find_details(pool: &PgPool, id: DbId) -> Result<Option<MovieDetails>, sqlx::Error> {
        let movie = match Self::find_by_id(pool, id).await? {
            Some(movie) => movie,
            None => return Ok(None),
        };

        let categories = Self::categories_for_movie(pool, movie.id).await?;
        let director = match movie.director_id {
            Some(director_id) => {
                sqlx::query_as::<_, DirectorSummary>(
                    "SELECT id, first_name, last_name FROM directors WHERE id = $1",
                )
                .bind(director_id)
                .fetch_optional(pool)
                .await?
            }
            None => None,
        };

        Ok(Some(MovieDetails::from_parts(movie, categories, director)))
    }

    /// Load the categories associated with a movie, ordered by name.
    pub async fn categories_for_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT c.id, c.name, c.created_at, c.updated_at
             FROM categories c
             JOIN movie_categories mc ON mc.category_id = c.id
             WHERE mc.movie_id = $1
             ORDER BY c.name",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Replace a movie's scalar fields and category set in one transaction.
    /// Full replace; `updated_at` is bumped.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMovie,
        category_ids: &[DbId],
    ) -> Result<Option<Movie>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE movies SET
                title = $2,
                release_date = $3,
                rating = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&update_query)
            .bind(id)
            .bind(&input.title)
            .bind(input.release_date)
            .bind(input.rating)
            .fetch_optional(&mut *tx)
            .await?;

        if let Some(ref movie) = movie {
            Self::set_categories_inner(&mut tx, movie.id, category_ids).await?;
        }

        tx.commit().await?;
        Ok(movie)
    }

    /// Replace a movie's actor set, bumping `updated_at`.
    ///
    /// Returns `false` if no movie with the given `id` exists.
    pub async fn set_actors(
        pool: &PgPool,
        movie_id: DbId,
        actor_ids: &[DbId],
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let touched = sqlx::query("UPDATE movies SET updated_at = NOW() WHERE id = $1")
            .bind(movie_id)
            .execute(&mut *tx)
            .await?;
        if touched.rows_affected() == 0 {
            return Ok(false);
        }

        Self::set_actors_inner(&mut tx, movie_id, actor_ids).await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Assign or clear a movie's director, bumping `updated_at`.
    ///
    /// Returns `false` if no movie with the given `id` exists.
    pub async fn set_director(
        pool: &PgPool,
        movie_id: DbId,
        director_id: Option<DbId>,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE movies SET director_id = $2, updated_at = NOW() WHERE id = $1")
                .bind(movie_id)
                .bind(director_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    ///
    /// Category and actor junction rows cascade; categories, actors, and
    /// directors themselves are untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Paged listings
    // -----------------------------------------------------------------------

    /// Page over all movies: filter, count, sort, window, project.
    pub async fn page(
        pool: &PgPool,
        query: &MovieQuery,
    ) -> Result<Page<MovieSummary>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx = 1u32;

        if query.search.is_some() {
            conditions.push(format!("m.title ILIKE ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        // 1. Count the filtered set before any paging.
        let count_query = format!("SELECT COUNT(*) FROM movies m {where_clause}");
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(ref search) = query.search {
            count = count.bind(format!("%{search}%"));
        }
        let total_records = count.fetch_one(pool).await?;

        // 2. Fetch the sorted window. `id` is an explicit secondary key so
        //    page boundaries are stable under ties.
        let rows_query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM movies m {where_clause}
             ORDER BY m.{sort_column} ASC, m.id ASC
             LIMIT ${limit_idx} OFFSET ${offset_idx}",
            sort_column = query.sort.column(),
            limit_idx = bind_idx,
            offset_idx = bind_idx + 1,
        );
        let mut rows = sqlx::query_as::<_, MovieSummary>(&rows_query);
        if let Some(ref search) = query.search {
            rows = rows.bind(format!("%{search}%"));
        }
        let data = rows
            .bind(query.page.limit())
            .bind(query.page.offset())
            .fetch_all(pool)
            .await?;

        Ok(Page::new(data, query.page, total_records))
    }

    /// Page over the movies an actor appears in.
    pub async fn page_by_actor(
        pool: &PgPool,
        actor_id: DbId,
        query: &MovieQuery,
    ) -> Result<Page<MovieSummary>, sqlx::Error> {
        Self::page_scoped(
            pool,
            "movies m JOIN movie_actors ma ON ma.movie_id = m.id",
            "ma.actor_id = $1",
            actor_id,
            query,
        )
        .await
    }

    /// Page over the movies credited to a director.
    pub async fn page_by_director(
        pool: &PgPool,
        director_id: DbId,
        query: &MovieQuery,
    ) -> Result<Page<MovieSummary>, sqlx::Error> {
        Self::page_scoped(pool, "movies m", "m.director_id = $1", director_id, query).await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Shared pipeline for listings scoped by a related entity id.
    ///
    /// `scope_condition` must reference `$1`; the optional search predicate
    /// and the window binds are numbered after it.
    async fn page_scoped(
        pool: &PgPool,
        from_clause: &str,
        scope_condition: &str,
        scope_id: DbId,
        query: &MovieQuery,
    ) -> Result<Page<MovieSummary>, sqlx::Error> {
        let mut conditions = vec![scope_condition.to_string()];
        let mut bind_idx = 2u32;

        if query.search.is_some() {
            conditions.push(format!("m.title ILIKE ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = format!("WHERE {}", conditions.join(" AND "));

        let count_query = format!("SELECT COUNT(*) FROM {from_clause} {where_clause}");
        let mut count = sqlx::query_scalar::<_, i64>(&count_query).bind(scope_id);
        if let Some(ref search) = query.search {
            count = count.bind(format!("%{search}%"));
        }
        let total_records = count.fetch_one(pool).await?;

        let rows_query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM {from_clause} {where_clause}
             ORDER BY m.{sort_column} ASC, m.id ASC
             LIMIT ${limit_idx} OFFSET ${offset_idx}",
            sort_column = query.sort.column(),
            limit_idx = bind_idx,
            offset_idx = bind_idx + 1,
        );
        let mut rows = sqlx::query_as::<_, MovieSummary>(&rows_query).bind(scope_id);
        if let Some(ref search) = query.search {
            rows = rows.bind(format!("%{search}%"));
        }
        let data = rows
            .bind(query.page.limit())
            .bind(query.page.offset())
            .fetch_all(pool)
            .await?;

        Ok(Page::new(data, query.page, total_records))
    }

    /// Replace category associations within an existing transaction.
    async fn set_categories_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        movie_id: DbId,
        category_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM movie_categories WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut **tx)
            .await?;

        for &category_id in category_ids {
            sqlx::query("INSERT INTO movie_categories (movie_id, category_id) VALUES ($1, $2)")
                .bind(movie_id)
                .bind(category_id)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }

    /// Replace actor associations within an existing transaction.
    async fn set_actors_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        movie_id: DbId,
        actor_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM movie_actors WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut **tx)
            .await?;

        for &actor_id in actor_ids {
            sqlx::query("INSERT INTO movie_actors (movie_id, actor_id) VALUES ($1, $2)")
                .bind(movie_id)
                .bind(actor_id)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }
}
