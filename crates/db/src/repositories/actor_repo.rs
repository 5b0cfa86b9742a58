//! Repository for the `actors` table.

use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::{Actor, CreateActor, UpdateActor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, date_of_birth, created_at, updated_at";

/// Provides CRUD operations for actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Insert a new actor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateActor) -> Result<Actor, sqlx::Error> {
        let query = format!(
            "INSERT INTO actors (first_name, last_name, date_of_birth)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.date_of_birth)
            .fetch_one(pool)
            .await
    }

    /// Find an actor by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors WHERE id = $1");
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find every actor whose id appears in `ids`.
    ///
    /// Returns only the rows that exist; the caller compares the result
    /// count against the requested distinct set to detect dangling ids.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM actors WHERE id = ANY($1) ORDER BY last_name, first_name"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List all actors, ordered by last name then first name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Actor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM actors ORDER BY last_name, first_name");
        sqlx::query_as::<_, Actor>(&query).fetch_all(pool).await
    }

    /// Update an actor's person fields, bumping `updated_at`. Full replace.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActor,
    ) -> Result<Option<Actor>, sqlx::Error> {
        let query = format!(
            "UPDATE actors SET
                first_name = $2,
                last_name = $3,
                date_of_birth = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Actor>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.date_of_birth)
            .fetch_optional(pool)
            .await
    }

    /// Delete an actor by ID. Returns `true` if a row was removed.
    ///
    /// Junction rows cascade; associated movies are untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
