//! Repository for the `directors` table.

use cinedex_core::types::DbId;
use sqlx::PgPool;

use crate::models::director::{CreateDirector, Director, DirectorSummary, UpdateDirector};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, date_of_birth, created_at, updated_at";

/// Provides CRUD operations for directors.
pub struct DirectorRepo;

impl DirectorRepo {
    /// Insert a new director, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateDirector) -> Result<Director, sqlx::Error> {
        let query = format!(
            "INSERT INTO directors (first_name, last_name, date_of_birth)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.date_of_birth)
            .fetch_one(pool)
            .await
    }

    /// Find a director by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors WHERE id = $1");
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the summary projection for a director.
    pub async fn find_summary(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DirectorSummary>, sqlx::Error> {
        sqlx::query_as::<_, DirectorSummary>(
            "SELECT id, first_name, last_name FROM directors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List all directors, ordered by last name then first name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Director>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM directors ORDER BY last_name, first_name");
        sqlx::query_as::<_, Director>(&query).fetch_all(pool).await
    }

    /// Update a director's person fields, bumping `updated_at`. Full replace.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateDirector,
    ) -> Result<Option<Director>, sqlx::Error> {
        let query = format!(
            "UPDATE directors SET
                first_name = $2,
                last_name = $3,
                date_of_birth = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Director>(&query)
            .bind(id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(input.date_of_birth)
            .fetch_optional(pool)
            .await
    }

    /// Delete a director by ID. Returns `true` if a row was removed.
    ///
    /// Movies referencing the director get their reference set to NULL;
    /// no movie is ever deleted through a director.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM directors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
