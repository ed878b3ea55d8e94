//! Repository for the `meals` table.
//!
//! Every query filters by the owning session so one session can never
//! observe or mutate another session's meals.

use dailydiet_core::types::{new_id, DbId, SessionId};
use sqlx::PgPool;

use crate::models::meal::{CreateMeal, Meal, UpdateMeal};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, session_id, name, description, is_diet, created_at, updated_at";

/// Newest first; the id tie-break keeps meals created in the same
/// microsecond in insertion order, since ids are time-ordered.
const ORDER_NEWEST_FIRST: &str = "ORDER BY created_at DESC, id DESC";

/// Provides session-scoped CRUD operations for meals.
pub struct MealRepo;

impl MealRepo {
    /// Insert a new meal, returning the created row.
    ///
    /// The id is generated here; `created_at` is defaulted by the database.
    pub async fn create(pool: &PgPool, input: &CreateMeal) -> Result<Meal, sqlx::Error> {
        let query = format!(
            "INSERT INTO meals (id, session_id, name, description, is_diet)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Meal>(&query)
            .bind(new_id())
            .bind(input.session_id.as_str())
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.is_diet)
            .fetch_one(pool)
            .await
    }

    /// List the session's meals, most recently created first.
    pub async fn list_by_session(
        pool: &PgPool,
        session_id: &SessionId,
    ) -> Result<Vec<Meal>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM meals WHERE session_id = $1 {ORDER_NEWEST_FIRST}");
        sqlx::query_as::<_, Meal>(&query)
            .bind(session_id.as_str())
            .fetch_all(pool)
            .await
    }

    /// Find a meal by id, only if it belongs to `session_id`.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        session_id: &SessionId,
    ) -> Result<Option<Meal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meals WHERE id = $1 AND session_id = $2");
        sqlx::query_as::<_, Meal>(&query)
            .bind(id)
            .bind(session_id.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Replace name, description and diet flag, stamping `updated_at`.
    ///
    /// Returns `false` if no meal with `id` is owned by `session_id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        session_id: &SessionId,
        input: &UpdateMeal,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE meals SET
                name = $3,
                description = $4,
                is_diet = $5,
                updated_at = $6
             WHERE id = $1 AND session_id = $2",
        )
        .bind(id)
        .bind(session_id.as_str())
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.is_diet)
        .bind(input.updated_at)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a meal owned by `session_id`. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        id: DbId,
        session_id: &SessionId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM meals WHERE id = $1 AND session_id = $2")
            .bind(id)
            .bind(session_id.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Diet flags of the session's meals in listing order (newest first).
    pub async fn list_diet_flags(
        pool: &PgPool,
        session_id: &SessionId,
    ) -> Result<Vec<bool>, sqlx::Error> {
        let query =
            format!("SELECT is_diet FROM meals WHERE session_id = $1 {ORDER_NEWEST_FIRST}");
        sqlx::query_scalar::<_, bool>(&query)
            .bind(session_id.as_str())
            .fetch_all(pool)
            .await
    }
}
