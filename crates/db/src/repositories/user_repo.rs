//! Repository for the `users` table.

use dailydiet_core::types::{new_id, SessionId};
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

const COLUMNS: &str = "id, session_id, name, email, created_at";

/// Provides user operations.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Fails with a unique violation on `uq_users_email` or
    /// `uq_users_session_id` when either is already taken.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (id, session_id, name, email)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(new_id())
            .bind(input.session_id.as_str())
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find the user bound to a session.
    pub async fn find_by_session(
        pool: &PgPool,
        session_id: &SessionId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE session_id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(session_id.as_str())
            .fetch_optional(pool)
            .await
    }
}
