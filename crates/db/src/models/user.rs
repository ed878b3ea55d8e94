//! User entity model and DTOs.

use dailydiet_core::types::{DbId, SessionId, Timestamp};
use sqlx::FromRow;

/// A user row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub session_id: String,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new user bound to a session.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub session_id: SessionId,
    pub name: String,
    pub email: String,
}
