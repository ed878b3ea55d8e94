//! Meal entity model and DTOs.

use dailydiet_core::meal::MealBody;
use dailydiet_core::types::{DbId, SessionId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A meal row from the `meals` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Meal {
    pub id: DbId,
    pub session_id: String,
    pub name: String,
    pub description: String,
    pub is_diet: bool,
    #[serde(serialize_with = "dailydiet_core::timestamp::serialize")]
    pub created_at: Timestamp,
    /// `None` until the first update.
    #[serde(serialize_with = "dailydiet_core::timestamp::serialize_option")]
    pub updated_at: Option<Timestamp>,
}

/// DTO for inserting a meal owned by `session_id`.
#[derive(Debug, Clone)]
pub struct CreateMeal {
    pub session_id: SessionId,
    pub name: String,
    pub description: String,
    pub is_diet: bool,
}

impl CreateMeal {
    pub fn from_body(session_id: SessionId, body: MealBody) -> Self {
        Self {
            session_id,
            name: body.name,
            description: body.description,
            is_diet: body.is_on_diet,
        }
    }
}

/// DTO for replacing the mutable fields of a meal.
#[derive(Debug, Clone)]
pub struct UpdateMeal {
    pub name: String,
    pub description: String,
    pub is_diet: bool,
    pub updated_at: Timestamp,
}

impl UpdateMeal {
    pub fn from_body(body: MealBody, updated_at: Timestamp) -> Self {
        Self {
            name: body.name,
            description: body.description,
            is_diet: body.is_on_diet,
            updated_at,
        }
    }
}
