//! Meal request contract and field validation.
//!
//! The same body shape is accepted by create and update. Deserialization
//! enforces presence and types (a string `"true"` is not a boolean);
//! [`MealBody::check`] enforces the content rules afterwards.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::validation::reject_nul;

/// Request body for `POST /meals` and `PUT /meals/{id}`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MealBody {
    #[validate(
        length(min = 1, message = "name must not be empty"),
        custom(function = "reject_nul")
    )]
    pub name: String,
    #[validate(
        length(min = 1, message = "description must not be empty"),
        custom(function = "reject_nul")
    )]
    pub description: String,
    #[serde(rename = "isOnDiet")]
    pub is_on_diet: bool,
}

impl MealBody {
    /// Run the content rules, mapping failures to [`CoreError::Validation`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(CoreError::from)
    }
}
