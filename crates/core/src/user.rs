//! User creation contract.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;
use crate::validation::reject_nul;

/// Request body for `POST /users`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserBody {
    #[validate(
        length(min = 1, message = "name must not be empty"),
        custom(function = "reject_nul")
    )]
    pub name: String,
    #[validate(
        email(message = "email must be a valid address"),
        custom(function = "reject_nul")
    )]
    pub email: String,
}

impl UserBody {
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate().map_err(CoreError::from)
    }
}
