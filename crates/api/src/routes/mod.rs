pub mod health;
pub mod meal;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /users                 create (issues the session cookie)
///
/// /meals                 list, create          (session cookie)
/// /meals/metrics         aggregate metrics     (session cookie)
/// /meals/{id}            get, update, delete   (session cookie)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/meals", meal::router())
}
