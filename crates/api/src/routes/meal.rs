//! Route definitions for the `/meals` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::meal;
use crate::state::AppState;

/// Routes mounted at `/meals`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /metrics   -> metrics
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(meal::list).post(meal::create))
        .route("/metrics", get(meal::metrics))
        .route(
            "/{id}",
            get(meal::get_by_id)
                .put(meal::update)
                .delete(meal::delete),
        )
}
