//! Handlers for the `/meals` resource.
//!
//! Every handler takes the caller's session from [`SessionGuard`] and
//! passes it to the repository; no query runs unscoped.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use dailydiet_core::error::CoreError;
use dailydiet_core::meal::MealBody;
use dailydiet_core::metrics::MealMetrics;
use dailydiet_core::timestamp;
use dailydiet_core::types::{DbId, SessionId};
use dailydiet_db::models::meal::{CreateMeal, Meal, UpdateMeal};
use dailydiet_db::repositories::MealRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::session::SessionGuard;
use crate::state::AppState;

/// `{ "meals": [...] }`
#[derive(Debug, Serialize)]
pub struct MealListResponse {
    pub meals: Vec<Meal>,
}

/// `{ "meal": {...} }`
#[derive(Debug, Serialize)]
pub struct MealResponse {
    pub meal: Meal,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Meal", id })
}

/// Parse and validate a meal body.
fn meal_body(payload: Result<Json<MealBody>, JsonRejection>) -> AppResult<MealBody> {
    let Json(body) = payload?;
    body.check()?;
    Ok(body)
}

/// Look up a meal owned by `session_id` or fail with 404.
async fn find_owned(state: &AppState, id: DbId, session_id: &SessionId) -> AppResult<Meal> {
    MealRepo::find_by_id(&state.pool, id, session_id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// POST /meals
pub async fn create(
    SessionGuard(session_id): SessionGuard,
    State(state): State<AppState>,
    payload: Result<Json<MealBody>, JsonRejection>,
) -> AppResult<StatusCode> {
    let body = meal_body(payload)?;
    let input = CreateMeal::from_body(session_id.clone(), body);
    let meal = MealRepo::create(&state.pool, &input).await?;
    tracing::info!(meal_id = %meal.id, %session_id, is_diet = meal.is_diet, "Meal created");
    Ok(StatusCode::CREATED)
}

/// GET /meals
pub async fn list(
    SessionGuard(session_id): SessionGuard,
    State(state): State<AppState>,
) -> AppResult<Json<MealListResponse>> {
    let meals = MealRepo::list_by_session(&state.pool, &session_id).await?;
    Ok(Json(MealListResponse { meals }))
}

/// GET /meals/{id}
pub async fn get_by_id(
    SessionGuard(session_id): SessionGuard,
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<MealResponse>> {
    let Path(id) = id?;
    let meal = find_owned(&state, id, &session_id).await?;
    Ok(Json(MealResponse { meal }))
}

/// PUT /meals/{id}
///
/// The id is checked for format and ownership before the body is looked at,
/// so an unknown meal is a 404 even when the body is also invalid.
pub async fn update(
    SessionGuard(session_id): SessionGuard,
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<MealBody>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    find_owned(&state, id, &session_id).await?;

    let body = meal_body(payload)?;
    let input = UpdateMeal::from_body(body, timestamp::now_seconds());

    // The meal may have been deleted since the lookup above.
    if !MealRepo::update(&state.pool, id, &session_id, &input).await? {
        return Err(not_found(id));
    }
    tracing::info!(meal_id = %id, %session_id, "Meal updated");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /meals/{id}
pub async fn delete(
    SessionGuard(session_id): SessionGuard,
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    if MealRepo::delete(&state.pool, id, &session_id).await? {
        tracing::info!(meal_id = %id, %session_id, "Meal deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// GET /meals/metrics
pub async fn metrics(
    SessionGuard(session_id): SessionGuard,
    State(state): State<AppState>,
) -> AppResult<Json<MealMetrics>> {
    let flags = MealRepo::list_diet_flags(&state.pool, &session_id).await?;
    Ok(Json(MealMetrics::from_diet_flags(flags)))
}
