//! Handlers for the `/users` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use dailydiet_core::types::SessionId;
use dailydiet_core::user::UserBody;
use dailydiet_db::models::user::CreateUser;
use dailydiet_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::middleware::session::session_from_jar;
use crate::state::AppState;

/// POST /users
///
/// Creates a user and binds it to a session. A session cookie already held
/// by the client is reused unless another user is bound to it; otherwise a
/// fresh id is issued. The response always (re)sets the cookie.
pub async fn create(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<UserBody>, JsonRejection>,
) -> AppResult<(StatusCode, CookieJar)> {
    let Json(body) = payload?;
    body.check()?;

    let cookie_name = state.config.session_cookie_name.clone();
    let reusable = match session_from_jar(&jar, &cookie_name) {
        Some(existing) => UserRepo::find_by_session(&state.pool, &existing)
            .await?
            .is_none()
            .then_some(existing),
        None => None,
    };
    let session_id = reusable.unwrap_or_else(SessionId::generate);

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            session_id: session_id.clone(),
            name: body.name,
            email: body.email,
        },
    )
    .await?;
    tracing::info!(user_id = %user.id, %session_id, "User created");

    let cookie = Cookie::build((cookie_name, session_id.to_string()))
        .path("/")
        .max_age(time::Duration::days(state.config.session_max_age_days))
        .http_only(true)
        .same_site(SameSite::Lax);

    Ok((StatusCode::CREATED, jar.add(cookie)))
}
