//! Cookie-based session extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;
use dailydiet_core::error::CoreError;
use dailydiet_core::types::SessionId;

use crate::error::AppError;
use crate::state::AppState;

/// Session of the caller, taken from the session cookie.
///
/// Any non-empty cookie value is accepted as the session id; it is not
/// looked up in `users`. Put it first in a handler's parameter list so a missing
/// cookie is reported before any body or path problem:
///
/// ```ignore
/// async fn my_handler(SessionGuard(session_id): SessionGuard) -> AppResult<StatusCode> {
///     tracing::info!(%session_id, "handling request");
///     Ok(StatusCode::NO_CONTENT)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SessionGuard(pub SessionId);

impl FromRequestParts<AppState> for SessionGuard {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let session_id = session_from_jar(&jar, &state.config.session_cookie_name)
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing session cookie".into()))
            })?;

        Ok(SessionGuard(session_id))
    }
}

/// Read the session cookie, if present and non-empty.
pub fn session_from_jar(jar: &CookieJar, cookie_name: &str) -> Option<SessionId> {
    let session_id = SessionId::new(jar.get(cookie_name)?.value());
    if session_id.is_none() {
        tracing::debug!(cookie = cookie_name, "Ignoring empty session cookie");
    }
    session_id
}
