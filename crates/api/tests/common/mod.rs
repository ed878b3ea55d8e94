#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use dailydiet_api::config::ServerConfig;
use dailydiet_api::router::build_app_router;
use dailydiet_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        session_cookie_name: "sessionId".to_string(),
        session_max_age_days: 7,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a request with an optional `Cookie` header and optional JSON body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    send(app, Method::GET, uri, cookie, None).await
}

pub async fn post_json(app: Router, uri: &str, cookie: Option<&str>, json: Value) -> Response<Body> {
    send(app, Method::POST, uri, cookie, Some(json)).await
}

pub async fn put_json(app: Router, uri: &str, cookie: Option<&str>, json: Value) -> Response<Body> {
    send(app, Method::PUT, uri, cookie, Some(json)).await
}

pub async fn delete(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    send(app, Method::DELETE, uri, cookie, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// The `name=value` pair of the first `Set-Cookie` header.
pub fn set_cookie_pair(response: &Response<Body>) -> Option<String> {
    let raw = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    raw.split(';').next().map(|pair| pair.trim().to_string())
}

/// Create a user via `POST /users` and return its `sessionId=<uuid>` cookie.
pub async fn create_session(pool: &PgPool, email: &str) -> String {
    let response = post_json(
        build_test_app(pool.clone()),
        "/users",
        None,
        serde_json::json!({"name": "Test Name", "email": email}),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    set_cookie_pair(&response).expect("POST /users must set the session cookie")
}

/// Create a meal for the session behind `cookie`.
pub async fn create_meal(pool: &PgPool, cookie: &str, name: &str, is_on_diet: bool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/meals",
        Some(cookie),
        serde_json::json!({
            "name": name,
            "description": format!("{name} description"),
            "isOnDiet": is_on_diet,
        }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
}

/// List the session's meals as returned by `GET /meals`.
pub async fn list_meals(pool: &PgPool, cookie: &str) -> Vec<Value> {
    let response = get(build_test_app(pool.clone()), "/meals", Some(cookie)).await;
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    body_json(response).await["meals"]
        .as_array()
        .cloned()
        .unwrap_or_default()
}
