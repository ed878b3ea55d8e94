//! HTTP-level integration tests for `POST /users` and the session cookie.

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, build_test_app, create_meal, list_meals, post_json, set_cookie_pair};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_user_sets_session_cookie(pool: PgPool) {
    let response = post_json(
        build_test_app(pool),
        "/users",
        None,
        json!({"name": "New user", "email": "example@example.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let raw = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Set-Cookie header")
        .to_str()
        .unwrap()
        .to_string();
    assert!(raw.starts_with("sessionId="));
    assert!(raw.contains("Path=/"));
    assert!(raw.contains("HttpOnly"));
    assert!(raw.contains("Max-Age=604800"));

    let pair = set_cookie_pair(&response).unwrap();
    let value = pair.trim_start_matches("sessionId=");
    // Issued ids are hyphenated UUIDs.
    assert_eq!(value.len(), 36);
    assert_eq!(value.matches('-').count(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unbound_session_cookie_is_reused(pool: PgPool) {
    let existing = "sessionId=0190a1b2-2222-4000-8000-000000000000";
    create_meal(&pool, existing, "Before signup", true).await;

    let response = post_json(
        build_test_app(pool.clone()),
        "/users",
        Some(existing),
        json!({"name": "Late", "email": "late@example.com"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let pair = set_cookie_pair(&response).unwrap();
    assert_eq!(pair, existing);
    assert_eq!(list_meals(&pool, &pair).await.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bound_session_cookie_gets_a_fresh_session(pool: PgPool) {
    let first = post_json(
        build_test_app(pool.clone()),
        "/users",
        None,
        json!({"name": "One", "email": "one@example.com"}),
    )
    .await;
    let first_cookie = set_cookie_pair(&first).unwrap();

    let second = post_json(
        build_test_app(pool),
        "/users",
        Some(&first_cookie),
        json!({"name": "Two", "email": "two@example.com"}),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CREATED);
    let second_cookie = set_cookie_pair(&second).unwrap();
    assert_ne!(first_cookie, second_cookie);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_returns_409(pool: PgPool) {
    let body = json!({"name": "Ada", "email": "ada@example.com"});
    let first = post_json(build_test_app(pool.clone()), "/users", None, body.clone()).await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(build_test_app(pool), "/users", None, body).await;
    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(second).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_user_bodies_return_400(pool: PgPool) {
    let bodies = [
        json!({"name": "No email"}),
        json!({"email": "noname@example.com"}),
        json!({"name": "Bad", "email": "not-an-email"}),
        json!({"name": "", "email": "empty@example.com"}),
    ];
    for body in bodies {
        let response = post_json(build_test_app(pool.clone()), "/users", None, body.clone()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }
}
