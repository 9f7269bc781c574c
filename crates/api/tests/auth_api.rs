//! HTTP-level integration tests for the `/api/auth` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json};
use serde_json::json;

use artistshub_db::repositories::UserRepo;

// ---------------------------------------------------------------------------
// Signup
// ---------------------------------------------------------------------------

#[tokio::test]
async fn creator_signup_returns_token() {
    let pool = common::test_pool().await;
    let app = common::build_test_app(pool.clone());

    let body = json!({
        "name": "Kai",
        "email": "  Kai@Studio.ART ",
        "role": "creator",
        "password": "secret123",
        "profession": "Painter",
    });
    let response = post_json(app, "/api/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Account created successfully");
    assert!(json["data"]["token"].is_string());
    assert_eq!(json["data"]["user"]["email"], "kai@studio.art");
    assert_eq!(json["data"]["user"]["role"], "creator");
    assert_eq!(json["data"]["user"]["profession"], "Painter");
    assert!(json["data"]["user"].get("passwordHash").is_none());

    let stored = UserRepo::find_by_email(&pool, "kai@studio.art")
        .await
        .unwrap()
        .expect("user row should exist");
    assert!(stored.password_hash.unwrap().starts_with("$argon2id$"));
}

#[tokio::test]
async fn client_signup_has_no_token_and_cannot_login() {
    let pool = common::test_pool().await;

    let body = json!({
        "name": "Dana",
        "email": "dana@hire.co",
        "role": "client",
        "projectBrief": "Album cover",
    });
    let response = post_json(common::build_test_app(pool.clone()), "/api/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["data"]["token"].is_null());
    assert_eq!(json["data"]["user"]["role"], "client");

    let login = json!({ "email": "dana@hire.co", "password": "anything" });
    let response = post_json(common::build_test_app(pool), "/api/auth/login", login).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "This account has no password and cannot sign in"
    );
}

#[tokio::test]
async fn short_creator_password_writes_nothing() {
    let pool = common::test_pool().await;

    let body = json!({
        "name": "Kai",
        "email": "kai@studio.art",
        "role": "creator",
        "password": "12345",
    });
    let response = post_json(common::build_test_app(pool.clone()), "/api/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["errors"][0]["field"], "password");

    assert!(UserRepo::find_by_email(&pool, "kai@studio.art")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let pool = common::test_pool().await;
    common::signup_creator(common::build_test_app(pool.clone()), "Kai", "kai@studio.art").await;

    let body = json!({ "name": "Other", "email": "KAI@studio.art", "role": "client" });
    let response = post_json(common::build_test_app(pool), "/api/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["message"], "User already exists with this email");
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn login_success_and_failures() {
    let pool = common::test_pool().await;
    common::signup_creator(common::build_test_app(pool.clone()), "Kai", "kai@studio.art").await;

    let ok = json!({ "email": "kai@studio.art", "password": "secret123" });
    let response = post_json(common::build_test_app(pool.clone()), "/api/auth/login", ok).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Login successful");
    assert!(json["data"]["token"].is_string());

    let wrong = json!({ "email": "kai@studio.art", "password": "wrong-password" });
    let response = post_json(common::build_test_app(pool.clone()), "/api/auth/login", wrong).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["message"], "Invalid credentials");

    let unknown = json!({ "email": "ghost@studio.art", "password": "secret123" });
    let response = post_json(common::build_test_app(pool), "/api/auth/login", unknown).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["message"], "Invalid credentials");
}

#[tokio::test]
async fn login_requires_password() {
    let app = common::build_test_app(common::test_pool().await);
    let body = json!({ "email": "kai@studio.art", "password": "" });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Me
// ---------------------------------------------------------------------------

#[tokio::test]
async fn me_returns_caller_profile() {
    let pool = common::test_pool().await;
    let token =
        common::signup_creator(common::build_test_app(pool.clone()), "Kai", "kai@studio.art").await;

    let response = get_auth(common::build_test_app(pool), "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["user"]["name"], "Kai");
}

#[tokio::test]
async fn me_without_or_with_bad_token_is_401() {
    let pool = common::test_pool().await;

    let response = get(common::build_test_app(pool.clone()), "/api/auth/me").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");

    let response = get_auth(common::build_test_app(pool), "/api/auth/me", "not.a.jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_for_deleted_user_is_401() {
    let pool = common::test_pool().await;
    let token =
        common::signup_creator(common::build_test_app(pool.clone()), "Kai", "kai@studio.art").await;

    sqlx::query("DELETE FROM users").execute(&pool).await.unwrap();

    let response = get_auth(common::build_test_app(pool), "/api/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["message"], "User no longer exists");
}
