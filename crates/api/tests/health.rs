//! Integration tests for the health check, seeding and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

// ---------------------------------------------------------------------------
// Test: GET /api/health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app(common::test_pool().await);
    let response = get(app, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Server is running");
    assert_eq!(json["data"]["status"], "ok");
    assert!(json["data"]["version"].is_string());
    assert_eq!(json["data"]["dbHealthy"], true);
}

// ---------------------------------------------------------------------------
// Test: Unknown routes return the 404 envelope
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404_envelope() {
    let pool = common::test_pool().await;

    for uri in ["/this-route-does-not-exist", "/api/nope"] {
        let response = get(common::build_test_app(pool.clone()), uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Route not found");
    }
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(common::test_pool().await);
    let response = get(app, "/api/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36);
}

// ---------------------------------------------------------------------------
// Test: Seeding is idempotent
// ---------------------------------------------------------------------------

#[tokio::test]
async fn seed_runs_once() {
    let pool = common::test_pool().await;

    let json = body_json(get(common::build_test_app(pool.clone()), "/api/seed").await).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Database seeded with initial artists");

    let json = body_json(get(common::build_test_app(pool.clone()), "/api/seed").await).await;
    assert_eq!(json["message"], "Database already has data");

    let json = body_json(get(common::build_test_app(pool), "/api/artists").await).await;
    let slugs: Vec<_> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["slug"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(slugs.len(), 3);
    for slug in ["aurora-lee", "kai-nakamura", "mira-sol"] {
        assert!(slugs.iter().any(|s| s == slug), "missing {slug}");
    }
}
