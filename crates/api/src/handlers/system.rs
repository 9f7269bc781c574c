//! Health and seeding endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::{ApiResponse, Envelope};
use crate::seed::{seed_if_empty, SeedOutcome};
use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /api/health -- returns service and database health.
pub async fn health_check(State(state): State<AppState>) -> ApiResponse<HealthResponse> {
    let db_healthy = artistshub_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(Envelope::ok_with_message(
        "Server is running",
        HealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        },
    ))
}

/// GET /api/seed -- insert the sample artists when the table is empty.
pub async fn seed(State(state): State<AppState>) -> AppResult<ApiResponse<()>> {
    let message = match seed_if_empty(&state.pool).await? {
        SeedOutcome::Seeded(inserted) => {
            tracing::info!(inserted, "Seeded sample artists");
            "Database seeded with initial artists"
        }
        SeedOutcome::AlreadyPopulated => "Database already has data",
    };
    Ok(Json(Envelope::message(message)))
}
