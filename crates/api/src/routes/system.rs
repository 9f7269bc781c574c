use axum::routing::get;
use axum::Router;

use crate::handlers::system;
use crate::state::AppState;

/// Health and seed routes, mounted directly under `/api`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(system::health_check))
        .route("/seed", get(system::seed))
}
