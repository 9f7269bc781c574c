//! Shared response envelope types for API handlers.
//!
//! Every response body is an [`Envelope`]. Use [`ApiResponse`] as the
//! handler return type instead of ad-hoc `serde_json::json!` bodies.

use axum::http::StatusCode;
use axum::Json;

pub use artistshub_core::envelope::Envelope;

/// A JSON envelope response with the default `200 OK` status.
pub type ApiResponse<T> = Json<Envelope<T>>;

/// A JSON envelope response with an explicit status (e.g. `201 Created`).
pub type ApiResponseWithStatus<T> = (StatusCode, Json<Envelope<T>>);

/// `201 Created` wrapper around an envelope.
pub fn created<T>(envelope: Envelope<T>) -> ApiResponseWithStatus<T> {
    (StatusCode::CREATED, Json(envelope))
}
