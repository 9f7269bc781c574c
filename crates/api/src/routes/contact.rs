//! Route definitions for the `/contact` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST /   -> submit_contact
/// GET  /   -> list_contacts (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(contact::submit_contact).get(contact::list_contacts),
    )
}
