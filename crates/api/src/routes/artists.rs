//! Route definitions for the `/artists` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::artists;
use crate::state::AppState;

/// Routes mounted at `/artists`.
///
/// ```text
/// GET    /          -> list_artists
/// POST   /          -> create_artist (requires auth)
/// GET    /{slug}    -> get_artist
/// PUT    /{slug}    -> update_artist (owner only)
/// DELETE /{slug}    -> delete_artist (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(artists::list_artists).post(artists::create_artist),
        )
        .route(
            "/{slug}",
            get(artists::get_artist)
                .put(artists::update_artist)
                .delete(artists::delete_artist),
        )
}
