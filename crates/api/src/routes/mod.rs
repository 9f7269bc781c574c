pub mod artists;
pub mod auth;
pub mod contact;
pub mod system;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                       service + database health (GET)
/// /seed                         insert sample artists if empty (GET)
///
/// /auth/signup                  create account (public)
/// /auth/login                   login (public)
/// /auth/me                      caller profile (requires auth)
///
/// /artists                      list (public), create (requires auth)
/// /artists/{slug}               get (public), update, delete (owner only)
///
/// /contact                      submit (public), list (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(system::router())
        .nest("/auth", auth::router())
        .nest("/artists", artists::router())
        .nest("/contact", contact::router())
}
