//! Typed facades over [`ApiClient`], one per backend resource.

pub mod artists;
pub mod auth;
pub mod contact;

pub use artists::ArtistsApi;
pub use auth::AuthApi;
pub use contact::ContactApi;

use crate::http::ApiClient;

/// All resource facades sharing one client.
#[derive(Clone)]
pub struct Api {
    pub auth: AuthApi,
    pub artists: ArtistsApi,
    pub contact: ContactApi,
}

impl Api {
    pub fn new(client: ApiClient) -> Self {
        Self {
            auth: AuthApi::new(client.clone()),
            artists: ArtistsApi::new(client.clone()),
            contact: ContactApi::new(client),
        }
    }
}
