//! Client for the `/artists` resource.

use artistshub_core::artist::{ArtistFilter, ArtistPatch, NewArtist};
use artistshub_core::envelope::Envelope;

use crate::http::{ApiClient, ApiError};
use crate::models::Artist;

#[derive(Clone)]
pub struct ArtistsApi {
    client: ApiClient,
}

impl ArtistsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `featured=true` is only sent when the filter asks for it, `role` only
    /// when set.
    pub async fn list(&self, filter: &ArtistFilter) -> Result<Envelope<Vec<Artist>>, ApiError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if filter.featured {
            query.push(("featured", "true"));
        }
        if let Some(role) = filter.role.as_deref().filter(|r| !r.is_empty()) {
            query.push(("role", role));
        }
        self.client.get_with_query("/artists", &query).await
    }

    pub async fn get(&self, slug: &str) -> Result<Envelope<Artist>, ApiError> {
        self.client.get(&format!("/artists/{slug}")).await
    }

    pub async fn create(&self, artist: &NewArtist) -> Result<Envelope<Artist>, ApiError> {
        self.client.post("/artists", artist).await
    }

    pub async fn update(
        &self,
        slug: &str,
        patch: &ArtistPatch,
    ) -> Result<Envelope<Artist>, ApiError> {
        self.client.put(&format!("/artists/{slug}"), patch).await
    }

    pub async fn delete(&self, slug: &str) -> Result<Envelope<()>, ApiError> {
        self.client.delete(&format!("/artists/{slug}")).await
    }
}
