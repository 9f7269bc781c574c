//! Shared query parameter types for API handlers.

use artistshub_core::artist::ArtistFilter;
use serde::Deserialize;

/// Query parameters for `GET /artists` (`?featured=true&role=...`).
///
/// Only the literal `featured=true` enables the featured filter; a blank
/// `role` is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ArtistListParams {
    pub featured: Option<String>,
    pub role: Option<String>,
}

impl ArtistListParams {
    pub fn into_filter(self) -> ArtistFilter {
        ArtistFilter {
            featured: self.featured.as_deref() == Some("true"),
            role: self.role.filter(|r| !r.trim().is_empty()),
        }
    }
}
