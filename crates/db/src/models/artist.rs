//! Artist entity model and DTOs.

use artistshub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// An artist row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub hero_image: String,
    /// Ordered image references, stored as a JSON array.
    pub gallery: Json<Vec<String>>,
    /// Owning creator, if any. Seeded artists have none.
    pub user_id: Option<DbId>,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Artist {
    pub fn is_owned_by(&self, user_id: DbId) -> bool {
        self.user_id == Some(user_id)
    }
}

/// DTO for creating a new artist. `slug` must already be derived.
#[derive(Debug, Clone)]
pub struct CreateArtist {
    pub slug: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub hero_image: String,
    pub gallery: Vec<String>,
    pub featured: bool,
    pub user_id: Option<DbId>,
}

/// DTO for updating an existing artist. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateArtist {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub hero_image: Option<String>,
    pub gallery: Option<Vec<String>>,
    pub featured: Option<bool>,
}
