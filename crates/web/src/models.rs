//! Response shapes the client reads from the backend.

use artistshub_core::contact::ContactStatus;
use artistshub_core::types::DbId;
use serde::{Deserialize, Serialize};

/// An artist as rendered by the pages.
///
/// Bundled sample artists have no `id`; backend artists always do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub slug: String,
    pub name: String,
    pub role: String,
    pub bio: String,
    pub hero_image: String,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<DbId>,
}

/// A stored contact message as echoed back by `POST /contact`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub artist_id: Option<DbId>,
    pub status: ContactStatus,
}
