//! Contact message model and DTOs.

use artistshub_core::contact::ContactStatus;
use artistshub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A contact row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub artist_id: Option<DbId>,
    #[sqlx(try_from = "String")]
    pub status: ContactStatus,
    pub created_at: Timestamp,
}

/// Minimal artist details attached to a contact listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistRef {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}

/// A contact message with its artist reference resolved.
///
/// `artist` is `None` both when no artist was given and when the referenced
/// artist no longer exists.
#[derive(Debug, Clone, Serialize)]
pub struct ContactWithArtist {
    #[serde(flatten)]
    pub contact: Contact,
    pub artist: Option<ArtistRef>,
}

/// DTO for creating a contact message. Status always starts as pending.
#[derive(Debug, Clone)]
pub struct CreateContact {
    pub name: String,
    pub email: String,
    pub message: String,
    pub artist_id: Option<DbId>,
}
