//! Repository for the `contacts` table.

use artistshub_core::contact::ContactStatus;
use artistshub_core::types::{DbId, Timestamp};
use chrono::Utc;
use sqlx::{FromRow, SqlitePool};

use crate::models::contact::{ArtistRef, Contact, ContactWithArtist, CreateContact};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, message, artist_id, status, created_at";

/// Flat row produced by the contact/artist left join.
#[derive(FromRow)]
struct ContactListRow {
    id: DbId,
    name: String,
    email: String,
    message: String,
    artist_id: Option<DbId>,
    #[sqlx(try_from = "String")]
    status: ContactStatus,
    created_at: Timestamp,
    ref_id: Option<DbId>,
    ref_name: Option<String>,
    ref_slug: Option<String>,
}

impl From<ContactListRow> for ContactWithArtist {
    fn from(row: ContactListRow) -> Self {
        let artist = match (row.ref_id, row.ref_name, row.ref_slug) {
            (Some(id), Some(name), Some(slug)) => Some(ArtistRef { id, name, slug }),
            _ => None,
        };
        ContactWithArtist {
            contact: Contact {
                id: row.id,
                name: row.name,
                email: row.email,
                message: row.message,
                artist_id: row.artist_id,
                status: row.status,
                created_at: row.created_at,
            },
            artist,
        }
    }
}

/// Provides create and list operations for contact messages.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact message in the `pending` state.
    pub async fn create(pool: &SqlitePool, input: &CreateContact) -> Result<Contact, sqlx::Error> {
        let query = format!(
            "INSERT INTO contacts (name, email, message, artist_id, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Contact>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.message)
            .bind(input.artist_id)
            .bind(ContactStatus::Pending.as_str())
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// List every message, newest first, with the referenced artist resolved.
    pub async fn list_with_artists(pool: &SqlitePool) -> Result<Vec<ContactWithArtist>, sqlx::Error> {
        let rows = sqlx::query_as::<_, ContactListRow>(
            "SELECT c.id, c.name, c.email, c.message, c.artist_id, c.status, c.created_at,
                    a.id AS ref_id, a.name AS ref_name, a.slug AS ref_slug
             FROM contacts c
             LEFT JOIN artists a ON a.id = c.artist_id
             ORDER BY c.created_at DESC, c.id DESC",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(ContactWithArtist::from).collect())
    }

    /// Total number of contact messages.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contacts")
            .fetch_one(pool)
            .await
    }
}
