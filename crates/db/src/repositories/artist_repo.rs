//! Repository for the `artists` table.

use artistshub_core::artist::ArtistFilter;
use artistshub_core::types::DbId;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::models::artist::{Artist, CreateArtist, UpdateArtist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, name, role, bio, hero_image, gallery, user_id, featured, \
                       created_at, updated_at";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    ///
    /// Fails with a unique violation if the slug is taken.
    pub async fn create(pool: &SqlitePool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO artists (slug, name, role, bio, hero_image, gallery, user_id, featured,
                                  created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.slug)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.bio)
            .bind(&input.hero_image)
            .bind(Json(input.gallery.clone()))
            .bind(input.user_id)
            .bind(input.featured)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Insert an artist unless its slug already exists.
    ///
    /// Returns `true` if a row was written. Used for seeding, where racing
    /// seeders must not fail each other.
    pub async fn insert_if_absent(
        pool: &SqlitePool,
        input: &CreateArtist,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO artists (slug, name, role, bio, hero_image, gallery, user_id, featured,
                                  created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?9)
             ON CONFLICT (slug) DO NOTHING",
        )
        .bind(&input.slug)
        .bind(&input.name)
        .bind(&input.role)
        .bind(&input.bio)
        .bind(&input.hero_image)
        .bind(Json(input.gallery.clone()))
        .bind(input.user_id)
        .bind(input.featured)
        .bind(Utc::now())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find an artist by slug.
    pub async fn find_by_slug(
        pool: &SqlitePool,
        slug: &str,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE slug = ?1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List artists matching `filter`, most recently created first.
    pub async fn list(pool: &SqlitePool, filter: &ArtistFilter) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM artists
             WHERE (?1 = 0 OR featured = 1)
               AND (?2 IS NULL OR role = ?2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(filter.featured)
            .bind(&filter.role)
            .fetch_all(pool)
            .await
    }

    /// Total number of artists.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM artists")
            .fetch_one(pool)
            .await
    }

    /// Update an artist owned by `owner_id`. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no artist with this slug is owned by `owner_id`.
    pub async fn update_owned(
        pool: &SqlitePool,
        slug: &str,
        owner_id: DbId,
        input: &UpdateArtist,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "UPDATE artists SET
                name = COALESCE(?3, name),
                role = COALESCE(?4, role),
                bio = COALESCE(?5, bio),
                hero_image = COALESCE(?6, hero_image),
                gallery = COALESCE(?7, gallery),
                featured = COALESCE(?8, featured),
                updated_at = ?9
             WHERE slug = ?1 AND user_id = ?2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(slug)
            .bind(owner_id)
            .bind(&input.name)
            .bind(&input.role)
            .bind(&input.bio)
            .bind(&input.hero_image)
            .bind(input.gallery.clone().map(Json))
            .bind(input.featured)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete an artist owned by `owner_id`. Returns `true` if a row was removed.
    pub async fn delete_owned(
        pool: &SqlitePool,
        slug: &str,
        owner_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE slug = ?1 AND user_id = ?2")
            .bind(slug)
            .bind(owner_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
