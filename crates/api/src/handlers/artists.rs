//! Handlers for the `/artists` resource.

use artistshub_core::artist::{ArtistPatch, NewArtist};
use artistshub_core::error::CoreError;
use artistshub_db::models::artist::{Artist, CreateArtist, UpdateArtist};
use artistshub_db::repositories::ArtistRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::query::ArtistListParams;
use crate::response::{created, ApiResponse, ApiResponseWithStatus, Envelope};
use crate::state::AppState;

/// GET /api/artists?featured=true&role=...
pub async fn list_artists(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ArtistListParams>,
) -> AppResult<ApiResponse<Vec<Artist>>> {
    let filter = params.into_filter();
    let artists = ArtistRepo::list(&state.pool, &filter).await?;
    Ok(Json(Envelope::ok(artists)))
}

/// GET /api/artists/{slug}
pub async fn get_artist(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<ApiResponse<Artist>> {
    let artist = find_or_404(&state, &slug).await?;
    Ok(Json(Envelope::ok(artist)))
}

/// POST /api/artists
///
/// Create an artist owned by the caller. The slug is derived from the name.
pub async fn create_artist(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<NewArtist>,
) -> AppResult<ApiResponseWithStatus<Artist>> {
    let (artist, slug) = input.validate()?;

    let create = CreateArtist {
        slug,
        name: artist.name,
        role: artist.role,
        bio: artist.bio,
        hero_image: artist.hero_image,
        gallery: artist.gallery,
        featured: artist.featured,
        user_id: Some(auth.user_id),
    };

    let artist = ArtistRepo::create(&state.pool, &create)
        .await
        .map_err(|e| AppError::conflict_on_unique(e, "Artist with this name already exists"))?;

    tracing::info!(
        artist_id = artist.id,
        slug = %artist.slug,
        user_id = auth.user_id,
        "Artist created"
    );

    Ok(created(Envelope::ok(artist)))
}

/// PUT /api/artists/{slug}
///
/// Apply the supplied non-empty fields. Only the owner may update; the slug
/// never changes.
pub async fn update_artist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    AppJson(patch): AppJson<ArtistPatch>,
) -> AppResult<ApiResponse<Artist>> {
    let existing = find_or_404(&state, &slug).await?;
    ensure_owner(&existing, &auth, "Not authorized to update this artist")?;

    let patch = patch.normalized();
    let update = UpdateArtist {
        name: patch.name,
        role: patch.role,
        bio: patch.bio,
        hero_image: patch.hero_image,
        gallery: patch.gallery,
        featured: patch.featured,
    };

    // The write re-checks ownership; a row deleted in between reads as 404.
    let artist = ArtistRepo::update_owned(&state.pool, &slug, auth.user_id, &update)
        .await?
        .ok_or_else(|| artist_not_found(&slug))?;

    tracing::info!(
        artist_id = artist.id,
        slug = %artist.slug,
        user_id = auth.user_id,
        "Artist updated"
    );

    Ok(Json(Envelope::ok(artist)))
}

/// DELETE /api/artists/{slug}
pub async fn delete_artist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let existing = find_or_404(&state, &slug).await?;
    ensure_owner(&existing, &auth, "Not authorized to delete this artist")?;

    let deleted = ArtistRepo::delete_owned(&state.pool, &slug, auth.user_id).await?;
    if !deleted {
        return Err(artist_not_found(&slug));
    }

    tracing::info!(artist_id = existing.id, %slug, user_id = auth.user_id, "Artist deleted");

    Ok(Json(Envelope::message("Artist deleted successfully")))
}

async fn find_or_404(state: &AppState, slug: &str) -> AppResult<Artist> {
    ArtistRepo::find_by_slug(&state.pool, slug)
        .await?
        .ok_or_else(|| artist_not_found(slug))
}

fn artist_not_found(slug: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artist",
        key: slug.to_string(),
    })
}

fn ensure_owner(artist: &Artist, auth: &AuthUser, message: &str) -> AppResult<()> {
    if artist.is_owned_by(auth.user_id) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(message.to_string())))
    }
}
