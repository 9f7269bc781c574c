//! Artist and contact client tests against a live backend, plus the page
//! loaders' fallback behaviour.

mod common;

use artistshub_api::seed::{seed_if_empty, SeedOutcome};
use artistshub_core::artist::{ArtistFilter, ArtistPatch, NewArtist};
use artistshub_core::auth::{CreatorSignup, SignupRequest};
use artistshub_core::contact::{ContactRequest, ContactStatus};
use artistshub_web::api::Api;
use artistshub_web::fallback::DataSource;
use artistshub_web::http::ApiError;
use artistshub_web::pages::{load_artist_detail, load_artist_list};
use artistshub_web::sample::sample_artists;
use assert_matches::assert_matches;

async fn signed_in(url: &str, email: &str) -> Api {
    let api = common::api(url, common::memory_tokens());
    api.auth
        .signup(&SignupRequest::Creator(CreatorSignup {
            name: "Owner".into(),
            email: email.into(),
            password: "secret123".into(),
            profession: None,
        }))
        .await
        .unwrap();
    api
}

fn new_artist(name: &str, role: &str) -> NewArtist {
    NewArtist {
        name: name.into(),
        role: role.into(),
        bio: "Makes things.".into(),
        hero_image: "https://img.example/hero.jpg".into(),
        gallery: vec!["https://img.example/1.jpg".into()],
        featured: false,
    }
}

#[tokio::test]
async fn bearer_header_is_omitted_without_token() {
    let backend = common::spawn_backend().await;
    let api = common::api(&backend.url, common::memory_tokens());

    let err = api
        .artists
        .create(&new_artist("Jane", "Muralist"))
        .await
        .unwrap_err();
    assert_matches!(err, ApiError::Status { status: 401, .. });
    assert_eq!(err.message(), "Not authorized, no token");
    assert_eq!(err.code(), Some("UNAUTHORIZED"));
}

#[tokio::test]
async fn artist_lifecycle() {
    let backend = common::spawn_backend().await;
    let owner = signed_in(&backend.url, "owner@art.io").await;

    let created = owner
        .artists
        .create(&new_artist("Jane O'Brien!!", "Textile & Pattern Designer"))
        .await
        .unwrap();
    let artist = created.data.unwrap();
    assert_eq!(artist.slug, "jane-o-brien");
    assert!(artist.id.is_some());

    // Role values with reserved characters survive URL encoding.
    let filter = ArtistFilter {
        featured: false,
        role: Some("Textile & Pattern Designer".into()),
    };
    let listed = owner.artists.list(&filter).await.unwrap().data.unwrap();
    assert_eq!(listed.len(), 1);

    let patch = ArtistPatch {
        bio: Some("Weaves stories.".into()),
        featured: Some(true),
        ..Default::default()
    };
    let updated = owner
        .artists
        .update("jane-o-brien", &patch)
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(updated.bio, "Weaves stories.");
    assert!(updated.featured);

    let featured = owner
        .artists
        .list(&ArtistFilter::featured())
        .await
        .unwrap()
        .data
        .unwrap();
    assert_eq!(featured.len(), 1);

    let intruder = signed_in(&backend.url, "intruder@art.io").await;
    let err = intruder.artists.delete("jane-o-brien").await.unwrap_err();
    assert_matches!(err, ApiError::Status { status: 403, .. });

    let deleted = owner.artists.delete("jane-o-brien").await.unwrap();
    assert_eq!(deleted.message.as_deref(), Some("Artist deleted successfully"));

    let err = owner.artists.get("jane-o-brien").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn contact_submission() {
    let backend = common::spawn_backend().await;
    let api = common::api(&backend.url, common::memory_tokens());

    let envelope = api
        .contact
        .submit(&ContactRequest {
            name: "Dana".into(),
            email: "dana@hire.co".into(),
            message: "Hello".into(),
            artist_id: None,
        })
        .await
        .unwrap();
    assert_eq!(
        envelope.message.as_deref(),
        Some("Thank you for your message! We will get back to you soon.")
    );
    assert_eq!(envelope.data.unwrap().status, ContactStatus::Pending);

    let err = api
        .contact
        .submit(&ContactRequest {
            name: "Dana".into(),
            email: "not-an-email".into(),
            message: "Hello".into(),
            artist_id: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.code(), Some("VALIDATION_ERROR"));
}

#[tokio::test]
async fn list_page_falls_back_on_network_failure() {
    let api = common::api(&common::unreachable_url().await, common::memory_tokens());

    let loaded = load_artist_list(&api.artists).await;
    assert_eq!(loaded.source, DataSource::Fallback);
    assert_eq!(loaded.value, sample_artists());
}

#[tokio::test]
async fn list_page_falls_back_on_empty_then_uses_network() {
    let backend = common::spawn_backend().await;
    let api = common::api(&backend.url, common::memory_tokens());

    let loaded = load_artist_list(&api.artists).await;
    assert!(loaded.is_fallback());
    assert_eq!(loaded.value.len(), 5);

    let outcome = seed_if_empty(&backend.pool).await.unwrap();
    assert_eq!(outcome, SeedOutcome::Seeded(3));

    let loaded = load_artist_list(&api.artists).await;
    assert_eq!(loaded.source, DataSource::Network);
    assert_eq!(loaded.value.len(), 3);
}

#[tokio::test]
async fn detail_page_falls_back_by_slug() {
    let backend = common::spawn_backend().await;
    let api = common::api(&backend.url, common::memory_tokens());

    // Unknown to the backend, known to the bundled data.
    let loaded = load_artist_detail(&api.artists, "elena-petrova").await;
    assert!(loaded.is_fallback());
    assert_eq!(loaded.value.artist.unwrap().name, "Elena Petrova");
    assert_eq!(loaded.value.related.len(), 4);

    let loaded = load_artist_detail(&api.artists, "nobody-at-all").await;
    assert!(loaded.value.artist.is_none());

    let offline = common::api(&common::unreachable_url().await, common::memory_tokens());
    let loaded = load_artist_detail(&offline.artists, "sarah-chen").await;
    assert_eq!(loaded.value.artist.unwrap().slug, "sarah-chen");
}
