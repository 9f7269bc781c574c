//! Sample artists inserted by `GET /api/seed` on an empty database.

use artistshub_db::models::artist::CreateArtist;
use artistshub_db::repositories::ArtistRepo;
use artistshub_db::DbPool;

/// Result of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty; this many artists were written.
    Seeded(usize),
    /// Artists already existed; nothing was written.
    AlreadyPopulated,
}

/// Insert [`sample_artists`] if the artist table is empty.
///
/// Concurrent seeders are harmless: each insert skips slugs that already
/// exist.
pub async fn seed_if_empty(pool: &DbPool) -> Result<SeedOutcome, sqlx::Error> {
    if ArtistRepo::count(pool).await? > 0 {
        return Ok(SeedOutcome::AlreadyPopulated);
    }

    let mut inserted = 0;
    for artist in sample_artists() {
        if ArtistRepo::insert_if_absent(pool, &artist).await? {
            inserted += 1;
        }
    }
    Ok(SeedOutcome::Seeded(inserted))
}

fn unsplash(photo: &str) -> String {
    format!("https://images.unsplash.com/{photo}?q=80&w=1200&auto=format&fit=crop")
}

/// The three featured, ownerless artists used to populate a fresh install.
pub fn sample_artists() -> Vec<CreateArtist> {
    vec![
        CreateArtist {
            slug: "aurora-lee".into(),
            name: "Aurora Lee".into(),
            role: "Concept Illustrator".into(),
            bio: "Aurora blends neon palettes with ethereal forms, crafting dreamlike \
                  cityscapes and characters."
                .into(),
            hero_image: unsplash("photo-1549880338-65ddcdfd017b"),
            gallery: vec![
                unsplash("photo-1500530855697-b586d89ba3ee"),
                unsplash("photo-1500534314209-a25ddb2bd429"),
                unsplash("photo-1488521787991-ed7bbaae773c"),
            ],
            featured: true,
            user_id: None,
        },
        CreateArtist {
            slug: "kai-nakamura".into(),
            name: "Kai Nakamura".into(),
            role: "Architectural Visualizer".into(),
            bio: "Kai renders minimalist structures bathed in soft light, exploring balance \
                  and silence."
                .into(),
            hero_image: unsplash("photo-1500534314209-a25ddb2bd429"),
            gallery: vec![
                unsplash("photo-1500534314209-a25ddb2bd429"),
                unsplash("photo-1518770660439-4636190af475"),
                unsplash("photo-1526318472351-c75fcf070305"),
            ],
            featured: true,
            user_id: None,
        },
        CreateArtist {
            slug: "mira-sol".into(),
            name: "Mira Sol".into(),
            role: "Fashion Designer".into(),
            bio: "Mira stitches stories into fabric: fluid silhouettes, bold textures, and \
                  luminous accents."
                .into(),
            hero_image: unsplash("photo-1477959858617-67f85cf4f1df"),
            gallery: vec![
                unsplash("photo-1512436991641-6745cdb1723f"),
                unsplash("photo-1542060748-10c28b62716b"),
                unsplash("photo-1495121605193-b116b5b09a0d"),
            ],
            featured: true,
            user_id: None,
        },
    ]
}
