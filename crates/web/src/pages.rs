//! Route to page selection and the data each page loads.

use artistshub_core::artist::ArtistFilter;

use crate::api::ArtistsApi;
use crate::fallback::{fetch_or, Loaded};
use crate::http::ApiError;
use crate::models::Artist;
use crate::router::{RouteId, RouteState};
use crate::sample::{find_sample, related_samples, sample_artists};

/// How many other artists the detail page suggests.
pub const RELATED_ARTISTS: usize = 4;

/// The page rendered for a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Artists,
    ArtistDetail { slug: String },
    About,
    Contact,
    Login,
    Signup,
    Gallery,
    Services,
    Faq,
    Testimonials,
}

/// Pure route to page mapping. A detail route without a slug shows `Home`.
pub fn select_page(state: &RouteState) -> Page {
    match state.id {
        RouteId::Home => Page::Home,
        RouteId::Artists => Page::Artists,
        RouteId::ArtistDetail => match state.slug() {
            Some(slug) => Page::ArtistDetail {
                slug: slug.to_string(),
            },
            None => Page::Home,
        },
        RouteId::About => Page::About,
        RouteId::Contact => Page::Contact,
        RouteId::Login => Page::Login,
        RouteId::Signup => Page::Signup,
        RouteId::Gallery => Page::Gallery,
        RouteId::Services => Page::Services,
        RouteId::Faq => Page::Faq,
        RouteId::Testimonials => Page::Testimonials,
    }
}

/// Featured artists for the list page; the bundled artists when the backend
/// fails or has none.
pub async fn load_artist_list(api: &ArtistsApi) -> Loaded<Vec<Artist>> {
    let fetch = async {
        let envelope = api.list(&ArtistFilter::featured()).await?;
        let success = envelope.success;
        Ok::<_, ApiError>(
            envelope
                .data
                .filter(|artists| success && !artists.is_empty()),
        )
    };
    fetch_or("artist list", fetch, sample_artists).await
}

/// Data for the artist detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistDetail {
    /// `None` when neither the backend nor the bundled data knows the slug.
    pub artist: Option<Artist>,
    pub related: Vec<Artist>,
}

/// One artist by slug, falling back to the bundled artist with that slug.
pub async fn load_artist_detail(api: &ArtistsApi, slug: &str) -> Loaded<ArtistDetail> {
    let fetch = async {
        let envelope = api.get(slug).await?;
        let success = envelope.success;
        Ok::<_, ApiError>(envelope.data.filter(|_| success).map(Some))
    };
    fetch_or("artist detail", fetch, || find_sample(slug))
        .await
        .map(|artist| ArtistDetail {
            artist,
            related: related_samples(slug, RELATED_ARTISTS),
        })
}
