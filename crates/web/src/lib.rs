//! ArtistsHub client library.
//!
//! Models the single-page client: hash routing, a REST client with bearer
//! token injection, typed resource facades, the session context and the
//! page data loaders that fall back to bundled sample artists.

pub mod api;
pub mod config;
pub mod fallback;
pub mod http;
pub mod models;
pub mod pages;
pub mod router;
pub mod sample;
pub mod session;
pub mod storage;
