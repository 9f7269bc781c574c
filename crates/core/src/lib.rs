//! Shared domain vocabulary for ArtistsHub.
//!
//! Both the HTTP backend and the client library depend on this crate, so it
//! carries no transport or database concerns: only the response envelope,
//! the error taxonomy, request payloads, roles and input validation.

pub mod artist;
pub mod auth;
pub mod contact;
pub mod envelope;
pub mod error;
pub mod roles;
pub mod slug;
pub mod types;
pub mod validation;
