//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument. Uniqueness (artist slug,
//! user email) is enforced by unique indexes, so inserts surface duplicates
//! as `sqlx::Error::Database` with a unique-violation kind.

pub mod artist_repo;
pub mod contact_repo;
pub mod user_repo;

pub use artist_repo::ArtistRepo;
pub use contact_repo::ContactRepo;
pub use user_repo::UserRepo;
