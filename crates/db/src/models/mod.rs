//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - Where the entity is mutable, an update DTO (all `Option` fields)

pub mod artist;
pub mod contact;
pub mod user;
