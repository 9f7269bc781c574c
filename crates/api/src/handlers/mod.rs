//! Request handlers, one module per resource.

pub mod artists;
pub mod auth;
pub mod contact;
pub mod system;
