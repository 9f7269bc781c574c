//! User entity model and DTOs.

use artistshub_core::auth::UserInfo;
use artistshub_core::roles::Role;
use artistshub_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`User::info`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    /// Present if and only if `role` is [`Role::Creator`].
    pub password_hash: Option<String>,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub profession: Option<String>,
    pub portfolio_url: Option<String>,
    pub project_brief: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub is_verified: bool,
    pub created_at: Timestamp,
}

impl User {
    /// Public identity for API responses.
    pub fn info(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            profession: self.profession.clone(),
        }
    }
}

/// DTO for creating a new user. The email must already be normalized.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub role: Role,
    pub profession: Option<String>,
    pub portfolio_url: Option<String>,
    pub project_brief: Option<String>,
}
