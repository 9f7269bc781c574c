//! Signup and login payloads, plus the user identity returned to clients.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::roles::Role;
use crate::types::DbId;
use crate::validation::{normalize_email, trimmed, Checks, MIN_PASSWORD_LENGTH};

/// Public identity of an account (never includes the password hash).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
}

/// `data` of a successful signup or login. `token` is `null` for client
/// accounts, which are never issued credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: UserInfo,
    pub token: Option<String>,
}

/// `data` of `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MePayload {
    pub user: UserInfo,
}

/// A validated signup, one variant per role.
///
/// On the wire this is a flat object whose `role` field selects the variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum SignupRequest {
    Creator(CreatorSignup),
    Client(ClientSignup),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorSignup {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
}

/// Intake details from a prospective client. No password: client accounts
/// cannot sign in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSignup {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profession: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_brief: Option<String>,
}

impl SignupRequest {
    pub fn role(&self) -> Role {
        match self {
            SignupRequest::Creator(_) => Role::Creator,
            SignupRequest::Client(_) => Role::Client,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            SignupRequest::Creator(c) => &c.email,
            SignupRequest::Client(c) => &c.email,
        }
    }
}

/// Signup body exactly as it arrives over the wire, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub role: String,
    pub password: Option<String>,
    pub profession: Option<String>,
    pub portfolio_url: Option<String>,
    pub project_brief: Option<String>,
}

impl SignupForm {
    /// Check every field and turn the flat form into a role-specific request.
    ///
    /// A password is only demanded (and only kept) for creators.
    pub fn validate(self) -> Result<SignupRequest, CoreError> {
        let role = self.role.trim().parse::<Role>().ok();
        let password = self.password.unwrap_or_default();

        let mut checks = Checks::new();
        checks
            .required("name", &self.name, "Name is required")
            .email("email", &self.email);
        match role {
            None => {
                checks.fail("role", "Role must be creator or client");
            }
            Some(Role::Creator) => {
                checks.min_length(
                    "password",
                    &password,
                    MIN_PASSWORD_LENGTH,
                    "Password must be at least 6 characters",
                );
            }
            Some(Role::Client) => {}
        }
        checks.finish()?;

        let name = self.name.trim().to_string();
        let email = normalize_email(&self.email);
        let profession = trimmed(self.profession);

        Ok(match role {
            Some(Role::Creator) => SignupRequest::Creator(CreatorSignup {
                name,
                email,
                password,
                profession,
            }),
            _ => SignupRequest::Client(ClientSignup {
                name,
                email,
                profession,
                portfolio_url: trimmed(self.portfolio_url),
                project_brief: trimmed(self.project_brief),
            }),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        Checks::new()
            .email("email", &self.email)
            .required("password", &self.password, "Password is required")
            .finish()
    }
}
