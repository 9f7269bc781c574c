//! Contact inquiry payload and lifecycle status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;
use crate::validation::{normalize_email, Checks};

/// Lifecycle of a contact message. New messages are always `Pending`; the
/// other states belong to an administrative surface outside this service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    Pending,
    Read,
    Replied,
}

impl ContactStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ContactStatus::Pending => "pending",
            ContactStatus::Read => "read",
            ContactStatus::Replied => "replied",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ContactStatus::Pending),
            "read" => Ok(ContactStatus::Read),
            "replied" => Ok(ContactStatus::Replied),
            other => Err(format!("Unknown contact status '{other}'")),
        }
    }
}

impl TryFrom<String> for ContactStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Body of `POST /contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Artist the inquiry is about. Stored as given, without a lookup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<DbId>,
}

impl ContactRequest {
    /// Validate and return the request with trimmed text and a normalized email.
    pub fn validate(self) -> Result<ContactRequest, CoreError> {
        Checks::new()
            .required("name", &self.name, "Name is required")
            .email("email", &self.email)
            .required("message", &self.message, "Message is required")
            .finish()?;

        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            email: normalize_email(&self.email),
            message: self.message.trim().to_string(),
            artist_id: self.artist_id,
        })
    }
}
