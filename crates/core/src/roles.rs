//! Account roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const ROLE_CREATOR: &str = "creator";
pub const ROLE_CLIENT: &str = "client";

/// An account's role. Only creators hold passwords and can sign in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Creator,
    Client,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Creator => ROLE_CREATOR,
            Role::Client => ROLE_CLIENT,
        }
    }

    /// Whether accounts with this role authenticate with a password.
    pub fn requires_password(self) -> bool {
        matches!(self, Role::Creator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_CREATOR => Ok(Role::Creator),
            ROLE_CLIENT => Ok(Role::Client),
            other => Err(format!("Unknown role '{other}'")),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
