use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LeadHubError;

/// Declaration order is privilege order, lowest first.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    SalesAssociate,
    TeamLead,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::TeamLead, Role::SalesAssociate];

    /// Role handed to anyone signing in through the open fallback.
    pub fn lowest() -> Self {
        Role::SalesAssociate
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::TeamLead => "team-lead",
            Role::SalesAssociate => "sales-associate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::TeamLead => "Team Lead",
            Role::SalesAssociate => "Sales Associate",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = LeadHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "team-lead" => Ok(Role::TeamLead),
            "sales-associate" => Ok(Role::SalesAssociate),
            other => Err(LeadHubError::InvalidInput(format!("unknown role '{}'", other))),
        }
    }
}

/// The session principal. Serialized as `{ email, name, role }`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl User {
    pub fn new(email: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            role,
        }
    }
}
