use crate::constants::{DEMO_PASSWORD, FALLBACK_EMAIL, FALLBACK_NAME};
use crate::error::{LeadHubError, LeadHubResult};
use crate::models::{Role, User};

use super::{normalize_email, Authenticator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

impl Credential {
    pub fn new(email: &str, password: &str, name: &str, role: Role) -> Self {
        Self {
            email: normalize_email(email),
            password: password.to_string(),
            name: name.to_string(),
            role,
        }
    }

    fn to_user(&self) -> User {
        User::new(self.email.clone(), self.name.clone(), self.role)
    }
}

/// In-memory allowlist of demo accounts, plus an optional open fallback
/// that admits any email at the lowest role when the fallback password is
/// supplied.
#[derive(Debug, Clone)]
pub struct DemoDirectory {
    credentials: Vec<Credential>,
    fallback_password: Option<String>,
}

impl DemoDirectory {
    /// The stock demo accounts with the fallback enabled.
    pub fn new() -> Self {
        Self {
            credentials: vec![
                Credential::new(
                    "admin@holidaypanda.com",
                    DEMO_PASSWORD,
                    "Admin User",
                    Role::Admin,
                ),
                Credential::new(
                    "teamlead@holidaypanda.com",
                    DEMO_PASSWORD,
                    "Team Lead User",
                    Role::TeamLead,
                ),
                Credential::new("demo@example.com", DEMO_PASSWORD, "Demo User", Role::Admin),
                Credential::new("renjith@example.com", DEMO_PASSWORD, "Renjith", Role::Admin),
            ],
            fallback_password: Some(DEMO_PASSWORD.to_string()),
        }
    }

    pub fn with_credentials(credentials: Vec<Credential>) -> Self {
        Self {
            credentials,
            fallback_password: None,
        }
    }

    pub fn with_fallback(mut self, password: &str) -> Self {
        self.fallback_password = Some(password.to_string());
        self
    }

    pub fn without_fallback(mut self) -> Self {
        self.fallback_password = None;
        self
    }

    pub fn credentials(&self) -> &[Credential] {
        &self.credentials
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback_password.is_some()
    }

    fn fallback_user(email: &str) -> User {
        let name = email
            .split('@')
            .next()
            .filter(|local| !local.is_empty())
            .unwrap_or(FALLBACK_NAME)
            .to_string();
        let email = if email.is_empty() { FALLBACK_EMAIL } else { email };
        User::new(email, name, Role::lowest())
    }
}

impl Default for DemoDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl Authenticator for DemoDirectory {
    fn authenticate(&self, email: &str, password: &str) -> LeadHubResult<User> {
        let normalized = normalize_email(email);

        if let Some(credential) = self
            .credentials
            .iter()
            .find(|c| c.email == normalized && c.password == password)
        {
            return Ok(credential.to_user());
        }

        match &self.fallback_password {
            Some(fallback) if fallback == password => Ok(Self::fallback_user(&normalized)),
            _ => Err(LeadHubError::InvalidCredentials),
        }
    }
}
