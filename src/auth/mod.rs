//! Credential checks behind the session gate.
//!
//! The only implementation shipped is [`DemoDirectory`], a plaintext table of
//! demo accounts. It exists so the gate can be exercised end to end and must
//! not be mistaken for real authentication.

pub mod directory;

pub use directory::{Credential, DemoDirectory};

use crate::error::LeadHubResult;
use crate::models::User;

/// Resolves an (email, password) pair to a user.
///
/// Implementations must return [`LeadHubError::InvalidCredentials`] for every
/// rejection so callers cannot tell an unknown email from a wrong password.
///
/// [`LeadHubError::InvalidCredentials`]: crate::error::LeadHubError::InvalidCredentials
pub trait Authenticator {
    fn authenticate(&self, email: &str, password: &str) -> LeadHubResult<User>;
}

impl<A: Authenticator + ?Sized> Authenticator for &A {
    fn authenticate(&self, email: &str, password: &str) -> LeadHubResult<User> {
        (**self).authenticate(email, password)
    }
}

impl<A: Authenticator + ?Sized> Authenticator for Box<A> {
    fn authenticate(&self, email: &str, password: &str) -> LeadHubResult<User> {
        (**self).authenticate(email, password)
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
