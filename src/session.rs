//! The session gate: single owner of "who is signed in".
//!
//! A [`SessionGate`] is constructed explicitly and handed to whatever needs
//! it. Only [`SessionGate::login`] (or the `begin_login`/`complete_login`
//! pair it is built from) and [`SessionGate::logout`] change the user.

use crate::access::{self, Capabilities, Menu, RouteDecision};
use crate::auth::Authenticator;
use crate::constants::SESSION_STORAGE_KEY;
use crate::error::{LeadHubError, LeadHubResult};
use crate::logging::{log_debug, log_info, log_warn};
use crate::models::{Route, User};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated(User),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated(user) => Some(user),
        }
    }
}

/// Proof that a login was started at a given generation.
///
/// A ticket is only honoured if no other login was started and no logout
/// happened after it was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginTicket {
    generation: u64,
}

impl LoginTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct SessionGate<S, A> {
    store: S,
    authenticator: A,
    state: SessionState,
    loading: bool,
    generation: u64,
}

impl<S: KeyValueStore, A: Authenticator> SessionGate<S, A> {
    /// Starts anonymous and loading; call [`rehydrate`](Self::rehydrate) next.
    pub fn new(store: S, authenticator: A) -> Self {
        Self {
            store,
            authenticator,
            state: SessionState::Anonymous,
            loading: true,
            generation: 0,
        }
    }

    /// Construct and rehydrate in one step.
    pub fn restore(store: S, authenticator: A) -> Self {
        let mut gate = Self::new(store, authenticator);
        gate.rehydrate();
        gate
    }

    /// Load the persisted user, once. Absent or unreadable records leave the
    /// session anonymous; nothing is reported to the caller.
    pub fn rehydrate(&mut self) {
        if !self.loading {
            return;
        }
        self.loading = false;

        match self.read_persisted() {
            Ok(Some(user)) => {
                log_info(&format!("Restored session for {} ({})", user.email, user.role));
                self.state = SessionState::Authenticated(user);
            }
            Ok(None) => log_debug("No stored session"),
            Err(e) => log_warn(&format!("Discarding stored session: {}", e)),
        }
    }

    fn read_persisted(&self) -> LeadHubResult<Option<User>> {
        let raw = self
            .store
            .get(SESSION_STORAGE_KEY)
            .map_err(|e| LeadHubError::Deserialization(e.to_string()))?;

        raw.map(|raw| {
            serde_json::from_str::<User>(&raw)
                .map_err(|e| LeadHubError::Deserialization(e.to_string()))
        })
        .transpose()
    }

    /// Check credentials and, on success, make the result the current user.
    ///
    /// Resolves without suspending today; it is async so a networked
    /// authenticator can slot in without changing callers.
    pub async fn login(&mut self, email: &str, password: &str) -> LeadHubResult<User> {
        let ticket = self.begin_login();
        let outcome = self.authenticator.authenticate(email, password);
        self.complete_login(ticket, outcome)
    }

    pub fn begin_login(&mut self) -> LoginTicket {
        self.generation += 1;
        LoginTicket {
            generation: self.generation,
        }
    }

    /// Apply the outcome of the login started with `ticket`.
    ///
    /// Stale tickets are rejected with [`LeadHubError::StaleLogin`] whatever
    /// the outcome. Failed outcomes leave the session untouched, but the
    /// generation was already advanced by `begin_login`: a rejected attempt
    /// still makes every earlier ticket stale.
    pub fn complete_login(
        &mut self,
        ticket: LoginTicket,
        outcome: LeadHubResult<User>,
    ) -> LeadHubResult<User> {
        if ticket.generation != self.generation {
            log_debug(&format!(
                "Dropping login result for generation {} (current {})",
                ticket.generation, self.generation
            ));
            return Err(LeadHubError::StaleLogin);
        }

        let user = match outcome {
            Ok(user) => user,
            Err(e) => {
                log_info(&format!("Login rejected: {}", e));
                return Err(e);
            }
        };

        self.persist(&user);
        self.state = SessionState::Authenticated(user.clone());
        self.loading = false;
        log_info(&format!("Signed in as {} ({})", user.email, user.role));
        Ok(user)
    }

    fn persist(&mut self, user: &User) {
        let result = serde_json::to_string(user)
            .map_err(LeadHubError::from)
            .and_then(|raw| self.store.set(SESSION_STORAGE_KEY, &raw));
        if let Err(e) = result {
            log_warn(&format!("Could not persist session: {}", e));
        }
    }

    /// Sign out. Safe to call when nobody is signed in.
    pub fn logout(&mut self) {
        self.generation += 1;

        if let SessionState::Authenticated(user) = &self.state {
            log_info(&format!("Signed out {}", user.email));
        }
        self.state = SessionState::Anonymous;

        if let Err(e) = self.store.remove(SESSION_STORAGE_KEY) {
            log_warn(&format!("Could not erase stored session: {}", e));
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.user()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::of(self.current_user())
    }

    pub fn menu(&self) -> Menu {
        access::menu(self.current_user())
    }

    pub fn guard(&self, route: Route) -> RouteDecision {
        access::guard(route, self.current_user())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
