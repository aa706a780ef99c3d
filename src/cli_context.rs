use std::path::PathBuf;

use crate::auth::DemoDirectory;
use crate::config::Config;
use crate::error::{LeadHubError, LeadHubResult};
use crate::models::User;
use crate::session::SessionGate;
use crate::storage::FileStore;

pub type LocalGate = SessionGate<FileStore, DemoDirectory>;

/// Central context for CLI operations: configuration plus the session gate
/// backed by the on-disk store.
pub struct CliContext {
    config: Config,
    gate: LocalGate,
}

impl CliContext {
    /// Load context from the environment and rehydrate the stored session.
    pub fn load() -> LeadHubResult<Self> {
        CliContextBuilder::new().build()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn gate(&self) -> &LocalGate {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut LocalGate {
        &mut self.gate
    }

    /// The signed-in user, or [`LeadHubError::NotSignedIn`].
    pub fn require_user(&self) -> LeadHubResult<&User> {
        self.gate.current_user().ok_or(LeadHubError::NotSignedIn)
    }
}

/// Builder for contexts with a non-default store location or directory
pub struct CliContextBuilder {
    session_file: Option<PathBuf>,
    directory: Option<DemoDirectory>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            session_file: None,
            directory: None,
        }
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }

    pub fn with_directory(mut self, directory: DemoDirectory) -> Self {
        self.directory = Some(directory);
        self
    }

    pub fn build(self) -> LeadHubResult<CliContext> {
        let mut config = Config::load();
        if let Some(path) = self.session_file {
            config.session_file = path;
        }
        config.validate()?;

        let store = FileStore::new(config.session_file.clone());
        let directory = self.directory.unwrap_or_default();
        let gate = SessionGate::restore(store, directory);

        Ok(CliContext { config, gate })
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
