use std::env;
use std::path::PathBuf;

use crate::constants::{PASSWORD_ENV, SESSION_FILE, SESSION_FILE_ENV};
use crate::error::LeadHubResult;
use crate::leadhub_error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub session_file: PathBuf,
}

impl Config {
    /// Read configuration from the environment.
    pub fn load() -> Self {
        Self {
            session_file: resolve_session_file(
                env::var(SESSION_FILE_ENV).ok(),
                dirs::home_dir(),
            ),
        }
    }

    /// The session file must be a file path; an existing directory is rejected.
    pub fn validate(&self) -> LeadHubResult<()> {
        if self.session_file.is_dir() {
            return Err(leadhub_error!(
                ConfigError,
                "{} is a directory; set {} to a file path",
                self.session_file.display(),
                SESSION_FILE_ENV
            ));
        }
        Ok(())
    }
}

/// Explicit override first, then the home directory, then the working directory.
pub fn resolve_session_file(override_path: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path.filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }

    home_dir
        .map(|home| home.join(SESSION_FILE))
        .unwrap_or_else(|| PathBuf::from(SESSION_FILE))
}

pub fn password_from_env() -> Option<String> {
    env::var(PASSWORD_ENV).ok().filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::LeadHubError;

    #[test]
    fn override_wins_over_home() {
        let path =
            resolve_session_file(Some("/tmp/s.json".into()), Some(PathBuf::from("/home/a")));
        assert_eq!(path, PathBuf::from("/tmp/s.json"));
    }

    #[test]
    fn blank_override_is_ignored() {
        let path = resolve_session_file(Some("  ".into()), Some(PathBuf::from("/home/a")));
        assert_eq!(path, PathBuf::from("/home/a").join(SESSION_FILE));
    }

    #[test]
    fn falls_back_to_working_directory() {
        assert_eq!(resolve_session_file(None, None), PathBuf::from(SESSION_FILE));
    }

    #[test]
    fn directory_session_file_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            session_file: dir.path().to_path_buf(),
        };
        match config.validate() {
            Err(LeadHubError::ConfigError(msg)) => assert!(msg.contains(SESSION_FILE_ENV)),
            other => panic!("Expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn missing_session_file_is_valid() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            session_file: dir.path().join("not-yet.json"),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn password_is_read_from_env_when_set() {
        env::set_var(PASSWORD_ENV, "from-env-secret");
        let read = password_from_env();
        env::set_var(PASSWORD_ENV, "");
        let blank = password_from_env();
        env::remove_var(PASSWORD_ENV);

        assert_eq!(read.as_deref(), Some("from-env-secret"));
        assert_eq!(blank, None);
        assert_eq!(password_from_env(), None);
    }
}
