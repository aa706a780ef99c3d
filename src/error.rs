use thiserror::Error;

use crate::constants::INVALID_CREDENTIALS_MESSAGE;

#[derive(Error, Debug)]
pub enum LeadHubError {
    // Same message for unknown email and wrong password.
    #[error("{}", INVALID_CREDENTIALS_MESSAGE)]
    InvalidCredentials,

    #[error("Not signed in. Please run 'leadhub login' first.")]
    NotSignedIn,

    #[error("Login response arrived after a newer login or a logout and was discarded")]
    StaleLogin,

    #[error("Stored session could not be read: {0}")]
    Deserialization(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    TerminalError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type LeadHubResult<T> = Result<T, LeadHubError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> LeadHubResult<T>;
    fn with_context<F>(self, f: F) -> LeadHubResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> LeadHubResult<T> {
        self.map_err(|e| LeadHubError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> LeadHubResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LeadHubError::Unknown(format!("{}: {}", f(), e)))
    }
}


#[macro_export]
macro_rules! leadhub_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::LeadHubError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::LeadHubError::$error_type(format!($fmt, $($arg)*))
    };
}
