pub const APP_TITLE: &str = "Better Holiday Lead Hub";

/// Key under which the signed-in user is persisted.
pub const SESSION_STORAGE_KEY: &str = "erp_auth_user";

pub const SESSION_FILE: &str = ".leadhub-session.json";
pub const SESSION_FILE_ENV: &str = "LEADHUB_SESSION_FILE";
pub const PASSWORD_ENV: &str = "LEADHUB_PASSWORD";

/// Demo password shared by every directory entry and the open fallback.
pub const DEMO_PASSWORD: &str = "password123";

pub const FALLBACK_EMAIL: &str = "user@example.com";
pub const FALLBACK_NAME: &str = "User";

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
