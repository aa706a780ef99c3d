use crate::error::{LeadHubError, ErrorContext};
use crate::leadhub_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found"
    ));

    match result.context("Failed to read session file") {
        Err(LeadHubError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read session file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected LeadHubError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied"
    ));

    let mapped = result.with_context(|| format!("Failed to write {}", "/tmp/session.json"));
    match mapped {
        Err(LeadHubError::Unknown(msg)) => {
            assert!(msg.contains("Failed to write /tmp/session.json"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected LeadHubError::Unknown"),
    }
}

#[test]
fn test_leadhub_error_macro() {
    let error = leadhub_error!(ConfigError, "bad path");
    match error {
        LeadHubError::ConfigError(msg) => assert_eq!(msg, "bad path"),
        _ => panic!("Expected LeadHubError::ConfigError"),
    }

    let error = leadhub_error!(InvalidInput, "unknown route '{}'", "/quotes");
    match error {
        LeadHubError::InvalidInput(msg) => assert_eq!(msg, "unknown route '/quotes'"),
        _ => panic!("Expected LeadHubError::InvalidInput"),
    }
}

#[test]
fn test_invalid_credentials_message_is_generic() {
    assert_eq!(LeadHubError::InvalidCredentials.to_string(), "Invalid email or password");
}
