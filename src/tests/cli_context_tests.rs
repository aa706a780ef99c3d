use crate::cli_context::CliContextBuilder;
use crate::auth::DemoDirectory;
use crate::constants::DEMO_PASSWORD;
use crate::error::LeadHubError;
use crate::models::Role;
use tempfile::TempDir;

#[test]
fn test_cli_context_builder_uses_session_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let context = CliContextBuilder::new().with_session_file(&path).build().unwrap();

    assert_eq!(context.config().session_file, path);
    assert!(!context.gate().is_loading());
    assert!(!context.gate().is_authenticated());
}

#[test]
fn test_require_user_without_session() {
    let dir = TempDir::new().unwrap();
    let context = CliContextBuilder::new()
        .with_session_file(dir.path().join("session.json"))
        .build()
        .unwrap();

    assert!(matches!(context.require_user(), Err(LeadHubError::NotSignedIn)));
}

#[tokio::test]
async fn test_session_carries_over_to_next_context() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");

    let mut first = CliContextBuilder::new().with_session_file(&path).build().unwrap();
    let user = first
        .gate_mut()
        .login("teamlead@holidaypanda.com", DEMO_PASSWORD)
        .await
        .unwrap();

    let second = CliContextBuilder::new().with_session_file(&path).build().unwrap();
    assert_eq!(second.require_user().unwrap(), &user);
    assert_eq!(second.gate().current_user().unwrap().role, Role::TeamLead);
}

#[tokio::test]
async fn test_custom_directory() {
    let dir = TempDir::new().unwrap();
    let mut context = CliContextBuilder::new()
        .with_session_file(dir.path().join("session.json"))
        .with_directory(DemoDirectory::new().without_fallback())
        .build()
        .unwrap();

    let err = context.gate_mut().login("random@x.com", DEMO_PASSWORD).await.unwrap_err();
    assert!(matches!(err, LeadHubError::InvalidCredentials));
}

#[test]
fn test_directory_session_file_fails_to_build() {
    let dir = TempDir::new().unwrap();
    let result = CliContextBuilder::new().with_session_file(dir.path()).build();

    assert!(matches!(result, Err(LeadHubError::ConfigError(_))));
}
