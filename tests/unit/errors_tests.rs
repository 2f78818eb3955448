/*!
 * Tests for error types and conversions
 */

use chat2ass::errors::{AppError, ChatError, ConfigError};

#[test]
fn test_configError_banRuleMissingField_shouldDisplayCorrectly() {
    let error = ConfigError::BanRuleMissingField("ban_users".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Ban rule source missing required field"));
    assert!(display.contains("ban_users"));
}

#[test]
fn test_configError_startAfterEnd_shouldDisplayBothTimes() {
    let error = ConfigError::StartAfterEnd { start: 100, end: 50 };
    let display = format!("{}", error);
    assert!(display.contains("100s"));
    assert!(display.contains("50s"));
}

#[test]
fn test_chatError_notFound_shouldDisplayPath() {
    let error = ChatError::NotFound("chat.json".to_string());
    assert!(error.to_string().contains("chat.json"));
}

#[test]
fn test_appError_fromConfigError_shouldWrapCorrectly() {
    let app_error: AppError = ConfigError::EmptyTimeRange(30).into();
    assert!(matches!(app_error, AppError::Config(ConfigError::EmptyTimeRange(30))));
    assert!(app_error.to_string().starts_with("Configuration error:"));
}

#[test]
fn test_appError_fromChatError_shouldWrapCorrectly() {
    let app_error: AppError = ChatError::NotFound("x.json".to_string()).into();
    assert!(matches!(app_error, AppError::Chat(_)));
}

#[test]
fn test_appError_fromIoError_shouldBecomeFileError() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let app_error: AppError = io_error.into();
    assert!(matches!(app_error, AppError::File(_)));
    assert!(app_error.to_string().contains("gone"));
}

#[test]
fn test_appError_fromAnyhow_shouldBecomeUnknown() {
    let app_error: AppError = anyhow::anyhow!("boom").into();
    assert!(matches!(app_error, AppError::Unknown(_)));
}
