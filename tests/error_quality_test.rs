//! Error message quality tests
//!
//! Tests that verify error messages are helpful and distinguishable.

use smartzone_exporter::error::ExporterError;

#[test]
fn test_auth_error_message_clarity() {
    // Given: An authentication error
    let error = ExporterError::Auth("login response carried no service ticket".to_string());

    // When: Converting to string
    let message = format!("{}", error);

    // Then: Message should clearly indicate an authentication issue
    assert!(message.contains("authentication failed"));
    assert!(message.contains("service ticket"));
}

#[test]
fn test_fetch_error_names_endpoint_and_status() {
    // Given: A non-success query status
    let error = ExporterError::Fetch {
        endpoint: "/query/ap".to_string(),
        status: 503,
    };

    // When: Converting to string
    let message = format!("{}", error);

    // Then: Both the failing endpoint and the status are visible
    assert!(message.contains("/query/ap"));
    assert!(message.contains("503"));
}

#[test]
fn test_api_error_message_clarity() {
    // Given: A SmartZone API error
    let error = ExporterError::Api("logout returned status 400".to_string());

    // When: Converting to string
    let message = format!("{}", error);

    // Then: Message should clearly indicate an API issue
    assert!(message.contains("SmartZone API error"));
    assert!(message.contains("logout"));
}

#[test]
fn test_config_error_message_clarity() {
    let error = ExporterError::Config("no controllers configured".to_string());
    let message = format!("{}", error);
    assert!(message.contains("configuration error"));
    assert!(message.contains("no controllers"));
}

#[test]
fn test_json_error_is_distinguishable() {
    // Given: A malformed response body
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error = ExporterError::from(json_err);

    let message = format!("{}", error);
    assert!(message.contains("JSON error"));
}
