//! Integration tests for configuration and the public re-exports.

use std::time::Duration;

use kapi::{
    build_url, ApiBase, ApiKey, ApiObject, ConfigError, ErrorContext, KapiConfig, KapiError,
    PathSpec,
};
use serde_json::json;

#[test]
fn test_config_requires_key_and_base() {
    let missing_key = KapiConfig::builder()
        .api_base(ApiBase::new("https://example.com/api").unwrap())
        .build();
    assert!(matches!(
        missing_key,
        Err(ConfigError::MissingRequiredField { field: "api_key" })
    ));

    let missing_base = KapiConfig::builder()
        .api_key(ApiKey::new("k").unwrap())
        .build();
    assert!(matches!(
        missing_base,
        Err(ConfigError::MissingRequiredField { field: "api_base" })
    ));
}

#[test]
fn test_config_defaults_and_overrides() {
    let config = KapiConfig::builder()
        .api_key(ApiKey::new("k").unwrap())
        .api_base(ApiBase::new("https://example.com/api").unwrap())
        .read_timeout(Duration::from_secs(30))
        .build()
        .unwrap();

    assert_eq!(config.connect_timeout(), Duration::from_secs(5));
    assert_eq!(config.read_timeout(), Duration::from_secs(30));

    let other = config.with_api_key(ApiKey::new("other").unwrap());
    assert_eq!(other.api_key().as_ref(), "other");
    assert_eq!(config.api_key().as_ref(), "k");
    assert_eq!(other.read_timeout(), Duration::from_secs(30));
}

#[test]
fn test_quoted_values_are_unquoted() {
    assert_eq!(ApiKey::new("\"abc\"").unwrap().as_ref(), "abc");
    assert_eq!(
        ApiBase::new("\"https://example.com/api/\"").unwrap().as_ref(),
        "https://example.com/api"
    );
    assert!(matches!(ApiKey::new("\"\""), Err(ConfigError::EmptyApiKey)));
}

#[test]
fn test_api_key_is_masked_in_debug() {
    let key = ApiKey::new("super-secret").unwrap();
    assert!(!format!("{key:?}").contains("super-secret"));
}

#[test]
fn test_url_building_from_crate_root() {
    let spec = PathSpec::new().with("alice", Some("resume1"));
    assert_eq!(
        build_url("https://example.com/api", "resume", &spec, &[]),
        "https://example.com/api/resume/alice/resume1"
    );
    assert_eq!(
        build_url("https://example.com/api", "resume", &PathSpec::new(), &[]),
        "https://example.com/api/resume"
    );
}

#[test]
fn test_error_display_formats() {
    let err = KapiError::NotFound(
        ErrorContext::new("missing")
            .with_status(404)
            .with_headers([("Request-Id", "req_1")]),
    );
    assert_eq!(err.to_string(), "Request req_1: [404] missing");
    assert_eq!(err.user_message(), Some("missing"));
}

#[test]
fn test_api_object_roundtrip_through_compact_json() {
    let object = ApiObject::from(json!({"meta": {"name": "cv"}, "list": [1, 2, {"z": 0, "a": 1}]}));
    let restored = ApiObject::from_json_str(&object.json()).unwrap();
    assert_eq!(restored, object);
}
