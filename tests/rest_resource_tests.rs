//! Integration tests for the resource types.
//!
//! These tests verify URL generation, one-or-many parsing and error
//! propagation for `Resume` and `Availability` against a mock server.

use kapi::{ApiBase, ApiKey, Availability, KapiConfig, KapiError, Parsed, Resume};
use serde_json::json;
use wiremock::matchers::{body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, KapiConfig) {
    let server = MockServer::start().await;
    let config = KapiConfig::builder()
        .api_key(ApiKey::new("test-key").unwrap())
        .api_base(ApiBase::new(format!("{}/api/", server.uri())).unwrap())
        .build()
        .unwrap();
    (server, config)
}

// === Resume ===

#[tokio::test]
async fn test_resume_list_returns_one_instance_per_element() {
    let (server, config) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/resume"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"meta": {"personality": "me", "name": "cv"}},
            {"meta": {"personality": "me", "name": "short"}},
            {"meta": {"personality": "work", "name": "cv"}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let resumes = Resume::list(&config).await.unwrap();

    assert!(resumes.is_many());
    let names: Vec<String> = resumes
        .iter()
        .map(|r| format!("{}/{}", r.personality().unwrap(), r.name().unwrap()))
        .collect();
    assert_eq!(names, vec!["me/cv", "me/short", "work/cv"]);
}

#[tokio::test]
async fn test_resume_fetch_by_name_returns_one() {
    let (server, config) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/resume/alice/resume1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"personality": "alice", "name": "resume1"},
            "resume": {"basics": {"name": "Alice"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let parsed = Resume::fetch(&config, "alice", Some("resume1")).await.unwrap();

    let resume = parsed.one().unwrap();
    assert_eq!(resume.name(), Some("resume1"));
    assert_eq!(
        resume.document().unwrap().get_str("basics.name"),
        Some("Alice")
    );
}

#[tokio::test]
async fn test_resume_fetch_without_name_lists_personality() {
    let (server, config) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/resume/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"a": 1}, {"a": 2}])))
        .expect(1)
        .mount(&server)
        .await;

    let parsed = Resume::fetch(&config, "alice", None).await.unwrap();
    assert_eq!(parsed.len(), 2);
}

#[tokio::test]
async fn test_resume_upload_posts_source_verbatim() {
    let (server, config) = setup().await;
    let src = "{\n  \"resume\": {\"basics\": {}}\n}\n";
    Mock::given(method("POST"))
        .and(path("/api/resume/me/cv"))
        .and(body_string(src))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let parsed = Resume::upload(&config, "me", "cv", src).await.unwrap();
    assert_eq!(parsed.one().unwrap().get_str("status"), Some("ok"));
}

#[tokio::test]
async fn test_resume_fetch_not_found_propagates() {
    let (server, config) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/resume/alice/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
        .mount(&server)
        .await;

    let err = Resume::fetch(&config, "alice", Some("missing"))
        .await
        .unwrap_err();

    assert!(matches!(err, KapiError::NotFound(_)));
    assert_eq!(err.user_message(), Some("Not found."));
}

#[tokio::test]
async fn test_resume_upload_refused_carries_raw_body() {
    let (server, config) = setup().await;
    let body = r#"{"detail": "invalid resume"}"#;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string(body))
        .mount(&server)
        .await;

    let err = Resume::upload(&config, "me", "cv", "{}").await.unwrap_err();

    assert!(err.is_invalid_request());
    assert_eq!(err.param(), Some(body));
}

#[tokio::test]
async fn test_invalid_json_on_success_is_decode_error() {
    let (server, config) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = Resume::list(&config).await.unwrap_err();
    assert!(matches!(err, KapiError::Decode { .. }));
}

// === Availability ===

#[tokio::test]
async fn test_availability_fetch_uses_bare_segment() {
    let (server, config) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/avail/weekdays"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "meta": {"name": "weekdays"},
            "avail": {"mon": ["09:00-17:00"]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let parsed = Availability::fetch(&config, "weekdays").await.unwrap();

    match parsed {
        Parsed::One(avail) => {
            assert_eq!(avail.name(), Some("weekdays"));
            assert_eq!(avail.get_str("avail.mon.0"), Some("09:00-17:00"));
        }
        Parsed::Many(_) => panic!("expected a single document"),
    }
}

#[tokio::test]
async fn test_availability_list_and_upload() {
    let (server, config) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/avail"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"meta": {"name": "a"}}])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/avail/weekdays"))
        .and(body_string("raw text"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let listed = Availability::list(&config).await.unwrap();
    assert_eq!(listed.len(), 1);

    let uploaded = Availability::upload(&config, "weekdays", "raw text")
        .await
        .unwrap();
    assert!(!uploaded.is_many());
}

#[tokio::test]
async fn test_server_error_propagates_from_availability() {
    let (server, config) = setup().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = Availability::list(&config).await.unwrap_err();
    assert!(matches!(err, KapiError::Server(_)));
    assert_eq!(err.to_string(), "[500] boom");
}
