//! Recognition client integration tests using a mock Gemini endpoint.
//!
//! These tests exercise the full request/response cycle of
//! `RecognitionClient` against wiremock, without hitting the real API.

use snaptex_input::ClipboardImage;
use snaptex_recognition::{RecognitionClient, RecognitionConfig, RecognitionError};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_image() -> ClipboardImage {
    ClipboardImage {
        width: 2,
        height: 2,
        // PNG magic bytes are enough; the client never decodes the image
        bytes: vec![0x89, 0x50, 0x4E, 0x47],
        mime_type: "image/png".to_owned(),
        filename: "clipboard_test.png".to_owned(),
    }
}

fn client_for(server: &MockServer) -> RecognitionClient {
    let config = RecognitionConfig::new("test-key").with_base_url(server.uri());
    RecognitionClient::new(config)
}

fn generate_content_path() -> String {
    "/v1beta/models/gemini-1.5-flash:generateContent".to_owned()
}

#[tokio::test]
async fn test_recognize_returns_trimmed_text() {
    let server = MockServer::start().await;

    let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": "\n$$x^2$$\n" }] }
        }]
    }));

    Mock::given(method("POST"))
        .and(path(generate_content_path()))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .recognize(&test_image())
        .await
        .expect("recognition should succeed");

    assert_eq!(result, "$$x^2$$");
}

#[tokio::test]
async fn test_recognize_empty_text_is_an_error() {
    let server = MockServer::start().await;

    let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": "   \n  " }] }
        }]
    }));

    Mock::given(method("POST"))
        .and(path(generate_content_path()))
        .respond_with(response)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .recognize(&test_image())
        .await
        .expect_err("whitespace-only text should fail");

    assert!(matches!(err, RecognitionError::EmptyResponse));
}

#[tokio::test]
async fn test_recognize_missing_candidates_is_an_error() {
    let server = MockServer::start().await;

    let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({}));

    Mock::given(method("POST"))
        .and(path(generate_content_path()))
        .respond_with(response)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .recognize(&test_image())
        .await
        .expect_err("missing candidates should fail");

    assert!(matches!(err, RecognitionError::EmptyResponse));
}

#[tokio::test]
async fn test_recognize_api_error_carries_message() {
    let server = MockServer::start().await;

    let response = ResponseTemplate::new(400).set_body_json(serde_json::json!({
        "error": { "code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT" }
    }));

    Mock::given(method("POST"))
        .and(path(generate_content_path()))
        .respond_with(response)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .recognize(&test_image())
        .await
        .expect_err("HTTP 400 should fail");

    match err {
        RecognitionError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("API key not valid"), "got: {message}");
        }
        other => panic!("Expected RecognitionError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_recognize_server_error_without_json_body() {
    let server = MockServer::start().await;

    let response = ResponseTemplate::new(500).set_body_string("upstream exploded");

    Mock::given(method("POST"))
        .and(path(generate_content_path()))
        .respond_with(response)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .recognize(&test_image())
        .await
        .expect_err("HTTP 500 should fail");

    match err {
        RecognitionError::Api { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("upstream exploded"), "got: {message}");
        }
        other => panic!("Expected RecognitionError::Api, got {other:?}"),
    }
}

#[tokio::test]
async fn test_recognize_respects_model_override() {
    let server = MockServer::start().await;

    let response = ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": "$$y$$" }] }
        }]
    }));

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .respond_with(response)
        .expect(1)
        .mount(&server)
        .await;

    let config = RecognitionConfig::new("test-key")
        .with_base_url(server.uri())
        .with_model("gemini-2.0-flash");
    let result = RecognitionClient::new(config)
        .recognize(&test_image())
        .await
        .expect("recognition should succeed");

    assert_eq!(result, "$$y$$");
}
