//! Gemini `generateContent` client.
//!
//! Sends one multimodal request (fixed instruction + PNG-encoded clipboard
//! image as base64 `inline_data`) and returns the trimmed response text. This
//! is the single point of external-network fragility in the pipeline: no
//! retry, no streaming, one request and one awaited response.

use base64::Engine as _;
use serde::{Deserialize, Serialize};
use snaptex_input::ClipboardImage;

use crate::config::RecognitionConfig;

/// Fixed instruction sent alongside the image.
///
/// Asks for bare LaTeX math wrapped in display-math delimiters, with no
/// document preamble, so the result can be pasted straight into a document.
const LATEX_PROMPT: &str = "\
Analyze this image, which contains mathematical content, and convert it to LaTeX code.

Requirements:
- Only output the LaTeX math code, no document structure
- Do not include \\documentclass, \\begin{document}, \\section, etc.
- Wrap the math content in $$ delimiters for display math
- If there are multiple equations, separate them appropriately
- Use proper LaTeX math notation and symbols
- Be as accurate as possible in reproducing the mathematical expressions

Output only the LaTeX code, nothing else.";

/// Errors from the recognition call.
#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    /// Transport-level failure (connection, TLS, timeout by the OS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The API answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
    /// The model returned no usable text.
    #[error("model returned an empty result")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inline_data", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    /// Base64-encoded image bytes.
    data: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Shape of the API's error body, mined for a human-readable message.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: Option<String>,
}

/// Client for the Gemini multimodal API.
pub struct RecognitionClient {
    http: reqwest::Client,
    config: RecognitionConfig,
}

impl RecognitionClient {
    pub fn new(config: RecognitionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Sends the image with the fixed instruction and returns the trimmed
    /// LaTeX text of the model's response.
    pub async fn recognize(&self, image: &ClipboardImage) -> Result<String, RecognitionError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_base_url, self.config.model
        );

        let request = build_request(&image.bytes, &image.mime_type);

        log::debug!(
            target: "snaptex_recognition::client",
            "generate_content model={} image_bytes={}",
            self.config.model,
            image.bytes.len(),
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = serde_json::from_slice::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .and_then(|e| e.message)
                .unwrap_or_else(|| String::from_utf8_lossy(&body).into_owned());
            return Err(RecognitionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        let text = extract_text(&parsed);

        if text.is_empty() {
            return Err(RecognitionError::EmptyResponse);
        }
        Ok(text)
    }
}

fn build_request(image_bytes: &[u8], mime_type: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![
                Part {
                    text: Some(LATEX_PROMPT.to_owned()),
                    inline_data: None,
                },
                Part {
                    text: None,
                    inline_data: Some(InlineData {
                        mime_type: mime_type.to_owned(),
                        data: base64::engine::general_purpose::STANDARD.encode(image_bytes),
                    }),
                },
            ],
        }],
    }
}

/// Joins the text parts of the first candidate and trims surrounding
/// whitespace. Missing candidates or text collapse to an empty string.
fn extract_text(response: &GenerateContentResponse) -> String {
    let Some(candidate) = response.candidates.first() else {
        return String::new();
    };
    let Some(content) = &candidate.content else {
        return String::new();
    };
    let joined: String = content
        .parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .collect();
    joined.trim().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = build_request(&[1, 2, 3], "image/png");
        let json = serde_json::to_value(&request).expect("should serialize");

        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], serde_json::json!(LATEX_PROMPT));
        assert!(parts[0].get("inline_data").is_none());
        assert_eq!(parts[1]["inline_data"]["mime_type"], "image/png");
        assert_eq!(parts[1]["inline_data"]["data"], "AQID");
        assert!(parts[1].get("text").is_none());
    }

    #[test]
    fn test_extract_text_trims_whitespace() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "\n  $$x^2$$  \n" }] }
            }]
        }))
        .expect("should parse");

        assert_eq!(extract_text(&response), "$$x^2$$");
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "$$a" }, { "text": "+b$$" }] }
            }]
        }))
        .expect("should parse");

        assert_eq!(extract_text(&response), "$$a+b$$");
    }

    #[test]
    fn test_extract_text_no_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(serde_json::json!({})).expect("should parse");
        assert_eq!(extract_text(&response), "");
    }

    #[test]
    fn test_prompt_requests_display_math() {
        assert!(LATEX_PROMPT.contains("$$"));
        assert!(LATEX_PROMPT.contains("documentclass"));
    }
}
