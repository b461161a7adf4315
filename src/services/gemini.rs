// src/services/gemini.rs
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Shown to the caller when the model answers with no usable text.
pub const NO_RESPONSE_PLACEHOLDER: &str = "⚠️ No response from model.";

/// Text generation seam. The real implementation talks to the Gemini API;
/// tests swap in a stub so no network is involved.
#[async_trait]
pub trait GenerateService: Send + Sync {
    async fn generate(&self, message: &str) -> Result<String>;
}

/// Gemini generateContent client.
pub struct GeminiClient {
    api_key: String,
    model: String,
    client: reqwest::Client,
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
    text: String,
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

impl GenerateContentResponse {
    /// First non-empty text part across the returned candidates, if any.
    fn first_text(&self) -> Option<String> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .find(|t| !t.is_empty())
            .map(str::to_string)
    }
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { api_key, model, client })
    }
}

#[async_trait]
impl GenerateService for GeminiClient {
    async fn generate(&self, message: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: message.to_string() }],
            }],
        };

        let url = format!("{}/{}:generateContent", API_BASE, self.model);
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send Gemini request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API error {}: {}", status, body);
        }

        let generated: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini response")?;

        Ok(text_or_placeholder(generated))
    }
}

/// Successful calls that carry no usable text still produce a reply.
fn text_or_placeholder(response: GenerateContentResponse) -> String {
    response
        .first_text()
        .unwrap_or_else(|| NO_RESPONSE_PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_candidate_text() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "hi there"}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_text().as_deref(), Some("hi there"));
    }

    #[test]
    fn empty_candidates_yield_none() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.first_text().is_none());

        let json = r#"{"candidates": [{"content": {"parts": [{"text": ""}]}}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(resp.first_text().is_none());
    }

    #[test]
    fn skips_textless_parts() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{}, {"text": "second part"}]}}
            ]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.first_text().as_deref(), Some("second part"));
    }

    #[test]
    fn placeholder_when_no_usable_text() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(text_or_placeholder(resp), NO_RESPONSE_PLACEHOLDER);

        let json = r#"{"candidates": [{"content": {"parts": [{"text": ""}]}}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(text_or_placeholder(resp), NO_RESPONSE_PLACEHOLDER);

        let json = r#"{"candidates": [{"content": {"parts": [{"text": "hi"}]}}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(text_or_placeholder(resp), "hi");
    }

    #[test]
    fn request_body_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: "hello".to_string() }],
            }],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hello");
    }
}
