//! HTTP client for the external text-completion service.
//!
//! Wraps the Gemini `generateContent` REST endpoint behind the
//! [`CompletionClient`] seam so the assistant services can run against
//! a stub in tests. One request, one completion; no retries, no
//! conversation state.

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
pub const MODEL: &str = "gemini-2.5-flash";

/// Contract the assistant gateway depends on: given a prompt and an
/// optional system instruction, produce a completion or fail.
pub trait CompletionClient {
    /// Whether a credential is configured at all.
    fn is_configured(&self) -> bool;

    fn generate(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> impl Future<Output = Result<String, CompletionError>> + Send;
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Completion API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Completion response carried no text")]
    Empty,
}

pub struct GeminiClient {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_api_url(api_key, DEFAULT_API_URL.to_string())
    }

    pub fn with_api_url(api_key: Option<String>, api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl CompletionClient for GeminiClient {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(
        &self,
        prompt: &str,
        system_instruction: Option<&str>,
    ) -> Result<String, CompletionError> {
        let key = self.api_key.as_deref().unwrap_or_default();
        let mut body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });
        if let Some(instruction) = system_instruction {
            body["systemInstruction"] =
                serde_json::json!({ "parts": [{ "text": instruction }] });
        }

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{MODEL}:generateContent?key={key}",
                self.api_url
            ))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();
        if text.is_empty() {
            return Err(CompletionError::Empty);
        }
        Ok(text)
    }
}
