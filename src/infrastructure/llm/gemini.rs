//! Google generative language API backend.
//!
//! Endpoint: `POST /v1beta/models/{model}:generateContent`. The request
//! carries one user turn with the instruction text plus any inline image
//! parts, and asks for `application/json` output. Candidate text parts
//! are concatenated into the returned string.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use crate::generation::backend::{BackendError, GenerationBackend};
use crate::generation::prompt::PromptParts;

/// Backend for Gemini-family models behind the generative language API.
#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for GeminiBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiBackend")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.len() > 6 {
                    format!("{}***", &self.api_key[..6])
                } else {
                    "***".to_string()
                },
            )
            .finish()
    }
}

impl GeminiBackend {
    /// Creates a backend against `base_url` with the given API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Builds the `generateContent` request body.
    fn build_body(prompt: &PromptParts) -> Value {
        let mut parts = vec![json!({ "text": prompt.instruction })];

        for image in &prompt.attachments {
            parts.push(json!({
                "inline_data": {
                    "mime_type": image.mime_type,
                    "data": image.data,
                }
            }));
        }

        json!({
            "contents": [{ "role": "user", "parts": parts }],
            "generationConfig": { "responseMimeType": "application/json" },
        })
    }

    /// Concatenates the text parts of the first candidate, if any.
    fn extract_text(response: &Value) -> Option<String> {
        let parts = response
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .as_array()?;

        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(&self, model: &str, prompt: &PromptParts) -> Result<String, BackendError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        );
        let body = Self::build_body(prompt);

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(BackendError::Http {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let json_resp: Value = resp.json().await?;

        Self::extract_text(&json_resp).ok_or(BackendError::MissingContent)
    }
}
