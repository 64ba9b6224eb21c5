//! Seam between the pipeline and concrete model providers.

use async_trait::async_trait;
use thiserror::Error;

use crate::generation::prompt::PromptParts;

/// One failed model call.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Transport-level failure: connection refused, timeout, TLS, etc.
    #[error("request to model endpoint failed: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("model endpoint returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The provider's envelope did not contain any text candidate.
    #[error("model response envelope had no text content")]
    MissingContent,
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        BackendError::Transport(err.to_string())
    }
}

/// A generation endpoint addressed by model name.
///
/// Implementations send the instruction plus inline-image attachments,
/// requesting JSON-constrained output, and return the raw response text.
/// Failover across models is the pipeline's job, not the backend's.
///
/// # Implementations
///
/// - [`crate::infrastructure::llm::GeminiBackend`] - Google generative language API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Performs a single generation call against `model`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] on any transport, status, or envelope
    /// failure; the caller decides whether to fail over.
    async fn generate(&self, model: &str, prompt: &PromptParts) -> Result<String, BackendError>;
}
