//! The offer pipeline orchestrator.
//!
//! Owns the full sequence for one generation request: build prompt →
//! invoke model (with one-shot failover) → normalize → parse → validate.
//! All-or-nothing per call; the only side effect is the outbound model
//! call. Holds no state between invocations.

use std::sync::Arc;

use crate::domain::entities::{AiResponse, UserInput};
use crate::generation::backend::GenerationBackend;
use crate::generation::error::GenerationError;
use crate::generation::normalize::strip_code_fence;
use crate::generation::prompt::{PromptParts, build_prompt};
use crate::generation::schema::validate_response;

/// Checks the pipeline's input precondition: a non-blank biography.
///
/// Called at the boundary before the pipeline runs, so an invalid input
/// never triggers a network call. The goal and audience enums are
/// guaranteed present by deserialization.
pub fn ensure_required_input(input: &UserInput) -> Result<(), GenerationError> {
    if input.creator_bio.trim().is_empty() {
        return Err(GenerationError::InvalidInput {
            field: "creator_bio",
        });
    }
    Ok(())
}

/// Composes prompt building, model invocation, normalization, and schema
/// validation into `generate`.
pub struct OfferPipeline {
    backend: Arc<dyn GenerationBackend>,
    primary_model: String,
    fallback_model: String,
}

impl OfferPipeline {
    /// Creates a pipeline over a backend and its model pair.
    pub fn new(
        backend: Arc<dyn GenerationBackend>,
        primary_model: String,
        fallback_model: String,
    ) -> Self {
        Self {
            backend,
            primary_model,
            fallback_model,
        }
    }

    /// Runs one generation request end to end.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::Upstream`] when both model attempts fail
    /// - [`GenerationError::EmptyResponse`] when the model returns nothing usable
    /// - [`GenerationError::MalformedJson`] when the text does not parse
    /// - [`GenerationError::SchemaViolation`] when the parsed JSON breaks the contract
    pub async fn generate(&self, input: &UserInput) -> Result<AiResponse, GenerationError> {
        let prompt = build_prompt(input);

        let raw = self.invoke_with_failover(&prompt).await?;

        if raw.trim().is_empty() {
            metrics::counter!("offer_generation_total", "outcome" => "empty").increment(1);
            return Err(GenerationError::EmptyResponse);
        }

        let cleaned = strip_code_fence(&raw);

        let value: serde_json::Value = serde_json::from_str(cleaned).map_err(|e| {
            metrics::counter!("offer_generation_total", "outcome" => "malformed").increment(1);
            GenerationError::MalformedJson {
                reason: e.to_string(),
                raw: raw.clone(),
            }
        })?;

        let response = validate_response(value).map_err(|violations| {
            metrics::counter!("offer_generation_total", "outcome" => "schema_violation")
                .increment(1);
            GenerationError::SchemaViolation {
                violations,
                raw: raw.clone(),
            }
        })?;

        metrics::counter!("offer_generation_total", "outcome" => "success").increment(1);
        Ok(response)
    }

    /// Calls the primary model, and on any failure retries the whole
    /// request exactly once against the fallback model. No backoff, no
    /// further attempts.
    async fn invoke_with_failover(&self, prompt: &PromptParts) -> Result<String, GenerationError> {
        let primary_err = match self.backend.generate(&self.primary_model, prompt).await {
            Ok(text) => return Ok(text),
            Err(e) => e,
        };

        tracing::warn!(
            model = %self.primary_model,
            fallback = %self.fallback_model,
            error = %primary_err,
            "primary model failed, attempting fallback"
        );
        metrics::counter!("offer_generation_failover_total").increment(1);

        self.backend
            .generate(&self.fallback_model, prompt)
            .await
            .map_err(|fallback_err| {
                metrics::counter!("offer_generation_total", "outcome" => "upstream").increment(1);
                GenerationError::Upstream {
                    message: format!(
                        "primary ({}): {primary_err}; fallback ({}): {fallback_err}",
                        self.primary_model, self.fallback_model
                    ),
                }
            })
    }
}
