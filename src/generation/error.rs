//! Typed failure taxonomy for the offer pipeline.

use thiserror::Error;

/// Errors produced by one `generate` call.
///
/// All five kinds are terminal for a single call; nothing is retried
/// beyond the built-in model failover. `MalformedJson` and
/// `SchemaViolation` keep the raw model text so the boundary layer can
/// log it for diagnostics.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// A required input field was missing or empty. Caller's fault;
    /// raised at the boundary before any network call.
    #[error("missing required input field: {field}")]
    InvalidInput { field: &'static str },

    /// Both the primary and the fallback model call failed.
    #[error("offer generation failed on both models: {message}")]
    Upstream { message: String },

    /// The model returned nothing usable.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// The normalized model text did not parse as JSON.
    #[error("model output is not valid JSON: {reason}")]
    MalformedJson { reason: String, raw: String },

    /// The parsed JSON does not satisfy the response contract.
    #[error("model output violates the response contract: {}", violations.join("; "))]
    SchemaViolation {
        violations: Vec<String>,
        raw: String,
    },
}
