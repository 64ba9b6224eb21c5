//! Offer generation service.

use crate::application::fixture;
use crate::config::GenerationMode;
use crate::domain::entities::{AiResponse, UserInput};
use crate::error::AppError;
use crate::generation::pipeline::{OfferPipeline, ensure_required_input};

/// Service wrapping the offer pipeline behind the configured mode.
///
/// In `Fixture` mode the canned response is served without touching the
/// network; `Live` mode runs the full pipeline. The input precondition
/// is enforced in both modes, before anything else happens.
pub struct OfferService {
    pipeline: OfferPipeline,
    mode: GenerationMode,
}

impl OfferService {
    /// Creates a new offer service.
    pub fn new(pipeline: OfferPipeline, mode: GenerationMode) -> Self {
        Self { pipeline, mode }
    }

    /// Generates offer ideas and landing copy for one creator input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the biography is blank, and
    /// the mapped pipeline error (upstream / invalid model output) in
    /// live mode.
    pub async fn generate(&self, input: &UserInput) -> Result<AiResponse, AppError> {
        ensure_required_input(input)?;

        match self.mode {
            GenerationMode::Fixture => {
                tracing::debug!("serving canned response (fixture mode)");
                Ok(fixture::sample_response())
            }
            GenerationMode::Live => Ok(self.pipeline.generate(input).await?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{AudienceType, MonetizationGoal};
    use crate::generation::backend::MockGenerationBackend;
    use std::sync::Arc;

    fn test_input(bio: &str) -> UserInput {
        UserInput::new(
            bio.to_string(),
            vec![],
            AudienceType::General,
            MonetizationGoal::QuickCash,
        )
    }

    fn service(backend: MockGenerationBackend, mode: GenerationMode) -> OfferService {
        let pipeline = OfferPipeline::new(
            Arc::new(backend),
            "model-primary".to_string(),
            "model-fallback".to_string(),
        );
        OfferService::new(pipeline, mode)
    }

    #[tokio::test]
    async fn test_fixture_mode_never_calls_the_backend() {
        let mut backend = MockGenerationBackend::new();
        backend.expect_generate().times(0);

        let result = service(backend, GenerationMode::Fixture)
            .generate(&test_input("I teach Notion systems"))
            .await;

        assert_eq!(result.unwrap().generated_offers.len(), 3);
    }

    #[tokio::test]
    async fn test_blank_bio_rejected_in_both_modes() {
        for mode in [GenerationMode::Fixture, GenerationMode::Live] {
            let mut backend = MockGenerationBackend::new();
            backend.expect_generate().times(0);

            let result = service(backend, mode).generate(&test_input("  ")).await;

            assert!(matches!(
                result.unwrap_err(),
                AppError::Validation { .. }
            ));
        }
    }

    #[tokio::test]
    async fn test_live_mode_upstream_failure_maps_to_upstream() {
        let mut backend = MockGenerationBackend::new();
        backend.expect_generate().times(2).returning(|_, _| {
            Err(crate::generation::backend::BackendError::Transport(
                "connection refused".to_string(),
            ))
        });

        let result = service(backend, GenerationMode::Live)
            .generate(&test_input("I teach Notion systems"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Upstream { .. }));
    }
}
