//! HTTP server initialization and runtime setup.
//!
//! Handles store seeding, backend/gateway wiring, and Axum server
//! lifecycle.

use crate::application::fixture;
use crate::application::services::{CatalogService, CheckoutService, OfferService, PurchaseService};
use crate::config::{Config, GenerationMode};
use crate::generation::pipeline::OfferPipeline;
use crate::infrastructure::llm::GeminiBackend;
use crate::infrastructure::payments::{PaymentGateway, StripeCheckoutGateway};
use crate::infrastructure::store::{
    InMemoryCreatorRepository, InMemoryOfferRepository, InMemoryPageRepository,
    InMemoryPurchaseRepository, seed,
};
use crate::routes::app_router;
use crate::state::{AppState, GenerationStatus};

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state from configuration.
///
/// Seeds the in-memory store with the demo creator/offer/page derived
/// from the canned response, and wires the model backend and payment
/// gateway according to the environment.
pub fn build_state(config: &Config) -> AppState {
    let records = seed::demo_records(&fixture::sample_response());

    let creator_repository = Arc::new(InMemoryCreatorRepository::new(records.creators));
    let offer_repository = Arc::new(InMemoryOfferRepository::new(records.offers));
    let page_repository = Arc::new(InMemoryPageRepository::new(records.pages));
    let purchase_repository = Arc::new(InMemoryPurchaseRepository::new());

    if config.generation_mode == GenerationMode::Live && config.google_api_key.is_none() {
        tracing::warn!("GOOGLE_API_KEY is missing; live generation will fail upstream");
    }

    let backend = Arc::new(GeminiBackend::new(
        config.generation_base_url.clone(),
        config.google_api_key.clone().unwrap_or_default(),
    ));
    let pipeline = OfferPipeline::new(
        backend,
        config.primary_model.clone(),
        config.fallback_model.clone(),
    );
    let offer_service = Arc::new(OfferService::new(pipeline, config.generation_mode));

    let catalog_service = Arc::new(CatalogService::new(
        creator_repository,
        offer_repository,
        page_repository,
    ));
    let purchase_service = Arc::new(PurchaseService::new(purchase_repository));

    let gateway: Option<Arc<dyn PaymentGateway>> = config
        .stripe_secret_key
        .as_ref()
        .map(|key| Arc::new(StripeCheckoutGateway::new(key.clone())) as Arc<dyn PaymentGateway>);
    let checkout_service = Arc::new(CheckoutService::new(
        gateway,
        config.public_base_url.clone(),
    ));

    AppState {
        offer_service,
        catalog_service,
        purchase_service,
        checkout_service,
        generation_status: GenerationStatus {
            mode: config.generation_mode,
            api_key_configured: config.google_api_key.is_some(),
            primary_model: config.primary_model.clone(),
            fallback_model: config.fallback_model.clone(),
        },
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if the bind address is invalid, the listener cannot
/// bind, or the server fails at runtime.
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config);
    tracing::info!("Store seeded with demo creator and offer");

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when Ctrl-C is received.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
