//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{CatalogService, CheckoutService, OfferService, PurchaseService};
use crate::config::GenerationMode;
use crate::infrastructure::store::{
    InMemoryCreatorRepository, InMemoryOfferRepository, InMemoryPageRepository,
    InMemoryPurchaseRepository,
};

/// Catalog service over the in-memory store.
pub type StoreCatalogService =
    CatalogService<InMemoryCreatorRepository, InMemoryOfferRepository, InMemoryPageRepository>;

/// Generation configuration surfaced by the health endpoint.
#[derive(Clone)]
pub struct GenerationStatus {
    pub mode: GenerationMode,
    pub api_key_configured: bool,
    pub primary_model: String,
    pub fallback_model: String,
}

/// Application-wide shared state.
///
/// Services are Arc'd so the state clones cheaply per request; the
/// repositories behind them are injected at startup, never global.
#[derive(Clone)]
pub struct AppState {
    pub offer_service: Arc<OfferService>,
    pub catalog_service: Arc<StoreCatalogService>,
    pub purchase_service: Arc<PurchaseService<InMemoryPurchaseRepository>>,
    pub checkout_service: Arc<CheckoutService>,
    pub generation_status: GenerationStatus,
}
