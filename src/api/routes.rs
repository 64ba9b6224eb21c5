//! API route configuration.
//!
//! All endpoints are public; the original product exposes no
//! authenticated surface.

use crate::api::handlers::{
    checkout_handler, generate_handler, offer_page_handler, purchase_handler,
    purchase_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `POST /generate`                              - Generate offers + landing copy
/// - `GET  /offers/{creator_slug}/{offer_slug}`    - Published landing page view
/// - `POST /purchase`                              - Record a mock purchase
/// - `GET  /purchases`                             - List recorded purchases
/// - `POST /checkout`                              - Create a gateway checkout session
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate_handler))
        .route(
            "/offers/{creator_slug}/{offer_slug}",
            get(offer_page_handler),
        )
        .route("/purchase", post(purchase_handler))
        .route("/purchases", get(purchase_list_handler))
        .route("/checkout", post(checkout_handler))
}
