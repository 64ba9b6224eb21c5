//! Handler for the published offer page endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::offer_page::OfferPageResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Serves the combined creator/offer/page view for a landing page.
///
/// # Endpoint
///
/// `GET /api/offers/{creator_slug}/{offer_slug}`
///
/// # Errors
///
/// Returns 404 Not Found when the creator, offer, or page is unknown.
pub async fn offer_page_handler(
    State(state): State<AppState>,
    Path((creator_slug, offer_slug)): Path<(String, String)>,
) -> Result<Json<OfferPageResponse>, AppError> {
    let view = state
        .catalog_service
        .get_offer_page(&creator_slug, &offer_slug)
        .await?;

    Ok(Json(view.into()))
}
