//! Handlers for purchase recording and listing.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::purchase::{PurchaseListResponse, PurchaseRequest, PurchaseResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Records a mock purchase for an offer.
///
/// # Endpoint
///
/// `POST /api/purchase`
///
/// The offer id is recorded as given; this is the no-gateway path and
/// settles immediately as succeeded.
///
/// # Errors
///
/// Returns 400 Bad Request when a field is missing or the amount is not
/// positive.
pub async fn purchase_handler(
    State(state): State<AppState>,
    Json(payload): Json<PurchaseRequest>,
) -> Result<Json<PurchaseResponse>, AppError> {
    payload.validate()?;

    let event = state
        .purchase_service
        .record_mock_purchase(payload.offer_id, payload.amount, payload.currency)
        .await?;

    Ok(Json(PurchaseResponse {
        success: true,
        purchase_id: event.id,
    }))
}

/// Lists all recorded purchase events.
///
/// # Endpoint
///
/// `GET /api/purchases`
pub async fn purchase_list_handler(
    State(state): State<AppState>,
) -> Result<Json<PurchaseListResponse>, AppError> {
    let purchases = state.purchase_service.list_purchases().await?;

    Ok(Json(PurchaseListResponse { purchases }))
}
