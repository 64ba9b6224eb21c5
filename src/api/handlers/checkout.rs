//! Handler for checkout session creation.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, header},
};
use validator::Validate;

use crate::api::dto::checkout::{CheckoutRequest, CheckoutResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a hosted checkout session for an offer.
///
/// # Endpoint
///
/// `POST /api/checkout`
///
/// Redirect URLs are derived from the request `Origin` header so the
/// visitor returns to the page they came from; without one, the
/// configured public base URL is used.
///
/// # Errors
///
/// - 403 Forbidden when card payments are not configured
/// - 400 Bad Request when a field is missing
/// - 502 Bad Gateway when the payment provider call fails
pub async fn checkout_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, AppError> {
    payload.validate()?;

    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok());

    let session = state
        .checkout_service
        .create_session(payload.into_order(), origin)
        .await?;

    Ok(Json(CheckoutResponse {
        session_id: session.id,
        url: session.url,
    }))
}
