//! Handler for the offer generation endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::generate::GenerateRequest;
use crate::domain::entities::AiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Generates monetization offers and landing copy for a creator.
///
/// # Endpoint
///
/// `POST /api/generate`
///
/// # Request Body
///
/// ```json
/// {
///   "creator_bio": "I teach Notion productivity systems",
///   "content_links": ["https://youtube.com/@sarah"],
///   "audience_type": "students",
///   "monetization_goal": "recurring_revenue"
/// }
/// ```
///
/// # Response
///
/// The full generated aggregate: analysis, three or more offers, the
/// selected best offer index, and landing page copy for the best offer.
///
/// # Errors
///
/// - 400 Bad Request when the biography is blank
/// - 502 Bad Gateway when both model attempts fail
/// - 500 Internal Server Error when the model output breaks the contract
pub async fn generate_handler(
    State(state): State<AppState>,
    Json(payload): Json<GenerateRequest>,
) -> Result<Json<AiResponse>, AppError> {
    payload.validate()?;

    let input = payload.into_user_input();
    let response = state.offer_service.generate(&input).await?;

    Ok(Json(response))
}
