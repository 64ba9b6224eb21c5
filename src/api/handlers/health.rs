//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::config::GenerationMode;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Store**: Purchase log responds
/// 2. **Generation**: Fixture mode, or live mode with an API key present
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let generation_check = check_generation(&state);

    let all_healthy = store_check.status == "ok" && generation_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            store: store_check,
            generation: generation_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the store by listing the purchase log.
async fn check_store(state: &AppState) -> CheckStatus {
    match state.purchase_service.list_purchases().await {
        Ok(events) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Purchases recorded: {}", events.len())),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Store error: {}", e)),
        },
    }
}

/// Checks whether generation is usable in the configured mode.
fn check_generation(state: &AppState) -> CheckStatus {
    let status = &state.generation_status;

    match status.mode {
        GenerationMode::Fixture => CheckStatus {
            status: "ok".to_string(),
            message: Some("Fixture mode".to_string()),
        },
        GenerationMode::Live if status.api_key_configured => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!(
                "Live: {} (fallback: {})",
                status.primary_model, status.fallback_model
            )),
        },
        GenerationMode::Live => CheckStatus {
            status: "error".to_string(),
            message: Some("Live mode without GOOGLE_API_KEY".to_string()),
        },
    }
}
