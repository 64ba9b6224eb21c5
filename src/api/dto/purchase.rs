//! DTOs for the purchase endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::PurchaseEvent;

/// Request to record a mock purchase.
#[derive(Debug, Deserialize, Validate)]
pub struct PurchaseRequest {
    #[validate(length(min = 1, message = "offer_id is required"))]
    pub offer_id: String,

    #[validate(range(exclusive_min = 0.0, message = "amount must be positive"))]
    pub amount: f64,

    #[validate(length(min = 1, message = "currency is required"))]
    pub currency: String,
}

/// Acknowledgement of a recorded purchase.
#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub success: bool,
    pub purchase_id: String,
}

/// All recorded purchase events.
#[derive(Debug, Serialize)]
pub struct PurchaseListResponse {
    pub purchases: Vec<PurchaseEvent>,
}
