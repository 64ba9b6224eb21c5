//! DTOs for the checkout session endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::CheckoutOrder;

/// Request to create a hosted checkout session for an offer.
#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutRequest {
    #[validate(length(min = 1, message = "offer_id is required"))]
    pub offer_id: String,

    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[validate(range(exclusive_min = 0.0, message = "price must be positive"))]
    pub price: f64,

    #[validate(length(min = 1, message = "currency is required"))]
    pub currency: String,

    #[validate(length(min = 1, message = "creator_slug is required"))]
    pub creator_slug: String,

    #[validate(length(min = 1, message = "offer_slug is required"))]
    pub offer_slug: String,
}

impl CheckoutRequest {
    /// Converts the request into the service-level order.
    pub fn into_order(self) -> CheckoutOrder {
        CheckoutOrder {
            offer_id: self.offer_id,
            title: self.title,
            price: self.price,
            currency: self.currency,
            creator_slug: self.creator_slug,
            offer_slug: self.offer_slug,
        }
    }
}

/// The created session the client should redirect to.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub session_id: String,
    pub url: String,
}
