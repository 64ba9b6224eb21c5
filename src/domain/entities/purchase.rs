//! Purchase event record.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Settlement outcome of a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Succeeded,
    Failed,
    Pending,
}

/// Which payment path produced the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    Mock,
    Stripe,
}

/// One recorded purchase. Created once, never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseEvent {
    pub id: String,
    pub offer_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: PurchaseStatus,
    pub mode: PaymentMode,
    pub timestamp: DateTime<Utc>,
    /// Set only for gateway-settled purchases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout_session_id: Option<String>,
}
