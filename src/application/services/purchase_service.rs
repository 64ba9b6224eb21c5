//! Purchase recording service.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{PaymentMode, PurchaseEvent, PurchaseStatus};
use crate::domain::repositories::PurchaseRepository;
use crate::error::AppError;
use crate::utils::id::generate_id;

/// Service appending purchase events to the store.
///
/// Mock purchases settle immediately as succeeded; the offer id is taken
/// at face value and not cross-checked against the catalog.
pub struct PurchaseService<R: PurchaseRepository> {
    purchase_repository: Arc<R>,
}

impl<R: PurchaseRepository> PurchaseService<R> {
    /// Creates a new purchase service.
    pub fn new(purchase_repository: Arc<R>) -> Self {
        Self {
            purchase_repository,
        }
    }

    /// Records a mock purchase as succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn record_mock_purchase(
        &self,
        offer_id: String,
        amount: f64,
        currency: String,
    ) -> Result<PurchaseEvent, AppError> {
        let event = PurchaseEvent {
            id: generate_id("purchase"),
            offer_id,
            amount,
            currency,
            status: PurchaseStatus::Succeeded,
            mode: PaymentMode::Mock,
            timestamp: Utc::now(),
            checkout_session_id: None,
        };

        tracing::info!(
            purchase_id = %event.id,
            offer_id = %event.offer_id,
            amount = event.amount,
            "purchase recorded"
        );

        self.purchase_repository.append(event).await
    }

    /// Lists all recorded purchase events.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list_purchases(&self) -> Result<Vec<PurchaseEvent>, AppError> {
        self.purchase_repository.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockPurchaseRepository;

    #[tokio::test]
    async fn test_record_mock_purchase_builds_succeeded_event() {
        let mut repo = MockPurchaseRepository::new();
        repo.expect_append()
            .withf(|event| {
                event.offer_id == "offer-demo-1"
                    && event.status == PurchaseStatus::Succeeded
                    && event.mode == PaymentMode::Mock
                    && event.checkout_session_id.is_none()
                    && event.id.starts_with("purchase-")
            })
            .times(1)
            .returning(|event| Ok(event));

        let service = PurchaseService::new(Arc::new(repo));

        let event = service
            .record_mock_purchase("offer-demo-1".to_string(), 19.0, "USD".to_string())
            .await
            .unwrap();

        assert_eq!(event.amount, 19.0);
        assert_eq!(event.currency, "USD");
    }

    #[tokio::test]
    async fn test_list_purchases_passes_through() {
        let mut repo = MockPurchaseRepository::new();
        repo.expect_list().times(1).returning(|| Ok(vec![]));

        let service = PurchaseService::new(Arc::new(repo));
        assert!(service.list_purchases().await.unwrap().is_empty());
    }
}
