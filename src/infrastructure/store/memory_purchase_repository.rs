//! In-memory purchase log.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::PurchaseEvent;
use crate::domain::repositories::PurchaseRepository;
use crate::error::AppError;

/// Append-only purchase events behind a process-local lock.
pub struct InMemoryPurchaseRepository {
    records: Arc<RwLock<Vec<PurchaseEvent>>>,
}

impl InMemoryPurchaseRepository {
    /// Creates an empty purchase log.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryPurchaseRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PurchaseRepository for InMemoryPurchaseRepository {
    async fn append(&self, event: PurchaseEvent) -> Result<PurchaseEvent, AppError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| AppError::internal("Store lock poisoned", json!({})))?;

        records.push(event.clone());
        Ok(event)
    }

    async fn list(&self) -> Result<Vec<PurchaseEvent>, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::internal("Store lock poisoned", json!({})))?;

        Ok(records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PaymentMode, PurchaseStatus};
    use chrono::Utc;

    fn demo_event(id: &str) -> PurchaseEvent {
        PurchaseEvent {
            id: id.to_string(),
            offer_id: "offer-demo-1".to_string(),
            amount: 19.0,
            currency: "USD".to_string(),
            status: PurchaseStatus::Succeeded,
            mode: PaymentMode::Mock,
            timestamp: Utc::now(),
            checkout_session_id: None,
        }
    }

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let repo = InMemoryPurchaseRepository::new();

        repo.append(demo_event("purchase-1")).await.unwrap();
        repo.append(demo_event("purchase-2")).await.unwrap();

        let events = repo.list().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, "purchase-1");
        assert_eq!(events[1].id, "purchase-2");
    }

    #[tokio::test]
    async fn test_list_empty_log() {
        let repo = InMemoryPurchaseRepository::new();
        assert!(repo.list().await.unwrap().is_empty());
    }
}
