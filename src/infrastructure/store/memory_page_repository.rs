//! In-memory published page storage.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::PublishedOfferPage;
use crate::domain::repositories::PageRepository;
use crate::error::AppError;

/// Published page records behind a process-local lock.
pub struct InMemoryPageRepository {
    records: Arc<RwLock<Vec<PublishedOfferPage>>>,
}

impl InMemoryPageRepository {
    /// Creates a repository pre-populated with `records`.
    pub fn new(records: Vec<PublishedOfferPage>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl PageRepository for InMemoryPageRepository {
    async fn find_by_offer_id(
        &self,
        offer_id: &str,
    ) -> Result<Option<PublishedOfferPage>, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::internal("Store lock poisoned", json!({})))?;

        Ok(records.iter().find(|p| p.offer_id == offer_id).cloned())
    }
}
