//! In-memory offer storage.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::OfferRecord;
use crate::domain::repositories::OfferRepository;
use crate::error::AppError;

/// Offer records behind a process-local lock.
pub struct InMemoryOfferRepository {
    records: Arc<RwLock<Vec<OfferRecord>>>,
}

impl InMemoryOfferRepository {
    /// Creates a repository pre-populated with `records`.
    pub fn new(records: Vec<OfferRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl OfferRepository for InMemoryOfferRepository {
    async fn find_by_slug(
        &self,
        creator_id: &str,
        offer_slug: &str,
    ) -> Result<Option<OfferRecord>, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::internal("Store lock poisoned", json!({})))?;

        Ok(records
            .iter()
            .find(|o| o.creator_id == creator_id && o.slug == offer_slug)
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<OfferRecord>, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::internal("Store lock poisoned", json!({})))?;

        Ok(records.iter().find(|o| o.id == id).cloned())
    }
}
