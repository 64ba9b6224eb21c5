//! In-memory creator storage.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::Creator;
use crate::domain::repositories::CreatorRepository;
use crate::error::AppError;

/// Creator records behind a process-local lock.
///
/// Injected through application state rather than accessed as a global,
/// so tests can build isolated instances and a persistent backing store
/// can replace it behind the same trait.
pub struct InMemoryCreatorRepository {
    records: Arc<RwLock<Vec<Creator>>>,
}

impl InMemoryCreatorRepository {
    /// Creates a repository pre-populated with `records`.
    pub fn new(records: Vec<Creator>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }
}

#[async_trait]
impl CreatorRepository for InMemoryCreatorRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Creator>, AppError> {
        let records = self
            .records
            .read()
            .map_err(|_| AppError::internal("Store lock poisoned", json!({})))?;

        Ok(records.iter().find(|c| c.slug == slug).cloned())
    }
}
