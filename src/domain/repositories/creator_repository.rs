//! Repository trait for creator records.

use crate::domain::entities::Creator;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for creator lookups.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::InMemoryCreatorRepository`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CreatorRepository: Send + Sync {
    /// Finds a creator by their public slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Creator))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Creator>, AppError>;
}
