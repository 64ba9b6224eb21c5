//! Repository trait for published landing pages.

use crate::domain::entities::PublishedOfferPage;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for published page lookups.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::InMemoryPageRepository`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Finds the published page for an offer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_offer_id(&self, offer_id: &str)
    -> Result<Option<PublishedOfferPage>, AppError>;
}
