//! Repository trait for published offer records.

use crate::domain::entities::OfferRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for offer lookups.
///
/// Slug uniqueness per creator is assumed, not enforced; lookups return
/// the first match.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::InMemoryOfferRepository`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OfferRepository: Send + Sync {
    /// Finds an offer by its owning creator id and offer slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_slug(
        &self,
        creator_id: &str,
        offer_slug: &str,
    ) -> Result<Option<OfferRecord>, AppError>;

    /// Finds an offer by its opaque id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn find_by_id(&self, id: &str) -> Result<Option<OfferRecord>, AppError>;
}
