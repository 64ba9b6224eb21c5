//! Repository trait for purchase events.

use crate::domain::entities::PurchaseEvent;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the append-only purchase log.
///
/// Events are appended once and never updated; there is no cross-request
/// coordination beyond the store's own locking.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::InMemoryPurchaseRepository`] - in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PurchaseRepository: Send + Sync {
    /// Appends a purchase event to the log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn append(&self, event: PurchaseEvent) -> Result<PurchaseEvent, AppError>;

    /// Lists all recorded purchase events in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    async fn list(&self) -> Result<Vec<PurchaseEvent>, AppError>;
}
