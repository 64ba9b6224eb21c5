//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract
//! data access following the Repository pattern. Concrete implementations
//! live in `crate::infrastructure::store`.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - The in-memory store implements them behind application state, so a
//!   persistent backing store can be swapped in without touching handlers
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CreatorRepository`] - Creator lookup by slug
//! - [`OfferRepository`] - Offer lookup by slug and id
//! - [`PageRepository`] - Published landing page lookup
//! - [`PurchaseRepository`] - Append-only purchase log

pub mod creator_repository;
pub mod offer_repository;
pub mod page_repository;
pub mod purchase_repository;

pub use creator_repository::CreatorRepository;
pub use offer_repository::OfferRepository;
pub use page_repository::PageRepository;
pub use purchase_repository::PurchaseRepository;

#[cfg(test)]
pub use creator_repository::MockCreatorRepository;
#[cfg(test)]
pub use offer_repository::MockOfferRepository;
#[cfg(test)]
pub use page_repository::MockPageRepository;
#[cfg(test)]
pub use purchase_repository::MockPurchaseRepository;
