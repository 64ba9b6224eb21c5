//! In-memory repository implementations.
//!
//! Concrete implementations of the domain repository traits backed by
//! lock-guarded vectors: lookups are linear scans, purchases are appended
//! and never updated. There is no uniqueness enforcement beyond what the
//! seed data guarantees and no cross-request transaction support.
//!
//! # Repositories
//!
//! - [`InMemoryCreatorRepository`] - Creator lookup by slug
//! - [`InMemoryOfferRepository`] - Offer lookup by slug and id
//! - [`InMemoryPageRepository`] - Published page lookup
//! - [`InMemoryPurchaseRepository`] - Append-only purchase log
//! - [`seed`] - Demo records loaded at startup

pub mod memory_creator_repository;
pub mod memory_offer_repository;
pub mod memory_page_repository;
pub mod memory_purchase_repository;
pub mod seed;

pub use memory_creator_repository::InMemoryCreatorRepository;
pub use memory_offer_repository::InMemoryOfferRepository;
pub use memory_page_repository::InMemoryPageRepository;
pub use memory_purchase_repository::InMemoryPurchaseRepository;
