//! Business logic services for the application layer.

pub mod catalog_service;
pub mod checkout_service;
pub mod offer_service;
pub mod purchase_service;

pub use catalog_service::{CatalogService, OfferPageView};
pub use checkout_service::{CheckoutOrder, CheckoutService};
pub use offer_service::OfferService;
pub use purchase_service::PurchaseService;
