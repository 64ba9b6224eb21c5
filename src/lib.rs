//! # OfferForge
//!
//! An AI-assisted monetization service built with Axum: creators describe
//! themselves, a model call produces offer ideas and landing page copy
//! for the best one, and visitor-facing endpoints serve published pages
//! and accept (mock or gateway) payments.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Generation Layer** ([`generation`]) - The LLM-response contract and
//!   validation pipeline: prompt building, one-shot model failover,
//!   normalization, and schema enforcement
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory store, model
//!   backend, and payment gateway integrations
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Runs in fixture mode with a seeded demo catalog; no keys required
//! cargo run
//!
//! # Live generation
//! export GENERATION_MODE="live"
//! export GOOGLE_API_KEY="..."
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod generation;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CatalogService, CheckoutService, OfferService, PurchaseService,
    };
    pub use crate::domain::entities::{AiResponse, UserInput};
    pub use crate::error::AppError;
    pub use crate::generation::pipeline::OfferPipeline;
    pub use crate::state::AppState;
}
