//! Payment gateway abstraction and implementations.
//!
//! Follows the same pattern as the store: a trait consumed through
//! application state, implemented against the external provider. The
//! core has no involvement in payment correctness; a session either
//! comes back with a redirect URL or the attempt fails.

pub mod stripe;

use async_trait::async_trait;
use thiserror::Error;

pub use stripe::StripeCheckoutGateway;

/// A created checkout session the visitor can be redirected to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// Everything the gateway needs to price and label one session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRequest {
    pub offer_id: String,
    pub title: String,
    pub price: f64,
    pub currency: String,
    pub creator_slug: String,
    pub offer_slug: String,
    pub success_url: String,
    pub cancel_url: String,
}

/// One failed session-creation attempt.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("request to payment provider failed: {0}")]
    Transport(String),

    #[error("payment provider returned HTTP {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("payment provider response missing {0}")]
    MalformedResponse(&'static str),
}

impl From<reqwest::Error> for PaymentError {
    fn from(err: reqwest::Error) -> Self {
        PaymentError::Transport(err.to_string())
    }
}

/// Creates checkout sessions with an external payment provider.
///
/// # Implementations
///
/// - [`StripeCheckoutGateway`] - Stripe hosted checkout
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a hosted checkout session and returns its redirect URL.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentError`] on transport or provider failures.
    async fn create_session(&self, request: &SessionRequest)
    -> Result<CheckoutSession, PaymentError>;
}
