//! Checkout session service.

use std::sync::Arc;

use serde_json::json;

use crate::error::AppError;
use crate::infrastructure::payments::{CheckoutSession, PaymentGateway, SessionRequest};

/// Line-item data for one checkout attempt, as supplied by the caller.
#[derive(Debug, Clone)]
pub struct CheckoutOrder {
    pub offer_id: String,
    pub title: String,
    pub price: f64,
    pub currency: String,
    pub creator_slug: String,
    pub offer_slug: String,
}

/// Service delegating checkout-session creation to a payment gateway.
///
/// When no gateway is configured (no secret key in the environment) every
/// attempt is refused up front. Success and cancel URLs are derived from
/// the caller's origin, falling back to the configured public base URL.
pub struct CheckoutService {
    gateway: Option<Arc<dyn PaymentGateway>>,
    public_base_url: String,
}

impl CheckoutService {
    /// Creates a new checkout service.
    pub fn new(gateway: Option<Arc<dyn PaymentGateway>>, public_base_url: String) -> Self {
        Self {
            gateway,
            public_base_url,
        }
    }

    /// Returns whether card payments are configured.
    pub fn is_enabled(&self) -> bool {
        self.gateway.is_some()
    }

    /// Creates a hosted checkout session for an offer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when payments are not configured
    /// and [`AppError::Upstream`] when the provider call fails.
    pub async fn create_session(
        &self,
        order: CheckoutOrder,
        origin: Option<&str>,
    ) -> Result<CheckoutSession, AppError> {
        let Some(gateway) = &self.gateway else {
            return Err(AppError::forbidden(
                "Card payments are not enabled",
                json!({}),
            ));
        };

        let base = origin.unwrap_or(&self.public_base_url).trim_end_matches('/');

        let request = SessionRequest {
            success_url: format!(
                "{base}/offers/success?session_id={{CHECKOUT_SESSION_ID}}&offer_id={}",
                order.offer_id
            ),
            cancel_url: format!(
                "{base}/offers/{}/{}",
                order.creator_slug, order.offer_slug
            ),
            offer_id: order.offer_id,
            title: order.title,
            price: order.price,
            currency: order.currency,
            creator_slug: order.creator_slug,
            offer_slug: order.offer_slug,
        };

        gateway.create_session(&request).await.map_err(|e| {
            AppError::upstream(
                "Failed to create checkout session",
                json!({ "reason": e.to_string() }),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::payments::{MockPaymentGateway, PaymentError};

    fn test_order() -> CheckoutOrder {
        CheckoutOrder {
            offer_id: "offer-demo-1".to_string(),
            title: "Template Club".to_string(),
            price: 19.0,
            currency: "USD".to_string(),
            creator_slug: "demo-creator".to_string(),
            offer_slug: "life-os-template-club".to_string(),
        }
    }

    #[tokio::test]
    async fn test_disabled_service_refuses_up_front() {
        let service = CheckoutService::new(None, "http://localhost:3000".to_string());

        let err = service.create_session(test_order(), None).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_urls_derive_from_request_origin() {
        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_create_session()
            .withf(|request| {
                request.success_url.starts_with("https://offers.example/offers/success")
                    && request.cancel_url
                        == "https://offers.example/offers/demo-creator/life-os-template-club"
            })
            .times(1)
            .returning(|_| {
                Ok(CheckoutSession {
                    id: "cs_test_1".to_string(),
                    url: "https://checkout.stripe.com/pay/cs_test_1".to_string(),
                })
            });

        let service = CheckoutService::new(
            Some(Arc::new(gateway)),
            "http://localhost:3000".to_string(),
        );

        let session = service
            .create_session(test_order(), Some("https://offers.example"))
            .await
            .unwrap();
        assert_eq!(session.id, "cs_test_1");
    }

    #[tokio::test]
    async fn test_missing_origin_falls_back_to_public_base_url() {
        let mut gateway = MockPaymentGateway::new();
        gateway
            .expect_create_session()
            .withf(|request| request.cancel_url.starts_with("http://localhost:3000/offers/"))
            .times(1)
            .returning(|_| {
                Ok(CheckoutSession {
                    id: "cs_test_2".to_string(),
                    url: "https://checkout.stripe.com/pay/cs_test_2".to_string(),
                })
            });

        let service = CheckoutService::new(
            Some(Arc::new(gateway)),
            "http://localhost:3000".to_string(),
        );

        assert!(service.create_session(test_order(), None).await.is_ok());
    }

    #[tokio::test]
    async fn test_provider_failure_maps_to_upstream() {
        let mut gateway = MockPaymentGateway::new();
        gateway.expect_create_session().returning(|_| {
            Err(PaymentError::Provider {
                status: 402,
                body: "card_declined".to_string(),
            })
        });

        let service = CheckoutService::new(
            Some(Arc::new(gateway)),
            "http://localhost:3000".to_string(),
        );

        let err = service.create_session(test_order(), None).await.unwrap_err();
        assert!(matches!(err, AppError::Upstream { .. }));
    }
}
