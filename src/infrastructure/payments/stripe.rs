//! Stripe hosted-checkout gateway.
//!
//! Creates sessions via `POST /v1/checkout/sessions` with form-encoded
//! parameters. Amounts are converted to cents as Stripe expects.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use super::{CheckoutSession, PaymentError, PaymentGateway, SessionRequest};

/// Gateway against the Stripe REST API.
#[derive(Clone)]
pub struct StripeCheckoutGateway {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl std::fmt::Debug for StripeCheckoutGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeCheckoutGateway")
            .field("base_url", &self.base_url)
            .field(
                "secret_key",
                &if self.secret_key.len() > 6 {
                    format!("{}***", &self.secret_key[..6])
                } else {
                    "***".to_string()
                },
            )
            .finish()
    }
}

impl StripeCheckoutGateway {
    /// Creates a gateway against the production Stripe API.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::with_base_url("https://api.stripe.com", secret_key)
    }

    /// Creates a gateway against a custom base URL (tests, stripe-mock).
    pub fn with_base_url(base_url: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Builds the form parameters for one checkout session.
    fn build_form(request: &SessionRequest) -> Vec<(String, String)> {
        // Stripe prices are integer cents.
        let unit_amount = (request.price * 100.0).round() as i64;

        vec![
            ("payment_method_types[0]".to_string(), "card".to_string()),
            (
                "line_items[0][price_data][currency]".to_string(),
                request.currency.to_lowercase(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                request.title.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                unit_amount.to_string(),
            ),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
            ("mode".to_string(), "payment".to_string()),
            ("success_url".to_string(), request.success_url.clone()),
            ("cancel_url".to_string(), request.cancel_url.clone()),
            (
                "metadata[offer_id]".to_string(),
                request.offer_id.clone(),
            ),
            (
                "metadata[creator_slug]".to_string(),
                request.creator_slug.clone(),
            ),
            (
                "metadata[offer_slug]".to_string(),
                request.offer_slug.clone(),
            ),
        ]
    }
}

#[async_trait]
impl PaymentGateway for StripeCheckoutGateway {
    async fn create_session(
        &self,
        request: &SessionRequest,
    ) -> Result<CheckoutSession, PaymentError> {
        let url = format!(
            "{}/v1/checkout/sessions",
            self.base_url.trim_end_matches('/')
        );

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&Self::build_form(request))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PaymentError::Provider {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let session: Value = resp.json().await?;

        let id = session
            .get("id")
            .and_then(Value::as_str)
            .ok_or(PaymentError::MalformedResponse("id"))?
            .to_string();
        let redirect_url = session
            .get("url")
            .and_then(Value::as_str)
            .ok_or(PaymentError::MalformedResponse("url"))?
            .to_string();

        Ok(CheckoutSession {
            id,
            url: redirect_url,
        })
    }
}
