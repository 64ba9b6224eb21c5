//! The model-output aggregate and its contract.
//!
//! [`AiResponse`] is the exact shape the model must return: an analysis,
//! at least three offers, the index of the best one, and landing page copy
//! for that offer. Constraint checks (minimum lengths, positive price,
//! index bounds) are expressed as `validator` rules so a violation reports
//! the offending field.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Kind of monetization offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OfferType {
    DigitalProduct,
    Service,
    Subscription,
}

impl OfferType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DigitalProduct => "digital_product",
            Self::Service => "service",
            Self::Subscription => "subscription",
        }
    }
}

/// Qualitative estimate of how prepared the audience is to purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadinessLevel {
    Low,
    Medium,
    High,
}

/// Settlement currency. The contract pins this to the `"USD"` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
        }
    }
}

/// The model's read on the creator's niche and audience.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AiAnalysis {
    #[validate(length(min = 1, message = "creator_niche must not be empty"))]
    pub creator_niche: String,
    #[validate(custom(function = "validate_non_empty_items"))]
    pub audience_pain_points: Vec<String>,
    pub monetization_readiness: ReadinessLevel,
}

/// A single proposed offer with price and rationale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeneratedOffer {
    pub offer_type: OfferType,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub description: String,
    pub target_audience: String,
    #[validate(range(exclusive_min = 0.0, message = "suggested_price must be positive"))]
    pub suggested_price: f64,
    pub currency: Currency,
    pub reasoning: String,
}

/// One question/answer pair on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Faq {
    #[validate(length(min = 1, message = "question must not be empty"))]
    pub question: String,
    pub answer: String,
}

/// Icon asset key for a feature card.
///
/// A fixed set rather than free-form strings, so an unknown key fails
/// validation instead of silently falling back at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureIcon {
    Chart,
    Time,
    Money,
    Users,
    Lock,
    Zap,
    Star,
    Heart,
    Shield,
    Award,
}

/// A feature card on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Feature {
    pub icon: FeatureIcon,
    #[validate(length(min = 1, message = "feature title must not be empty"))]
    pub title: String,
    pub description: String,
}

/// Marketing copy bundle for one offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LandingPageContent {
    #[validate(length(min = 1, message = "headline must not be empty"))]
    pub headline: String,
    pub subheadline: String,
    #[validate(length(min = 4, message = "at least 4 value bullets are required"))]
    pub value_bullets: Vec<String>,
    pub call_to_action: String,
    #[validate(length(min = 3, message = "at least 3 FAQs are required"))]
    #[validate(nested)]
    pub faqs: Vec<Faq>,
    /// Optional feature cards. Absent from most model output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub features: Option<Vec<Feature>>,
}

/// Root aggregate produced by one pipeline run.
///
/// Constructed fresh per request from model output (or substituted with a
/// static fixture in fixture mode); never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_best_offer_index"))]
pub struct AiResponse {
    #[validate(nested)]
    pub analysis: AiAnalysis,
    #[validate(length(min = 3, message = "at least 3 offers are required"))]
    #[validate(nested)]
    pub generated_offers: Vec<GeneratedOffer>,
    /// 0-based index of the winning offer within `generated_offers`.
    pub selected_best_offer_index: usize,
    /// Landing page copy for the winning offer. The model is trusted to
    /// keep this consistent with the selected offer; only the index bound
    /// is checked.
    #[validate(nested)]
    pub best_offer_landing_page: LandingPageContent,
}

impl AiResponse {
    /// Returns the offer selected as the best one.
    ///
    /// # Panics
    ///
    /// Panics if the index invariant was not validated first; always call
    /// through the schema validator before using this.
    pub fn best_offer(&self) -> &GeneratedOffer {
        &self.generated_offers[self.selected_best_offer_index]
    }
}

fn validate_non_empty_items(items: &[String]) -> Result<(), ValidationError> {
    if items.iter().any(|item| item.trim().is_empty()) {
        let mut err = ValidationError::new("non_empty_items");
        err.message = Some("audience_pain_points entries must not be empty".into());
        return Err(err);
    }
    Ok(())
}

fn validate_best_offer_index(response: &AiResponse) -> Result<(), ValidationError> {
    if response.selected_best_offer_index >= response.generated_offers.len() {
        let mut err = ValidationError::new("selected_best_offer_index");
        err.message = Some("selected_best_offer_index is out of bounds for generated_offers".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_offer(title: &str) -> GeneratedOffer {
        GeneratedOffer {
            offer_type: OfferType::DigitalProduct,
            title: title.to_string(),
            description: "A template pack".to_string(),
            target_audience: "Students".to_string(),
            suggested_price: 29.0,
            currency: Currency::Usd,
            reasoning: "Low-friction entry point".to_string(),
        }
    }

    fn sample_landing_page() -> LandingPageContent {
        LandingPageContent {
            headline: "Stop Building Systems".to_string(),
            subheadline: "Start getting things done".to_string(),
            value_bullets: vec![
                "Bullet one".to_string(),
                "Bullet two".to_string(),
                "Bullet three".to_string(),
                "Bullet four".to_string(),
            ],
            call_to_action: "Join now".to_string(),
            faqs: vec![
                Faq {
                    question: "Q1?".to_string(),
                    answer: "A1".to_string(),
                },
                Faq {
                    question: "Q2?".to_string(),
                    answer: "A2".to_string(),
                },
                Faq {
                    question: "Q3?".to_string(),
                    answer: "A3".to_string(),
                },
            ],
            features: None,
        }
    }

    fn sample_response() -> AiResponse {
        AiResponse {
            analysis: AiAnalysis {
                creator_niche: "Productivity systems".to_string(),
                audience_pain_points: vec!["Overwhelmed by tools".to_string()],
                monetization_readiness: ReadinessLevel::High,
            },
            generated_offers: vec![
                sample_offer("Offer A"),
                sample_offer("Offer B"),
                sample_offer("Offer C"),
            ],
            selected_best_offer_index: 1,
            best_offer_landing_page: sample_landing_page(),
        }
    }

    #[test]
    fn test_valid_response_passes() {
        assert!(sample_response().validate().is_ok());
    }

    #[test]
    fn test_best_offer_follows_index() {
        let response = sample_response();
        assert_eq!(response.best_offer().title, "Offer B");
    }

    #[test]
    fn test_two_offers_rejected() {
        let mut response = sample_response();
        response.generated_offers.truncate(2);
        response.selected_best_offer_index = 0;

        let err = response.validate().unwrap_err();
        assert!(err.to_string().contains("at least 3 offers"));
    }

    #[test]
    fn test_index_out_of_bounds_rejected() {
        let mut response = sample_response();
        response.selected_best_offer_index = 5;

        assert!(response.validate().is_err());
    }

    #[test]
    fn test_three_bullets_rejected() {
        let mut response = sample_response();
        response.best_offer_landing_page.value_bullets.pop();

        let err = response.validate().unwrap_err();
        assert!(err.to_string().contains("at least 4 value bullets"));
    }

    #[test]
    fn test_two_faqs_rejected() {
        let mut response = sample_response();
        response.best_offer_landing_page.faqs.pop();

        assert!(response.validate().is_err());
    }

    #[test]
    fn test_zero_price_rejected() {
        let mut response = sample_response();
        response.generated_offers[0].suggested_price = 0.0;

        assert!(response.validate().is_err());
    }

    #[test]
    fn test_blank_pain_point_rejected() {
        let mut response = sample_response();
        response.analysis.audience_pain_points.push("  ".to_string());

        assert!(response.validate().is_err());
    }

    #[test]
    fn test_currency_literal_usd_only() {
        let result: Result<Currency, _> = serde_json::from_str("\"EUR\"");
        assert!(result.is_err());

        let usd: Currency = serde_json::from_str("\"USD\"").unwrap();
        assert_eq!(usd, Currency::Usd);
    }

    #[test]
    fn test_offer_type_wire_names() {
        let parsed: OfferType = serde_json::from_str("\"digital_product\"").unwrap();
        assert_eq!(parsed, OfferType::DigitalProduct);
        assert_eq!(OfferType::Subscription.as_str(), "subscription");
    }

    #[test]
    fn test_unknown_feature_icon_rejected() {
        let result: Result<FeatureIcon, _> = serde_json::from_str("\"sparkles\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_features_absent_by_default() {
        let json = serde_json::to_value(sample_landing_page()).unwrap();
        assert!(json.get("features").is_none());
    }
}
