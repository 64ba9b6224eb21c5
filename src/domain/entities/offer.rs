//! Published offer record.

use serde::Serialize;

use crate::domain::entities::ai_response::GeneratedOffer;

/// A monetization offer a creator has published for sale.
///
/// `info` embeds the generated offer copy as-is; `price` and `currency`
/// are denormalized from it at publish time so the checkout path does not
/// depend on the generation types.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferRecord {
    pub id: String,
    pub creator_id: String,
    pub slug: String,
    pub info: GeneratedOffer,
    pub price: f64,
    pub currency: String,
}

impl OfferRecord {
    /// Creates an offer record from generated offer copy.
    pub fn new(id: String, creator_id: String, slug: String, info: GeneratedOffer) -> Self {
        let price = info.suggested_price;
        let currency = info.currency.as_str().to_string();
        Self {
            id,
            creator_id,
            slug,
            info,
            price,
            currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ai_response::{Currency, OfferType};

    #[test]
    fn test_offer_record_denormalizes_price_and_currency() {
        let info = GeneratedOffer {
            offer_type: OfferType::Subscription,
            title: "Template Club".to_string(),
            description: "Monthly template drops".to_string(),
            target_audience: "Professionals".to_string(),
            suggested_price: 19.0,
            currency: Currency::Usd,
            reasoning: "Recurring revenue".to_string(),
        };

        let offer = OfferRecord::new(
            "offer-demo-1".to_string(),
            "creator-demo-1".to_string(),
            "template-club".to_string(),
            info,
        );

        assert_eq!(offer.price, 19.0);
        assert_eq!(offer.currency, "USD");
        assert_eq!(offer.info.title, "Template Club");
    }
}
