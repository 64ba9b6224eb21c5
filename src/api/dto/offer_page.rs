//! DTOs for the published offer page endpoint.

use serde::Serialize;

use crate::application::services::OfferPageView;
use crate::domain::entities::LandingPageContent;

/// Combined view served to the visitor-facing landing page.
#[derive(Debug, Serialize)]
pub struct OfferPageResponse {
    pub creator: CreatorSummary,
    pub offer: OfferSummary,
    pub page: LandingPageContent,
}

/// Public subset of the creator record.
#[derive(Debug, Serialize)]
pub struct CreatorSummary {
    pub name: String,
    pub slug: String,
}

/// Purchase-relevant subset of the offer record.
#[derive(Debug, Serialize)]
pub struct OfferSummary {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub currency: String,
}

impl From<OfferPageView> for OfferPageResponse {
    fn from(view: OfferPageView) -> Self {
        Self {
            creator: CreatorSummary {
                name: view.creator.name,
                slug: view.creator.slug,
            },
            offer: OfferSummary {
                id: view.offer.id,
                title: view.offer.info.title,
                price: view.offer.price,
                currency: view.offer.currency,
            },
            page: view.page.content,
        }
    }
}
