//! Published landing page record.

use serde::Serialize;

use crate::domain::entities::ai_response::LandingPageContent;

/// A landing page published for one offer, addressable by slug.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublishedOfferPage {
    pub id: String,
    pub offer_id: String,
    pub slug: String,
    pub content: LandingPageContent,
}

impl PublishedOfferPage {
    /// Creates a new published page record.
    pub fn new(id: String, offer_id: String, slug: String, content: LandingPageContent) -> Self {
        Self {
            id,
            offer_id,
            slug,
            content,
        }
    }
}
