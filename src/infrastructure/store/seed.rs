//! Demo records seeded into the store at startup.
//!
//! Mirrors what a creator onboarding flow would have produced: one demo
//! creator, their best generated offer published under a slug, and the
//! landing page for it.

use crate::domain::entities::{AiResponse, Creator, OfferRecord, PublishedOfferPage};
use crate::utils::id::generate_id;

/// Record sets used to pre-populate the in-memory repositories.
pub struct DemoRecords {
    pub creators: Vec<Creator>,
    pub offers: Vec<OfferRecord>,
    pub pages: Vec<PublishedOfferPage>,
}

/// Derives the demo creator/offer/page from a generated response.
///
/// The published offer is the response's selected best offer; the page
/// carries the matching landing copy under the same slug.
pub fn demo_records(response: &AiResponse) -> DemoRecords {
    let creator = Creator::new(
        "creator-demo-1".to_string(),
        "demo-creator".to_string(),
        "Sarah (Productivity Expert)".to_string(),
        "sarah@example.com".to_string(),
    );

    let offer = OfferRecord::new(
        "offer-demo-1".to_string(),
        creator.id.clone(),
        "life-os-template-club".to_string(),
        response.best_offer().clone(),
    );

    let page = PublishedOfferPage::new(
        generate_id("page"),
        offer.id.clone(),
        offer.slug.clone(),
        response.best_offer_landing_page.clone(),
    );

    DemoRecords {
        creators: vec![creator],
        offers: vec![offer],
        pages: vec![page],
    }
}
