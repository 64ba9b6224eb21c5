//! Published offer page lookup service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Creator, OfferRecord, PublishedOfferPage};
use crate::domain::repositories::{CreatorRepository, OfferRepository, PageRepository};
use crate::error::AppError;

/// A resolved landing page with its creator and offer context.
#[derive(Debug, Clone)]
pub struct OfferPageView {
    pub creator: Creator,
    pub offer: OfferRecord,
    pub page: PublishedOfferPage,
}

/// Service resolving published pages from (creator slug, offer slug).
pub struct CatalogService<C: CreatorRepository, O: OfferRepository, P: PageRepository> {
    creator_repository: Arc<C>,
    offer_repository: Arc<O>,
    page_repository: Arc<P>,
}

impl<C: CreatorRepository, O: OfferRepository, P: PageRepository> CatalogService<C, O, P> {
    /// Creates a new catalog service.
    pub fn new(
        creator_repository: Arc<C>,
        offer_repository: Arc<O>,
        page_repository: Arc<P>,
    ) -> Self {
        Self {
            creator_repository,
            offer_repository,
            page_repository,
        }
    }

    /// Resolves the published page for a creator/offer slug pair.
    ///
    /// The chain creator → offer → page must resolve fully; a break at
    /// any link is reported as the same not-found to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when any link is missing and
    /// [`AppError::Internal`] on store errors.
    pub async fn get_offer_page(
        &self,
        creator_slug: &str,
        offer_slug: &str,
    ) -> Result<OfferPageView, AppError> {
        let not_found = || {
            AppError::not_found(
                "Offer not found",
                json!({ "creator_slug": creator_slug, "offer_slug": offer_slug }),
            )
        };

        let creator = self
            .creator_repository
            .find_by_slug(creator_slug)
            .await?
            .ok_or_else(not_found)?;

        let offer = self
            .offer_repository
            .find_by_slug(&creator.id, offer_slug)
            .await?
            .ok_or_else(not_found)?;

        let page = self
            .page_repository
            .find_by_offer_id(&offer.id)
            .await?
            .ok_or_else(not_found)?;

        Ok(OfferPageView {
            creator,
            offer,
            page,
        })
    }

    /// Finds an offer by its opaque id, for checkout lookups.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the id is unknown.
    pub async fn get_offer_by_id(&self, offer_id: &str) -> Result<OfferRecord, AppError> {
        self.offer_repository
            .find_by_id(offer_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Offer not found", json!({ "offer_id": offer_id }))
            })
    }
}
