use std::sync::Arc;

use log::{debug, info, warn};
use storage::repository::{CardRepository, StoredRecord};
use tarot_core::image::PLACEHOLDER_IMAGE;
use tarot_core::model::{
    Card, CardId, Catalog, DetailedCard, map_record_to_card, map_record_to_detailed_card,
};
use tarot_core::validation::validate_submission;
use tarot_core::{SiteSettings, Submission};
use uuid::Uuid;

use crate::error::CardServiceError;

/// Reads cards for listings and detail pages, and applies admin edits.
#[derive(Clone)]
pub struct CardService {
    settings: SiteSettings,
    cards: Arc<dyn CardRepository>,
}

impl CardService {
    #[must_use]
    pub fn new(settings: SiteSettings, cards: Arc<dyn CardRepository>) -> Self {
        Self { settings, cards }
    }

    #[must_use]
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Every card in the store, in id order.
    ///
    /// # Errors
    ///
    /// Returns `CardServiceError::Storage` if the store cannot be read.
    pub async fn list_cards(&self) -> Result<Vec<Card>, CardServiceError> {
        let records = self.cards.list_records().await?;
        Ok(records.iter().map(to_card).collect())
    }

    /// # Errors
    ///
    /// Returns `CardServiceError::Storage` (`NotFound` when the id is unknown).
    pub async fn get_card(&self, id: &CardId) -> Result<Card, CardServiceError> {
        let stored = self.cards.get_record(id).await?;
        Ok(to_card(&stored))
    }

    /// # Errors
    ///
    /// Returns `CardServiceError::Storage` (`NotFound` when the id is unknown).
    pub async fn get_card_detail(&self, id: &CardId) -> Result<DetailedCard, CardServiceError> {
        let stored = self.cards.get_record(id).await?;
        Ok(map_record_to_detailed_card(stored.id, &stored.record))
    }

    /// Full deck listing for the index page.
    ///
    /// # Errors
    ///
    /// Returns `CardServiceError::Storage` if the store cannot be read.
    pub async fn catalog(&self) -> Result<Catalog, CardServiceError> {
        let cards = self.list_cards().await?;
        let catalog = Catalog::build(&cards);
        debug!(
            "built catalog: {} majors, {} suits, {} cards",
            catalog.majors.len(),
            catalog.suits.len(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// Delivery URL for a card's artwork under the current settings.
    #[must_use]
    pub fn card_image_url(&self, card: &Card) -> String {
        // The mapper fills missing images with the built-in placeholder;
        // let the configured one take over instead.
        let raw = Some(card.imagem()).filter(|img| *img != PLACEHOLDER_IMAGE);
        self.settings.card_image_url(card.nombre(), raw)
    }

    /// Validate and store a new card under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `CardServiceError::Invalid` if the form does not validate.
    /// Returns `CardServiceError::Storage` if persistence fails.
    pub async fn create_card(&self, submission: &Submission) -> Result<CardId, CardServiceError> {
        check(submission)?;
        let id = CardId::new(Uuid::new_v4().to_string());
        self.cards
            .upsert_record(&id, &submission.to_record())
            .await?;
        info!("created card {id}");
        Ok(id)
    }

    /// Validate and replace an existing card.
    ///
    /// # Errors
    ///
    /// Returns `CardServiceError::Invalid` if the form does not validate.
    /// Returns `CardServiceError::Storage` (`NotFound` when the id is unknown).
    pub async fn update_card(
        &self,
        id: &CardId,
        submission: &Submission,
    ) -> Result<(), CardServiceError> {
        check(submission)?;
        self.cards.get_record(id).await?;
        self.cards
            .upsert_record(id, &submission.to_record())
            .await?;
        info!("updated card {id}");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CardServiceError::Storage` (`NotFound` when the id is unknown).
    pub async fn delete_card(&self, id: &CardId) -> Result<(), CardServiceError> {
        self.cards.delete_record(id).await?;
        info!("deleted card {id}");
        Ok(())
    }
}

fn to_card(stored: &StoredRecord) -> Card {
    map_record_to_card(stored.id.clone(), &stored.record)
}

fn check(submission: &Submission) -> Result<(), CardServiceError> {
    let result = validate_submission(submission);
    if result.is_valid {
        return Ok(());
    }
    warn!("rejected card submission: {result}");
    Err(CardServiceError::Invalid(result))
}
