use std::sync::Arc;

use log::debug;
use rand::Rng;
use storage::repository::CardRepository;
use tarot_core::SiteSettings;
use tarot_core::collections::{chunk, random_element_with, sample_unique_with};
use tarot_core::model::{Card, SpreadKind, filter_for_spread, map_record_to_card};
use tarot_core::validation::validate_draw_count;

use crate::error::DrawError;

/// Random draws for the reading pages.
#[derive(Clone)]
pub struct DrawService {
    settings: SiteSettings,
    cards: Arc<dyn CardRepository>,
}

impl DrawService {
    #[must_use]
    pub fn new(settings: SiteSettings, cards: Arc<dyn CardRepository>) -> Self {
        Self { settings, cards }
    }

    /// Draw `raw_count` distinct cards from the spread's pool.
    ///
    /// The count is checked against the pool size capped by the configured
    /// `max_draw`.
    ///
    /// # Errors
    ///
    /// Returns `DrawError::Empty` if the pool has no cards.
    /// Returns `DrawError::InvalidCount` if the count is rejected; the
    /// carried check holds the message and the nearest allowed value.
    /// Returns `DrawError::Storage` if the store cannot be read.
    pub async fn draw(&self, spread: SpreadKind, raw_count: &str) -> Result<Vec<Card>, DrawError> {
        let pool = self.pool(spread).await?;
        self.select(spread, &pool, raw_count, &mut rand::rng())
    }

    /// [`Self::draw`] with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// See [`Self::draw`].
    pub async fn draw_with<R: Rng + ?Sized>(
        &self,
        spread: SpreadKind,
        raw_count: &str,
        rng: &mut R,
    ) -> Result<Vec<Card>, DrawError> {
        let pool = self.pool(spread).await?;
        self.select(spread, &pool, raw_count, rng)
    }

    /// Draw and lay the cards out in rows of `per_row`.
    ///
    /// # Errors
    ///
    /// Returns `DrawError::Layout` if `per_row` is zero, otherwise see
    /// [`Self::draw`].
    pub async fn draw_in_rows(
        &self,
        spread: SpreadKind,
        raw_count: &str,
        per_row: usize,
    ) -> Result<Vec<Vec<Card>>, DrawError> {
        let drawn = self.draw(spread, raw_count).await?;
        Ok(chunk(&drawn, per_row)?)
    }

    /// Image shown for a card that has been drawn but not yet revealed.
    #[must_use]
    pub fn card_back_url(&self) -> String {
        self.settings.card_back_url()
    }

    /// One random card from the spread's pool.
    ///
    /// # Errors
    ///
    /// Returns `DrawError::Empty` if the pool has no cards.
    /// Returns `DrawError::Storage` if the store cannot be read.
    pub async fn draw_one(&self, spread: SpreadKind) -> Result<Card, DrawError> {
        let pool = self.pool(spread).await?;
        let card = random_element_with(&pool, &mut rand::rng())
            .cloned()
            .ok_or(DrawError::Empty(spread))?;
        debug!("drew {} from {spread} pool", card.id());
        Ok(card)
    }

    async fn pool(&self, spread: SpreadKind) -> Result<Vec<Card>, DrawError> {
        let records = self.cards.list_records().await?;
        let cards: Vec<Card> = records
            .iter()
            .map(|stored| map_record_to_card(stored.id.clone(), &stored.record))
            .collect();
        Ok(filter_for_spread(&cards, spread))
    }

    fn select<R: Rng + ?Sized>(
        &self,
        spread: SpreadKind,
        pool: &[Card],
        raw_count: &str,
        rng: &mut R,
    ) -> Result<Vec<Card>, DrawError> {
        if pool.is_empty() {
            return Err(DrawError::Empty(spread));
        }
        let available = pool.len().min(self.settings.max_draw());
        let check = validate_draw_count(raw_count, available);
        if !check.is_valid {
            return Err(DrawError::InvalidCount(check));
        }
        debug!(
            "drawing {} of {} cards from {spread} pool",
            check.value,
            pool.len()
        );
        Ok(sample_unique_with(pool, check.value, rng))
    }
}
