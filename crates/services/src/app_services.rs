use std::sync::Arc;

use storage::repository::Storage;
use tarot_core::{SiteSettings, SiteSettingsDraft};

use crate::card_service::CardService;
use crate::draw_service::DrawService;
use crate::error::AppServicesError;

/// Assembles site-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    settings: SiteSettings,
    card_service: Arc<CardService>,
    draw_service: Arc<DrawService>,
}

impl AppServices {
    /// Services over an empty in-memory store.
    #[must_use]
    pub fn in_memory(settings: SiteSettings) -> Self {
        Self::with_storage(settings, &Storage::in_memory())
    }

    #[must_use]
    pub fn with_storage(settings: SiteSettings, storage: &Storage) -> Self {
        let card_service = Arc::new(CardService::new(
            settings.clone(),
            Arc::clone(&storage.cards),
        ));
        let draw_service = Arc::new(DrawService::new(
            settings.clone(),
            Arc::clone(&storage.cards),
        ));
        Self {
            settings,
            card_service,
            draw_service,
        }
    }

    /// Validate a settings draft and serve the cards of a JSON export.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Core` if the settings draft is invalid.
    /// Returns `AppServicesError::Storage` if the export cannot be parsed.
    pub fn from_json_export(
        draft: SiteSettingsDraft,
        export: &str,
    ) -> Result<Self, AppServicesError> {
        let settings = draft.validate().map_err(tarot_core::Error::from)?;
        let storage = Storage::from_json_export(export)?;
        Ok(Self::with_storage(settings, &storage))
    }

    #[must_use]
    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    #[must_use]
    pub fn card_service(&self) -> Arc<CardService> {
        Arc::clone(&self.card_service)
    }

    #[must_use]
    pub fn draw_service(&self) -> Arc<DrawService> {
        Arc::clone(&self.draw_service)
    }
}
