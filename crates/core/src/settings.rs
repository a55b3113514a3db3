use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::image::{
    CARD_BACK_IMAGE, DEFAULT_IMAGE_WIDTH, PLACEHOLDER_IMAGE, error_fallback_directive,
    optimize_image_url_or, special_card_url,
};
use crate::validation::DECK_SIZE;

pub const MAX_IMAGE_WIDTH: u32 = 4000;

/// Validated site configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteSettings {
    image_width: u32,
    placeholder_image: String,
    card_back_image: String,
    cdn_base_url: Option<Url>,
    max_draw: usize,
}

/// Unvalidated settings, e.g. straight from a config file or environment.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteSettingsDraft {
    pub image_width: Option<u32>,
    pub placeholder_image: Option<String>,
    pub card_back_image: Option<String>,
    pub cdn_base_url: Option<String>,
    pub max_draw: Option<usize>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("image width must be between 1 and 4000")]
    InvalidImageWidth,

    #[error("placeholder image cannot be empty")]
    EmptyPlaceholder,

    #[error("card back image cannot be empty")]
    EmptyCardBack,

    #[error("invalid CDN base URL")]
    InvalidCdnBaseUrl,

    #[error("max draw must be between 1 and 78")]
    InvalidMaxDraw,
}

impl SiteSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft, filling in defaults.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` for the first field that is out of bounds.
    pub fn validate(self) -> Result<SiteSettings, SettingsError> {
        let image_width = self.image_width.unwrap_or(DEFAULT_IMAGE_WIDTH);
        if !(1..=MAX_IMAGE_WIDTH).contains(&image_width) {
            return Err(SettingsError::InvalidImageWidth);
        }

        let placeholder_image = non_blank(self.placeholder_image, PLACEHOLDER_IMAGE)
            .ok_or(SettingsError::EmptyPlaceholder)?;
        let card_back_image =
            non_blank(self.card_back_image, CARD_BACK_IMAGE).ok_or(SettingsError::EmptyCardBack)?;

        let cdn_base_url = normalize_optional(self.cdn_base_url)
            .map(|raw| parse_base_url(&raw))
            .transpose()?;

        let max_draw = self.max_draw.unwrap_or(DECK_SIZE);
        if !(1..=DECK_SIZE).contains(&max_draw) {
            return Err(SettingsError::InvalidMaxDraw);
        }

        Ok(SiteSettings {
            image_width,
            placeholder_image,
            card_back_image,
            cdn_base_url,
            max_draw,
        })
    }
}

impl SiteSettings {
    #[must_use]
    pub fn image_width(&self) -> u32 {
        self.image_width
    }

    #[must_use]
    pub fn placeholder_image(&self) -> &str {
        &self.placeholder_image
    }

    #[must_use]
    pub fn card_back_image(&self) -> &str {
        &self.card_back_image
    }

    #[must_use]
    pub fn cdn_base_url(&self) -> Option<&Url> {
        self.cdn_base_url.as_ref()
    }

    #[must_use]
    pub fn max_draw(&self) -> usize {
        self.max_draw
    }

    /// Delivery URL for a card's artwork with the configured width and
    /// placeholder.
    ///
    /// Bare storage keys (no scheme, no leading `/`) are resolved against
    /// the CDN base URL when one is configured.
    #[must_use]
    pub fn card_image_url(&self, name: &str, raw: Option<&str>) -> String {
        if let Some(url) = special_card_url(name) {
            return url.to_owned();
        }
        let resolved = raw.map(|r| self.resolve_image(r));
        optimize_image_url_or(resolved.as_deref(), self.image_width, &self.placeholder_image)
    }

    /// Delivery URL for the back of a card, shown for face-down draws.
    #[must_use]
    pub fn card_back_url(&self) -> String {
        optimize_image_url_or(
            Some(&self.card_back_image),
            self.image_width,
            &self.placeholder_image,
        )
    }

    /// `onerror` directive pointing at the configured placeholder.
    #[must_use]
    pub fn error_directive(&self) -> String {
        error_fallback_directive(Some(&self.placeholder_image))
    }

    fn resolve_image(&self, raw: &str) -> String {
        let key = raw.trim();
        match &self.cdn_base_url {
            Some(base) if is_bare_key(key) => base
                .join(key)
                .map_or_else(|_| raw.to_owned(), String::from),
            _ => raw.to_owned(),
        }
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            image_width: DEFAULT_IMAGE_WIDTH,
            placeholder_image: PLACEHOLDER_IMAGE.to_owned(),
            card_back_image: CARD_BACK_IMAGE.to_owned(),
            cdn_base_url: None,
            max_draw: DECK_SIZE,
        }
    }
}

fn is_bare_key(raw: &str) -> bool {
    !raw.is_empty() && !raw.starts_with('/') && !raw.contains("://")
}

/// Parses the CDN base and makes sure its path ends in `/` so joins append.
fn parse_base_url(raw: &str) -> Result<Url, SettingsError> {
    let mut url = Url::parse(raw).map_err(|_| SettingsError::InvalidCdnBaseUrl)?;
    if url.cannot_be_a_base() {
        return Err(SettingsError::InvalidCdnBaseUrl);
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// `None` in the draft means "use the default"; an explicit blank is rejected.
fn non_blank(value: Option<String>, default: &str) -> Option<String> {
    match value {
        None => Some(default.to_owned()),
        Some(v) => normalize_optional(Some(v)),
    }
}
