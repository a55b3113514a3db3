//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use tarot_core::ValidationResult;
use tarot_core::collections::CollectionError;
use tarot_core::model::SpreadKind;
use tarot_core::validation::DrawCountCheck;

/// Errors emitted by `CardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CardServiceError {
    #[error("submission rejected: {0}")]
    Invalid(ValidationResult),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CardServiceError {
    /// Text suitable for the admin form's error banner.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CardServiceError::Invalid(result) => result.to_string(),
            CardServiceError::Storage(err) => err.user_message().to_owned(),
        }
    }
}

/// Errors emitted by `DrawService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DrawError {
    #[error("invalid draw count: {}", .0.message)]
    InvalidCount(DrawCountCheck),
    #[error("no cards available for spread {0}")]
    Empty(SpreadKind),
    #[error(transparent)]
    Layout(#[from] CollectionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Core(#[from] tarot_core::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
