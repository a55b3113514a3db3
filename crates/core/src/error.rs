use thiserror::Error;

use crate::collections::CollectionError;
use crate::model::{ParseArcanaError, ParseSpreadError};
use crate::settings::SettingsError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Collection(#[from] CollectionError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Arcana(#[from] ParseArcanaError),
    #[error(transparent)]
    Spread(#[from] ParseSpreadError),
}
