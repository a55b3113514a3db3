use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The two card families of a tarot deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    #[serde(rename = "mayor")]
    Major,
    #[serde(rename = "menor")]
    Minor,
}

impl Arcana {
    /// Resolves a raw `arcano` discriminant.
    ///
    /// Only the exact string `"menor"` selects the minor arcana; anything
    /// else, including a missing value, is treated as major.
    #[must_use]
    pub fn from_discriminant(raw: Option<&str>) -> Self {
        match raw {
            Some("menor") => Arcana::Minor,
            _ => Arcana::Major,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Arcana::Major => "mayor",
            Arcana::Minor => "menor",
        }
    }

    /// Human-readable label shown next to a card.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Arcana::Major => "Arcano Mayor",
            Arcana::Minor => "Arcano Menor",
        }
    }
}

impl fmt::Display for Arcana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown arcana: {0}")]
pub struct ParseArcanaError(pub String);

impl FromStr for Arcana {
    type Err = ParseArcanaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mayor" => Ok(Arcana::Major),
            "menor" => Ok(Arcana::Minor),
            other => Err(ParseArcanaError(other.to_owned())),
        }
    }
}
