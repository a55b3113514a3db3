use serde::Serialize;

use crate::model::{arcana::Arcana, ids::CardId, number::CardNumber};

/// Name used when a record carries none.
pub const UNNAMED_CARD: &str = "Sin nombre";
/// Suit used when a minor-arcana record carries none.
pub const UNKNOWN_SUIT: &str = "Sin palo";
/// Rank or number used when a record carries none.
pub const NOT_AVAILABLE: &str = "N/A";

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MajorCard {
    id: CardId,
    nombre: String,
    imagem: String,
    numero: CardNumber,
}

impl MajorCard {
    #[must_use]
    pub fn new(
        id: CardId,
        nombre: impl Into<String>,
        imagem: impl Into<String>,
        numero: CardNumber,
    ) -> Self {
        Self {
            id,
            nombre: nombre.into(),
            imagem: imagem.into(),
            numero,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.id
    }

    #[must_use]
    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    #[must_use]
    pub fn imagem(&self) -> &str {
        &self.imagem
    }

    #[must_use]
    pub fn numero(&self) -> &CardNumber {
        &self.numero
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinorCard {
    id: CardId,
    nombre: String,
    imagem: String,
    palo: String,
    valor: String,
}

impl MinorCard {
    #[must_use]
    pub fn new(
        id: CardId,
        nombre: impl Into<String>,
        imagem: impl Into<String>,
        palo: impl Into<String>,
        valor: impl Into<String>,
    ) -> Self {
        Self {
            id,
            nombre: nombre.into(),
            imagem: imagem.into(),
            palo: palo.into(),
            valor: valor.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.id
    }

    #[must_use]
    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    #[must_use]
    pub fn imagem(&self) -> &str {
        &self.imagem
    }

    #[must_use]
    pub fn palo(&self) -> &str {
        &self.palo
    }

    #[must_use]
    pub fn valor(&self) -> &str {
        &self.valor
    }
}

/// A tarot card. The variant is the `arcano` discriminant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "arcano")]
pub enum Card {
    #[serde(rename = "mayor")]
    Major(MajorCard),
    #[serde(rename = "menor")]
    Minor(MinorCard),
}

impl Card {
    #[must_use]
    pub fn id(&self) -> &CardId {
        match self {
            Card::Major(c) => c.id(),
            Card::Minor(c) => c.id(),
        }
    }

    #[must_use]
    pub fn nombre(&self) -> &str {
        match self {
            Card::Major(c) => c.nombre(),
            Card::Minor(c) => c.nombre(),
        }
    }

    #[must_use]
    pub fn imagem(&self) -> &str {
        match self {
            Card::Major(c) => c.imagem(),
            Card::Minor(c) => c.imagem(),
        }
    }

    #[must_use]
    pub fn arcana(&self) -> Arcana {
        match self {
            Card::Major(_) => Arcana::Major,
            Card::Minor(_) => Arcana::Minor,
        }
    }

    /// Short label printed on the card face: the rank for minor cards,
    /// the number for major ones. Empty when the record had neither.
    #[must_use]
    pub fn identifier(&self) -> String {
        match self {
            Card::Minor(c) if !c.valor().is_empty() => c.valor().to_owned(),
            Card::Minor(_) => String::new(),
            Card::Major(c) => match c.numero() {
                CardNumber::Number(0) => String::new(),
                CardNumber::Number(n) => n.to_string(),
                CardNumber::Text(s) => s.clone(),
            },
        }
    }

    #[must_use]
    pub fn arcana_label(&self) -> &'static str {
        self.arcana().label()
    }

    #[must_use]
    pub fn as_major(&self) -> Option<&MajorCard> {
        match self {
            Card::Major(c) => Some(c),
            Card::Minor(_) => None,
        }
    }

    #[must_use]
    pub fn as_minor(&self) -> Option<&MinorCard> {
        match self {
            Card::Minor(c) => Some(c),
            Card::Major(_) => None,
        }
    }
}

impl From<MajorCard> for Card {
    fn from(card: MajorCard) -> Self {
        Card::Major(card)
    }
}

impl From<MinorCard> for Card {
    fn from(card: MinorCard) -> Self {
        Card::Minor(card)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
