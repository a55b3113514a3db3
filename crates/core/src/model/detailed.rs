use serde::Serialize;

use crate::model::{arcana::Arcana, ids::CardId, number::CardNumber};

/// Upright and reversed readings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meaning {
    pub directo: String,
    pub invertido: String,
}

/// Symbols depicted on the card and how to read them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolSet {
    pub principales: Vec<String>,
    pub interpretacion: String,
}

/// Card as shown on its detail page.
///
/// Unlike [`crate::model::Card`] this is a flat shape: `numero`, `palo` and
/// `valor` are carried as found upstream whatever the arcana.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedCard {
    id: CardId,
    nombre: String,
    arcano: Arcana,
    imagem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    numero: Option<CardNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    palo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valor: Option<String>,
    significado: Meaning,
    simbolos: SymbolSet,
    keywords: Vec<String>,
}

impl DetailedCard {
    /// Upper bound on stored keywords; extra entries are dropped.
    pub const MAX_KEYWORDS: usize = 10;

    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: CardId,
        nombre: impl Into<String>,
        arcano: Arcana,
        imagem: impl Into<String>,
        numero: Option<CardNumber>,
        palo: Option<String>,
        valor: Option<String>,
        significado: Meaning,
        simbolos: SymbolSet,
        mut keywords: Vec<String>,
    ) -> Self {
        keywords.truncate(Self::MAX_KEYWORDS);
        Self {
            id,
            nombre: nombre.into(),
            arcano,
            imagem: imagem.into(),
            numero,
            palo,
            valor,
            significado,
            simbolos,
            keywords,
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
    pub fn arcana(&self) -> Arcana {
        self.arcano
    }

    #[must_use]
    pub fn imagem(&self) -> &str {
        &self.imagem
    }

    #[must_use]
    pub fn numero(&self) -> Option<&CardNumber> {
        self.numero.as_ref()
    }

    #[must_use]
    pub fn palo(&self) -> Option<&str> {
        self.palo.as_deref()
    }

    #[must_use]
    pub fn valor(&self) -> Option<&str> {
        self.valor.as_deref()
    }

    #[must_use]
    pub fn significado(&self) -> &Meaning {
        &self.significado
    }

    #[must_use]
    pub fn simbolos(&self) -> &SymbolSet {
        &self.simbolos
    }

    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}
