//! Raw record to typed card conversion.
//!
//! Both mappers are total: each missing or empty field is replaced by a
//! fixed default, so any document yields a card.

use crate::image::PLACEHOLDER_IMAGE;
use crate::model::{
    arcana::Arcana,
    card::{Card, MajorCard, MinorCard, NOT_AVAILABLE, UNKNOWN_SUIT, UNNAMED_CARD},
    detailed::{DetailedCard, Meaning, SymbolSet},
    ids::CardId,
    number::CardNumber,
    record::RawRecord,
};

/// Builds a listing card from a raw document.
///
/// | field    | default                |
/// |----------|------------------------|
/// | `nombre` | `"Sin nombre"`         |
/// | `imagem` | placeholder image path |
/// | `numero` | `"N/A"` (major only)   |
/// | `palo`   | `"Sin palo"` (minor)   |
/// | `valor`  | `"N/A"` (minor)        |
#[must_use]
pub fn map_record_to_card(id: impl Into<CardId>, record: &RawRecord) -> Card {
    let id = id.into();
    let nombre = record.display_name().unwrap_or(UNNAMED_CARD);
    let imagem = record.image().unwrap_or(PLACEHOLDER_IMAGE);

    match record.arcana() {
        Arcana::Minor => MinorCard::new(
            id,
            nombre,
            imagem,
            record.suit_name().unwrap_or(UNKNOWN_SUIT),
            record.rank().unwrap_or(NOT_AVAILABLE),
        )
        .into(),
        Arcana::Major => MajorCard::new(
            id,
            nombre,
            imagem,
            record
                .numero
                .clone()
                .unwrap_or_else(|| CardNumber::from(NOT_AVAILABLE)),
        )
        .into(),
    }
}

/// Builds a detail-page card, flattening `significado` and `simbolos`.
///
/// Missing text leaves become `""` and missing lists become empty.
#[must_use]
pub fn map_record_to_detailed_card(id: impl Into<CardId>, record: &RawRecord) -> DetailedCard {
    let meaning = record.significado.clone().unwrap_or_default();
    let symbols = record.simbolos.clone().unwrap_or_default();

    DetailedCard::new(
        id.into(),
        record.display_name().unwrap_or(UNNAMED_CARD),
        record.arcana(),
        record.image().unwrap_or(PLACEHOLDER_IMAGE),
        record.numero.clone(),
        record.suit_name().map(str::to_owned),
        record.rank().map(str::to_owned),
        Meaning {
            directo: meaning.directo.unwrap_or_default(),
            invertido: meaning.invertido.unwrap_or_default(),
        },
        SymbolSet {
            principales: symbols.principales.unwrap_or_default(),
            interpretacion: symbols.interpretacion.unwrap_or_default(),
        },
        record.keywords.clone().unwrap_or_default(),
    )
}
