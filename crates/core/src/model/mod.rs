mod arcana;
mod card;
pub mod catalog;
mod detailed;
mod ids;
pub mod mapping;
mod number;
pub mod record;
pub mod suit;

pub use arcana::{Arcana, ParseArcanaError};
pub use card::{Card, MajorCard, MinorCard, NOT_AVAILABLE, UNKNOWN_SUIT, UNNAMED_CARD};
pub use catalog::{
    Catalog, ParseSpreadError, SpreadKind, SuitGroup, filter_by_arcana, filter_for_spread,
    group_by_suit, sort_major_arcana, split_arcana,
};
pub use detailed::{DetailedCard, Meaning, SymbolSet};
pub use ids::{CardId, normalize_to_id};
pub use mapping::{map_record_to_card, map_record_to_detailed_card};
pub use number::{CardNumber, parse_leading_int};
pub use record::{RawMeaning, RawRecord, RawSymbols};
pub use suit::{MINOR_ARCANA_ORDER, SUIT_ORDER, SUITS, SuitInfo, UNRANKED, rank_index, suit_info};
