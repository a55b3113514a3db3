use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::collections::group_by;
use crate::model::{
    arcana::Arcana,
    card::{Card, MajorCard, MinorCard},
    suit::{SuitInfo, rank_index, suit_info, suit_order_index},
};

//
// ─── GROUPING / SORTING ────────────────────────────────────────────────────────
//

/// Groups minor cards by `palo`, then orders each group by rank.
///
/// Suits appear in order of first occurrence; cards with the same rank
/// keep their input order.
#[must_use]
pub fn group_by_suit(cards: &[MinorCard]) -> Vec<(String, Vec<MinorCard>)> {
    let mut groups = group_by(cards, |c| c.palo().to_owned());
    for (_, members) in &mut groups {
        members.sort_by_key(|c| rank_index(c.valor()));
    }
    groups
}

/// Orders major cards by their number, ascending and stable.
///
/// Non-numeric numbers count as 0.
#[must_use]
pub fn sort_major_arcana(cards: &[MajorCard]) -> Vec<MajorCard> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| c.numero().sort_value());
    sorted
}

#[must_use]
pub fn filter_by_arcana(cards: &[Card], kind: Arcana) -> Vec<Card> {
    cards.iter().filter(|c| c.arcana() == kind).cloned().collect()
}

/// Splits a mixed listing into its major and minor halves, keeping order.
#[must_use]
pub fn split_arcana(cards: &[Card]) -> (Vec<MajorCard>, Vec<MinorCard>) {
    let mut majors = Vec::new();
    let mut minors = Vec::new();
    for card in cards {
        match card {
            Card::Major(c) => majors.push(c.clone()),
            Card::Minor(c) => minors.push(c.clone()),
        }
    }
    (majors, minors)
}

//
// ─── SPREADS ───────────────────────────────────────────────────────────────────
//

/// Which part of the deck a draw is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SpreadKind {
    Major,
    Minor,
    #[default]
    Mixed,
}

impl SpreadKind {
    /// Lenient parse used for query strings: unknown values fall back to `Mixed`.
    #[must_use]
    pub fn from_param(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SpreadKind::Major => "mayores",
            SpreadKind::Minor => "menores",
            SpreadKind::Mixed => "mixta",
        }
    }
}

impl fmt::Display for SpreadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown spread: {0}")]
pub struct ParseSpreadError(pub String);

impl FromStr for SpreadKind {
    type Err = ParseSpreadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mayores" => Ok(SpreadKind::Major),
            "menores" => Ok(SpreadKind::Minor),
            "mixta" => Ok(SpreadKind::Mixed),
            other => Err(ParseSpreadError(other.to_owned())),
        }
    }
}

#[must_use]
pub fn filter_for_spread(cards: &[Card], spread: SpreadKind) -> Vec<Card> {
    match spread {
        SpreadKind::Major => filter_by_arcana(cards, Arcana::Major),
        SpreadKind::Minor => filter_by_arcana(cards, Arcana::Minor),
        SpreadKind::Mixed => cards.to_vec(),
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuitGroup {
    pub palo: String,
    pub info: Option<SuitInfo>,
    pub cards: Vec<MinorCard>,
}

/// Full deck listing: majors by number, then one group per suit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub majors: Vec<MajorCard>,
    pub suits: Vec<SuitGroup>,
}

impl Catalog {
    /// Known suits come first in display order; unknown suits follow in
    /// order of first occurrence.
    #[must_use]
    pub fn build(cards: &[Card]) -> Self {
        let (majors, minors) = split_arcana(cards);
        let mut suits: Vec<SuitGroup> = group_by_suit(&minors)
            .into_iter()
            .map(|(palo, cards)| SuitGroup {
                info: suit_info(&palo).copied(),
                palo,
                cards,
            })
            .collect();
        suits.sort_by_key(|g| suit_order_index(&g.palo));

        Self {
            majors: sort_major_arcana(&majors),
            suits,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.majors.len() + self.suits.iter().map(|g| g.cards.len()).sum::<usize>()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
