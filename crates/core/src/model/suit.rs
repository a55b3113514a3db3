//! Constant lookup tables for the minor arcana: suits and ranks.

use serde::Serialize;

/// Display metadata for one minor-arcana suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuitInfo {
    pub name: &'static str,
    pub element: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

/// The four suits, already in display order.
pub static SUITS: [SuitInfo; 4] = [
    SuitInfo {
        name: "bastos",
        element: "Fuego",
        emoji: "🔥",
        color: "red",
    },
    SuitInfo {
        name: "copas",
        element: "Agua",
        emoji: "💧",
        color: "blue",
    },
    SuitInfo {
        name: "espadas",
        element: "Aire",
        emoji: "💨",
        color: "gray",
    },
    SuitInfo {
        name: "oros",
        element: "Tierra",
        emoji: "🌍",
        color: "yellow",
    },
];

pub const SUIT_ORDER: [&str; 4] = ["bastos", "copas", "espadas", "oros"];

/// Ranks within a suit, lowest first.
pub const MINOR_ARCANA_ORDER: [&str; 14] = [
    "as", "2", "3", "4", "5", "6", "7", "8", "9", "10", "sota", "caballo", "reina", "rey",
];

/// Position given to ranks missing from [`MINOR_ARCANA_ORDER`]; sorts last.
pub const UNRANKED: usize = 999;

#[must_use]
pub fn suit_info(palo: &str) -> Option<&'static SuitInfo> {
    SUITS.iter().find(|s| s.name == palo)
}

/// Display position of a suit; unknown suits share the slot after the last one.
#[must_use]
pub fn suit_order_index(palo: &str) -> usize {
    SUIT_ORDER
        .iter()
        .position(|s| *s == palo)
        .unwrap_or(SUIT_ORDER.len())
}

/// Position of a rank label in [`MINOR_ARCANA_ORDER`], case and
/// surrounding whitespace ignored.
#[must_use]
pub fn rank_index(valor: &str) -> usize {
    let normalized = valor.trim().to_lowercase();
    MINOR_ARCANA_ORDER
        .iter()
        .position(|r| *r == normalized)
        .unwrap_or(UNRANKED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_index_normalizes_input() {
        assert_eq!(rank_index("as"), 0);
        assert_eq!(rank_index("  REY "), 13);
        assert_eq!(rank_index("10"), 9);
        assert_eq!(rank_index("Sota"), 10);
    }

    #[test]
    fn unknown_rank_sorts_last() {
        assert_eq!(rank_index("N/A"), UNRANKED);
        assert!(rank_index("paje") > rank_index("rey"));
    }

    #[test]
    fn suit_lookup() {
        assert_eq!(suit_info("copas").map(|s| s.element), Some("Agua"));
        assert!(suit_info("Sin palo").is_none());
        assert_eq!(suit_order_index("oros"), 3);
        assert_eq!(suit_order_index("Sin palo"), 4);
    }
}
