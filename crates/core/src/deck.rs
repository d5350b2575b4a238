//! Deck construction: paired cards, special-card budget, uniform shuffling.
//!
//! The special block and the ordinary block are shuffled independently,
//! concatenated special-first, and the combined sequence is shuffled again so
//! special cards end up interleaved rather than clustered. Every shuffle is a
//! uniform Fisher-Yates permutation (`SliceRandom::shuffle`); a biased
//! random-comparator sort is explicitly not acceptable here.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use memory_match_types::{CardId, CharacterId, GridSize, MAX_SPECIAL_PAIRS};

use crate::catalog::Catalog;

/// One dealt card. Identity only; flip/match state lives on the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub character_id: CharacterId,
    pub display_name: String,
    pub image_ref: String,
    pub special: bool,
    /// 1 for ordinary cards, the tiered value for special cards.
    pub point_value: u32,
}

/// Deck construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    /// Side length of zero or one that cannot produce an even card count.
    InvalidGridSize { side: usize },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckError::InvalidGridSize { side } => {
                write!(f, "grid side {side} cannot be dealt into pairs")
            }
        }
    }
}

impl std::error::Error for DeckError {}

/// Special pairs to include for a given side length.
pub fn special_pair_budget(side: usize, pool: usize) -> usize {
    MAX_SPECIAL_PAIRS.min(side / 2).min(pool)
}

/// Build a shuffled deck for a raw side length.
///
/// Validates the side (it must be positive and even so `side²` cards can be
/// paired); the interactive configuration surface goes through
/// [`build_for_grid`], which cannot fail.
pub fn build_deck<R: Rng>(
    side: usize,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<Vec<Card>, DeckError> {
    if side == 0 || side % 2 != 0 {
        return Err(DeckError::InvalidGridSize { side });
    }
    Ok(assemble(side, catalog, rng))
}

/// Build a shuffled deck for a supported grid size. Infallible: every
/// [`GridSize`] has an even side.
pub fn build_for_grid<R: Rng>(grid: GridSize, catalog: &Catalog, rng: &mut R) -> Vec<Card> {
    assemble(grid.side(), catalog, rng)
}

fn assemble<R: Rng>(side: usize, catalog: &Catalog, rng: &mut R) -> Vec<Card> {
    let pairs_needed = side * side / 2;
    let special_pairs = special_pair_budget(side, catalog.special().len());

    let mut special: Vec<Card> = Vec::with_capacity(special_pairs * 2);
    for ch in catalog.special().iter().take(special_pairs) {
        for _ in 0..2 {
            special.push(Card {
                id: 0,
                character_id: ch.id,
                display_name: ch.name.to_string(),
                image_ref: ch.image.to_string(),
                special: true,
                point_value: ch.point_value,
            });
        }
    }

    // Ordinary pairs cycle the pool with wraparound: every character is used
    // once before any repeats. Each pair still gets its own character_id so
    // two pairs sharing artwork on a large board can never cross-match.
    let pool = catalog.ordinary();
    let ordinary_pairs = pairs_needed - special_pairs;
    let mut ordinary: Vec<Card> = Vec::with_capacity(ordinary_pairs * 2);
    for i in 0..ordinary_pairs {
        let ch = &pool[i % pool.len()];
        let pair_id = 1 + i as CharacterId;
        for _ in 0..2 {
            ordinary.push(Card {
                id: 0,
                character_id: pair_id,
                display_name: ch.name.to_string(),
                image_ref: ch.image.to_string(),
                special: false,
                point_value: memory_match_types::ORDINARY_MATCH_POINTS,
            });
        }
    }

    special.shuffle(rng);
    ordinary.shuffle(rng);

    let mut deck = special;
    deck.append(&mut ordinary);
    deck.shuffle(rng);

    for (index, card) in deck.iter_mut().enumerate() {
        card.id = index as CardId;
    }
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn deck_for(side: usize, seed: u64) -> Vec<Card> {
        let catalog = Catalog::standard();
        let mut rng = SmallRng::seed_from_u64(seed);
        build_deck(side, &catalog, &mut rng).unwrap()
    }

    #[test]
    fn test_invalid_sides_rejected() {
        let catalog = Catalog::standard();
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(
            build_deck(0, &catalog, &mut rng),
            Err(DeckError::InvalidGridSize { side: 0 })
        );
        assert_eq!(
            build_deck(5, &catalog, &mut rng),
            Err(DeckError::InvalidGridSize { side: 5 })
        );
    }

    #[test]
    fn test_card_counts_per_grid() {
        for side in [4usize, 6, 8, 10] {
            let deck = deck_for(side, 7);
            assert_eq!(deck.len(), side * side);
        }
    }

    #[test]
    fn test_every_character_appears_exactly_twice() {
        for side in [4usize, 6, 8, 10] {
            let deck = deck_for(side, 11);
            let mut counts: HashMap<CharacterId, usize> = HashMap::new();
            for card in &deck {
                *counts.entry(card.character_id).or_default() += 1;
            }
            assert!(counts.values().all(|&n| n == 2), "side {side}");
        }
    }

    #[test]
    fn test_special_pair_budget() {
        // min(4, side/2, pool=4)
        assert_eq!(special_pair_budget(4, 4), 2);
        assert_eq!(special_pair_budget(6, 4), 3);
        assert_eq!(special_pair_budget(8, 4), 4);
        assert_eq!(special_pair_budget(10, 4), 4);
        assert_eq!(special_pair_budget(8, 1), 1);
        assert_eq!(special_pair_budget(8, 0), 0);
    }

    #[test]
    fn test_special_card_counts() {
        for (side, want_pairs) in [(4usize, 2usize), (6, 3), (8, 4), (10, 4)] {
            let deck = deck_for(side, 3);
            let specials = deck.iter().filter(|c| c.special).count();
            assert_eq!(specials, want_pairs * 2, "side {side}");
        }
    }

    #[test]
    fn test_repeated_artwork_keeps_pair_identity() {
        // A 10x10 board needs more ordinary pairs than the pool has
        // characters, so artwork repeats; pair identities must not.
        let deck = deck_for(10, 13);
        let mut names: HashMap<&str, usize> = HashMap::new();
        for card in deck.iter().filter(|c| !c.special) {
            *names.entry(card.display_name.as_str()).or_default() += 1;
        }
        assert!(names.values().any(|&n| n > 2));

        let mut ids: HashMap<CharacterId, usize> = HashMap::new();
        for card in &deck {
            *ids.entry(card.character_id).or_default() += 1;
        }
        assert!(ids.values().all(|&n| n == 2));
    }

    #[test]
    fn test_ids_sequential_in_dealt_order() {
        let deck = deck_for(6, 5);
        for (index, card) in deck.iter().enumerate() {
            assert_eq!(card.id as usize, index);
        }
    }

    #[test]
    fn test_ordinary_point_values() {
        let deck = deck_for(10, 9);
        for card in &deck {
            if card.special {
                assert!(card.point_value >= 10_000);
            } else {
                assert_eq!(card.point_value, 1);
            }
        }
    }

    #[test]
    fn test_same_seed_same_deck() {
        assert_eq!(deck_for(8, 42), deck_for(8, 42));
    }

    #[test]
    fn test_shuffle_spreads_specials() {
        // Specials are appended first before the final shuffle; if that
        // shuffle worked they should not stay clustered at the front.
        let mut front_specials = 0usize;
        let trials = 200;
        for seed in 0..trials {
            let deck = deck_for(4, seed);
            if deck[..4].iter().all(|c| c.special) {
                front_specials += 1;
            }
        }
        // 4 specials among 16 cards: all-in-front probability is ~0.05%.
        assert!(front_specials < trials as usize / 10);
    }

    #[test]
    fn test_shuffle_position_uniformity() {
        // Position 0 should hold any given character with probability 2/16.
        let trials = 2_000u64;
        let probe: CharacterId = 1; // ordinary character present in every 4x4 deck
        let mut hits = 0u64;
        for seed in 0..trials {
            let deck = deck_for(4, seed);
            if deck[0].character_id == probe {
                hits += 1;
            }
        }
        let expected = trials / 8;
        assert!(
            hits > expected / 2 && hits < expected * 2,
            "position bias: {hits} hits, expected about {expected}"
        );
    }
}
