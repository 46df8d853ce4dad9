use rand::seq::SliceRandom;

use crate::types::{Card, Company};

/// Cards removed from play at the start of every round.
pub const HIDDEN_CARDS: usize = 5;
/// Cards dealt to each player at the start of every round.
pub const HAND_SIZE: usize = 3;
/// Full per-round card supply across all companies.
pub const TOTAL_SUPPLY: usize = 45;

/// A freshly shuffled round supply, split into the reachable deck and the
/// hidden set that never re-enters play.
#[derive(Debug, Clone)]
pub struct DeckSplit {
    pub deck: Vec<Card>,
    pub hidden: Vec<Card>,
}

/// Builds the unshuffled 45-card supply: one run of cards per company, sized
/// by its supply table.
pub fn build_supply() -> Vec<Card> {
    let mut deck = Vec::with_capacity(TOTAL_SUPPLY);
    for company in Company::ALL {
        for _ in 0..company.supply() {
            deck.push(company);
        }
    }
    deck
}

/// Shuffles a full supply with the injected RNG and splits off the hidden set.
/// The back of the returned deck is its top; draws pop from the end.
pub fn shuffled_round_deck(rng: &mut impl rand::Rng) -> DeckSplit {
    let mut deck = build_supply();
    deck.shuffle(rng);
    let hidden = deck.split_off(deck.len() - HIDDEN_CARDS);
    DeckSplit { deck, hidden }
}
