use serde::{Deserialize, Serialize};

use crate::types::{Card, Company};

/// Shared face-up pool of freely acquirable cards, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Market {
    cards: Vec<Card>,
}

impl Market {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes and returns the leftmost card whose company is not blocked for
    /// the acquiring player.
    pub fn take_first_unblocked(&mut self, blocked: impl Fn(Company) -> bool) -> Option<Card> {
        let pos = self.cards.iter().position(|card| !blocked(*card))?;
        Some(self.cards.remove(pos))
    }

    /// Places a card face up at the right end of the pool.
    pub fn discard(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
