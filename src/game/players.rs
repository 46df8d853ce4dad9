use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::{Card, Company};

/// Token balance every player starts each round with.
pub const STARTING_MONEY: i32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// Stable seat index, fixed for the lifetime of the game.
    pub index: usize,
    /// Held cards, oldest first. The play candidate is always the front.
    pub hand: Vec<Card>,
    /// Committed cards per company; never decreases within a round.
    pub investments: HashMap<Company, u32>,
    /// May go negative on forced deck draws.
    pub money: i32,
    /// Companies this player leads outright; a flagged company cannot be
    /// freely acquired or invested by its own leader.
    pub monopolies: HashSet<Company>,
}

impl PlayerState {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            hand: Vec::new(),
            investments: HashMap::new(),
            money: STARTING_MONEY,
            monopolies: HashSet::new(),
        }
    }

    /// Clears all per-round state. Seat index survives; cumulative scores live
    /// on the game, not the player.
    pub fn reset_for_new_round(&mut self) {
        self.hand.clear();
        self.investments.clear();
        self.money = STARTING_MONEY;
        self.monopolies.clear();
    }

    pub fn investment(&self, company: Company) -> u32 {
        self.investments.get(&company).copied().unwrap_or(0)
    }

    pub fn commit_investment(&mut self, company: Company) {
        *self.investments.entry(company).or_insert(0) += 1;
    }

    pub fn is_blocked(&self, company: Company) -> bool {
        self.monopolies.contains(&company)
    }

    pub fn total_invested(&self) -> u32 {
        self.investments.values().sum()
    }
}
