use itertools::Itertools;
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::types::{Card, Company};

use super::{
    deck::{self, HAND_SIZE},
    market::Market,
    players::PlayerState,
};

pub const MIN_PLAYERS: usize = 3;
pub const MAX_PLAYERS: usize = 7;

/// Tokens a minority holder pays the majority holder per committed card at
/// round end.
const MINORITY_PAYMENT: i32 = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub num_players: usize,
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: 4,
            seed: 42,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("player count {0} outside supported range 3..=7")]
    InvalidPlayerCount(usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum GameEvent {
    /// One turn resolved. `company` is what the player played (invested or
    /// moved to the market); `None` means the hand was empty.
    CardPlayed {
        player: usize,
        company: Option<Company>,
    },
    /// End-of-round snapshot: scratch net worth and the cumulative scores
    /// after this round's deltas.
    RoundScored {
        net_worth: Vec<i32>,
        scores: Vec<i32>,
    },
}

/// Everything observable from one call to [`GameState::play_round`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundOutcome {
    /// One `CardPlayed` per turn, in order, followed by a final `RoundScored`.
    pub events: Vec<GameEvent>,
    pub net_worth: Vec<i32>,
    pub updated_scores: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub players: Vec<PlayerState>,
    pub market: Market,
    /// Face-down supply; the back of the vec is the top of the deck.
    pub deck: Vec<Card>,
    /// Removed from play for the whole round. Not publicly observable.
    hidden: Vec<Card>,
    /// Cumulative points, one per seat. Survives round resets.
    pub round_scores: Vec<i32>,
    pub current_turn: usize,
    pub round: u32,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&config.num_players) {
            return Err(GameError::InvalidPlayerCount(config.num_players));
        }

        let mut rng = StdRng::seed_from_u64(config.seed);
        let split = deck::shuffled_round_deck(&mut rng);
        let players = (0..config.num_players).map(PlayerState::new).collect();
        let num_players = config.num_players;

        let mut state = Self {
            config,
            players,
            market: Market::new(),
            deck: split.deck,
            hidden: split.hidden,
            round_scores: vec![0; num_players],
            current_turn: 0,
            round: 1,
            rng,
        };
        state.deal_hands();
        Ok(state)
    }

    /// Plays one full round: turns cycle round-robin until a turn empties the
    /// deck, the acting player's leftover hand is absorbed into investments,
    /// scoring updates the cumulative scores, and per-round state is rebuilt
    /// for the next round.
    pub fn play_round(&mut self) -> RoundOutcome {
        let mut events = Vec::new();
        loop {
            let event = self.take_turn(self.current_turn);
            events.push(event);
            // Round ends on the turn that empties the deck, before the turn
            // marker advances.
            if self.deck.is_empty() {
                self.absorb_remaining_hand(self.current_turn);
                break;
            }
            self.current_turn = (self.current_turn + 1) % self.players.len();
        }

        let net_worth = self.score_round();
        self.prepare_next_round();
        self.round += 1;

        let updated_scores = self.round_scores.clone();
        events.push(GameEvent::RoundScored {
            net_worth: net_worth.clone(),
            scores: updated_scores.clone(),
        });
        RoundOutcome {
            events,
            net_worth,
            updated_scores,
        }
    }

    /// Seat holding the strict maximum cumulative score. Ties go to the lowest
    /// seat index since replacement requires strictly greater.
    pub fn winner(&self) -> usize {
        let mut best = 0;
        for (idx, &score) in self.round_scores.iter().enumerate() {
            if score > self.round_scores[best] {
                best = idx;
            }
        }
        best
    }

    fn take_turn(&mut self, idx: usize) -> GameEvent {
        if let Some(card) = self.acquire_card(idx) {
            self.players[idx].hand.push(card);
        }
        let company = self.play_from_hand(idx);
        GameEvent::CardPlayed {
            player: idx,
            company,
        }
    }

    /// Acquire step: first unblocked market card is free; otherwise draw from
    /// the deck at a cost equal to the current market size. A player who
    /// cannot cover the cost still draws, unpaid.
    fn acquire_card(&mut self, idx: usize) -> Option<Card> {
        let player = &self.players[idx];
        if let Some(card) = self.market.take_first_unblocked(|c| player.is_blocked(c)) {
            return Some(card);
        }

        if self.deck.is_empty() {
            return None;
        }

        let cost = self.market.len() as i32;
        let player = &mut self.players[idx];
        if player.money >= cost {
            player.money -= cost;
        }
        self.deck.pop()
    }

    /// Play step: the candidate is the oldest card in hand. An unblocked
    /// candidate becomes an investment; a blocked one sends the first
    /// unblocked card (or, failing that, the candidate itself) to the market.
    fn play_from_hand(&mut self, idx: usize) -> Option<Company> {
        if self.players[idx].hand.is_empty() {
            return None;
        }

        let candidate = self.players[idx].hand[0];
        if !self.players[idx].is_blocked(candidate) {
            let player = &mut self.players[idx];
            player.hand.remove(0);
            player.commit_investment(candidate);
            self.update_monopoly(candidate);
            return Some(candidate);
        }

        let pos = {
            let player = &self.players[idx];
            player
                .hand
                .iter()
                .position(|c| !player.is_blocked(*c))
                .unwrap_or(0)
        };
        let card = self.players[idx].hand.remove(pos);
        self.market.discard(card);
        Some(card)
    }

    /// Recomputes the monopoly marker for one company. Runs synchronously
    /// after every investment commit.
    fn update_monopoly(&mut self, company: Company) {
        let mut max_count = 0;
        let mut leader = None;
        let mut contested = false;
        for player in &self.players {
            let count = player.investment(company);
            if count > max_count {
                max_count = count;
                leader = Some(player.index);
                contested = false;
            } else if count == max_count && max_count > 0 {
                contested = true;
            }
        }

        for player in &mut self.players {
            player.monopolies.remove(&company);
        }
        if !contested {
            if let Some(idx) = leader {
                self.players[idx].monopolies.insert(company);
            }
        }
    }

    /// The acting player keeps nothing in hand across the round boundary;
    /// every leftover card becomes an investment. Other hands are untouched.
    fn absorb_remaining_hand(&mut self, idx: usize) {
        let player = &mut self.players[idx];
        let hand = std::mem::take(&mut player.hand);
        for card in hand {
            player.commit_investment(card);
        }
    }

    /// Round scoring: zero-sum transfers from minority holders to each
    /// company's unique majority holder, computed on a scratch net worth
    /// seeded from money (money itself is not written back). Ranking awards
    /// +2 / +1 / -1 cumulative points.
    fn score_round(&mut self) -> Vec<i32> {
        let mut net_worth: Vec<i32> = self.players.iter().map(|p| p.money).collect();

        for company in Company::ALL {
            let counts: Vec<u32> = self
                .players
                .iter()
                .map(|p| p.investment(company))
                .collect();
            let Some(majority) = unique_majority(&counts) else {
                continue;
            };
            for (idx, &count) in counts.iter().enumerate() {
                if idx != majority && count > 0 {
                    let payment = count as i32 * MINORITY_PAYMENT;
                    net_worth[majority] += payment;
                    net_worth[idx] -= payment;
                }
            }
        }

        let ranking: Vec<usize> = (0..self.players.len())
            .sorted_by(|&a, &b| net_worth[b].cmp(&net_worth[a]).then(a.cmp(&b)))
            .collect();

        self.round_scores[ranking[0]] += 2;
        if self.players.len() > 2 {
            self.round_scores[ranking[1]] += 1;
        }
        self.round_scores[ranking[ranking.len() - 1]] -= 1;

        net_worth
    }

    /// Rebuilds all per-round state: fresh shuffled deck and hidden set, reset
    /// players, empty market, turn marker back to seat 0. Cumulative scores
    /// and the round counter are left for the caller.
    fn prepare_next_round(&mut self) {
        let split = deck::shuffled_round_deck(&mut self.rng);
        self.deck = split.deck;
        self.hidden = split.hidden;
        for player in &mut self.players {
            player.reset_for_new_round();
        }
        self.market.clear();
        self.current_turn = 0;
        self.deal_hands();
    }

    /// Deals one card per pass to each seat in index order, [`HAND_SIZE`]
    /// passes total.
    fn deal_hands(&mut self) {
        for _ in 0..HAND_SIZE {
            for idx in 0..self.players.len() {
                if let Some(card) = self.deck.pop() {
                    self.players[idx].hand.push(card);
                }
            }
        }
    }
}

/// Index of the unique strict-maximum count, provided that maximum is > 0.
fn unique_majority(counts: &[u32]) -> Option<usize> {
    let mut max_count = 0;
    let mut majority = None;
    let mut contested = false;
    for (idx, &count) in counts.iter().enumerate() {
        if count > max_count {
            max_count = count;
            majority = Some(idx);
            contested = false;
        } else if count == max_count && max_count > 0 {
            contested = true;
        }
    }
    if contested { None } else { majority }
}
