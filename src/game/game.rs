use uuid::Uuid;

use crate::game::state::{GameConfig, GameError, GameState, RoundOutcome};

/// One exclusively-owned game instance. A hosting layer wraps one `Game` per
/// room and serializes calls to it.
pub struct Game {
    pub seed: u64,
    pub id: Uuid,
    pub state: GameState,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Ok(Self {
            seed: config.seed,
            id: Uuid::new_v4(),
            state: GameState::new(config)?,
        })
    }

    /// Plays the given number of rounds back to back, returning one outcome
    /// per round.
    pub fn play(&mut self, rounds: u32) -> Vec<RoundOutcome> {
        (0..rounds).map(|_| self.state.play_round()).collect()
    }

    pub fn play_round(&mut self) -> RoundOutcome {
        self.state.play_round()
    }

    pub fn winner(&self) -> usize {
        self.state.winner()
    }

    pub fn scores(&self) -> &[i32] {
        &self.state.round_scores
    }
}
