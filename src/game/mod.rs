pub mod deck;
pub mod game;
pub mod market;
pub mod players;
pub mod state;

pub use deck::{DeckSplit, HAND_SIZE, HIDDEN_CARDS, TOTAL_SUPPLY};
pub use game::Game;
pub use market::Market;
pub use players::{PlayerState, STARTING_MONEY};
pub use state::{
    GameConfig, GameError, GameEvent, GameState, MAX_PLAYERS, MIN_PLAYERS, RoundOutcome,
};
