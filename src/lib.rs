#![warn(clippy::all)]
#![deny(rust_2018_idioms)]

pub mod cli;
pub mod game;
pub mod types;

pub use game::{Game, GameConfig, GameError, GameEvent, GameState, RoundOutcome};
pub use types::{Card, Company};
