// Library crate for the Tien Len rule engine
// This file exposes the public API for integration tests and the binary

pub mod bot;
pub mod game;

// Re-export commonly used types for easier access in tests
pub use bot::{BasicStrategy, Strategy};
pub use game::{
    Card, ComboType, Combination, Deck, Game, GameConfig, GameError, GameSnapshot, GameState,
    Hand, Phase, Player, Rank, RuleSet, Suit, TurnOutcome,
};
