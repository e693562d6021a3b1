use thiserror::Error;

use super::cards::Card;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Malformed card token: {0:?}")]
    MalformedCardToken(String),

    #[error("Card not in hand: {0}")]
    CardNotInHand(Card),

    #[error("Cards do not form a valid combination")]
    InvalidCombination,

    /// `beats` was asked to compare against an invalid or empty combination.
    #[error("Cannot compare an invalid or empty combination")]
    IllegalComparison,

    #[error("Cannot deal {cards} cards into {hands} equal hands")]
    DealSizeMismatch { cards: usize, hands: usize },

    #[error("Expected {expected} players, got {actual}")]
    InvalidPlayerCount { expected: usize, actual: usize },

    #[error("Game is already over")]
    GameOver,

    #[error("Turn limit of {0} exceeded without a winner")]
    TurnLimitExceeded(usize),
}
