// Public API
pub use cards::{
    beats, beats_with_rules, combo_to_string, contains_three_of_spades, detect_type, is_valid,
    type_to_string, Card, ComboType, Combination, Deck, Hand, Rank, Suit, DECK_SIZE,
    THREE_OF_SPADES,
};
pub use config::{GameConfig, RuleSet, PLAYER_COUNT};
pub use errors::GameError;
pub use logic::{Game, GameSnapshot, Player, RejectReason, TurnAction, TurnOutcome, TurnRecord};
pub use state::{GameState, Phase};

// Internal modules
mod cards;
mod config;
mod errors;
mod logic;
mod state;
