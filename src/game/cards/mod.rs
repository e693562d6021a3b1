pub mod basic;
pub mod combination;
pub mod deck;
pub mod hand;


pub use basic::{Card, Rank, Suit, THREE_OF_SPADES};
pub use combination::{
    beats, beats_with_rules, combo_to_string, contains_three_of_spades, detect_type, is_valid,
    type_to_string, ComboType, Combination,
};
pub use deck::{Deck, DECK_SIZE};
pub use hand::Hand;
