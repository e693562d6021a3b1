use std::fmt;

use super::basic::{Card, Rank, THREE_OF_SPADES};
use crate::game::config::RuleSet;
use crate::game::errors::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ComboType {
    Single,
    Pair,
    Triple,
    Straight,
    FourOfAKind,
    /// Three or more consecutive pairs.
    StraightBomb,
    Invalid,
}

impl ComboType {
    pub fn is_bomb(&self) -> bool {
        matches!(self, ComboType::FourOfAKind | ComboType::StraightBomb)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ComboType::Single => "Single",
            ComboType::Pair => "Pair",
            ComboType::Triple => "Triple",
            ComboType::Straight => "Straight",
            ComboType::FourOfAKind => "Four of a Kind",
            ComboType::StraightBomb => "Straight Bomb",
            ComboType::Invalid => "Invalid",
        }
    }
}

impl fmt::Display for ComboType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classifies a set of cards. Total: every input, including the empty set
/// and sets repeating a card, maps to exactly one type.
pub fn detect_type(cards: &[Card]) -> ComboType {
    if cards.is_empty() {
        return ComboType::Invalid;
    }

    let mut sorted = cards.to_vec();
    sorted.sort();
    if sorted.windows(2).any(|w| w[0] == w[1]) {
        return ComboType::Invalid;
    }

    let same_rank = sorted.iter().all(|c| c.rank == sorted[0].rank);
    match sorted.len() {
        1 => ComboType::Single,
        2 if same_rank => ComboType::Pair,
        3 if same_rank => ComboType::Triple,
        4 if same_rank => ComboType::FourOfAKind,
        n if n >= 3 && is_straight(&sorted) => ComboType::Straight,
        n if n >= 6 && n % 2 == 0 && is_double_run(&sorted) => ComboType::StraightBomb,
        _ => ComboType::Invalid,
    }
}

fn is_straight(sorted: &[Card]) -> bool {
    !sorted.iter().any(|c| c.rank == Rank::Two) && is_consecutive(sorted.iter().map(Card::height))
}

fn is_double_run(sorted: &[Card]) -> bool {
    if sorted.iter().any(|c| c.rank == Rank::Two) {
        return false;
    }

    // Sorted input groups ranks together, so a rank held three times misaligns a chunk.
    let pairs_match = sorted.chunks(2).all(|pair| pair[0].rank == pair[1].rank);
    pairs_match && is_consecutive(sorted.chunks(2).map(|pair| pair[0].height()))
}

fn is_consecutive(heights: impl Iterator<Item = u8>) -> bool {
    let heights: Vec<u8> = heights.collect();
    heights.windows(2).all(|w| w[1] == w[0] + 1)
}

pub fn is_valid(cards: &[Card]) -> bool {
    detect_type(cards) != ComboType::Invalid
}

pub fn contains_three_of_spades(cards: &[Card]) -> bool {
    cards.contains(&THREE_OF_SPADES)
}

/// A set of cards known to form a legal combination, sorted low to high.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Combination {
    kind: ComboType,
    cards: Vec<Card>,
}

impl Combination {
    pub fn from_cards(cards: &[Card]) -> Result<Self, GameError> {
        let kind = detect_type(cards);
        if kind == ComboType::Invalid {
            return Err(GameError::InvalidCombination);
        }

        let mut cards = cards.to_vec();
        cards.sort();
        Ok(Self { kind, cards })
    }

    pub fn kind(&self) -> ComboType {
        self.kind
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_bomb(&self) -> bool {
        self.kind.is_bomb()
    }

    /// Highest card by rank then suit. Straights and straight bombs are ranked by it.
    pub fn high_card(&self) -> Card {
        self.cards[self.cards.len() - 1]
    }

    /// Number of pairs in a straight bomb, zero for every other type.
    pub fn pair_count(&self) -> usize {
        match self.kind {
            ComboType::StraightBomb => self.cards.len() / 2,
            _ => 0,
        }
    }

    pub fn contains_three_of_spades(&self) -> bool {
        contains_three_of_spades(&self.cards)
    }

    fn is_single_or_pair_of_twos(&self) -> bool {
        matches!(self.kind, ComboType::Single | ComboType::Pair) && self.high_card().rank == Rank::Two
    }

    /// Whether this combination may be played over `table`.
    pub fn beats(&self, table: &Combination, rules: &RuleSet) -> bool {
        use ComboType::*;

        match (self.kind, table.kind) {
            (FourOfAKind, FourOfAKind) => self.high_card().rank > table.high_card().rank,
            (StraightBomb, StraightBomb) => {
                (self.pair_count(), self.high_card()) > (table.pair_count(), table.high_card())
            }
            (FourOfAKind, StraightBomb) => table.pair_count() < rules.double_run_over_quad,
            (StraightBomb, FourOfAKind) => self.pair_count() >= rules.double_run_over_quad,
            (FourOfAKind | StraightBomb, Single | Pair) => table.is_single_or_pair_of_twos(),
            (mine, theirs) if mine == theirs && !mine.is_bomb() && self.len() == table.len() => {
                self.high_card() > table.high_card()
            }
            _ => false,
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.kind, combo_to_string(&self.cards))
    }
}

/// Compares two raw card sets with the default rules.
pub fn beats(candidate: &[Card], table: &[Card]) -> Result<bool, GameError> {
    beats_with_rules(candidate, table, &RuleSet::default())
}

/// Fails with [`GameError::IllegalComparison`] if either side is empty or
/// not a legal combination; callers must validate and special-case round
/// starts before comparing.
pub fn beats_with_rules(
    candidate: &[Card],
    table: &[Card],
    rules: &RuleSet,
) -> Result<bool, GameError> {
    let candidate = Combination::from_cards(candidate).map_err(|_| GameError::IllegalComparison)?;
    let table = Combination::from_cards(table).map_err(|_| GameError::IllegalComparison)?;
    Ok(candidate.beats(&table, rules))
}

pub fn combo_to_string(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "PASS".to_string();
    }

    let mut sorted = cards.to_vec();
    sorted.sort();
    sorted
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn type_to_string(kind: ComboType) -> &'static str {
    kind.name()
}
