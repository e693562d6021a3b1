use rand::seq::SliceRandom;
use rand::Rng;

use super::basic::Card;
use super::hand::Hand;
use crate::game::errors::GameError;

pub const DECK_SIZE: usize = 52;

/// The 52-card pack. Consumed by a single [`Deck::deal`].
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self {
            cards: Card::all_cards(),
        }
    }

    /// Uniform Fisher-Yates shuffle driven by the given source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Splits the deck into `n` contiguous hands of equal size, in current order.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Hand>, GameError> {
        if n == 0 || self.cards.len() != DECK_SIZE || DECK_SIZE % n != 0 {
            return Err(GameError::DealSizeMismatch {
                cards: self.cards.len(),
                hands: n,
            });
        }

        let hand_size = DECK_SIZE / n;
        let hands = self
            .cards
            .drain(..)
            .collect::<Vec<_>>()
            .chunks(hand_size)
            .map(|chunk| Hand::new(chunk.to_vec()))
            .collect();

        Ok(hands)
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
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
