use super::basic::{Card, THREE_OF_SPADES};
use crate::game::errors::GameError;

/// The cards one player currently holds, kept sorted low to high.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new(mut cards: Vec<Card>) -> Self {
        cards.sort();
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn find_three_of_spades(&self) -> bool {
        self.contains(&THREE_OF_SPADES)
    }

    /// Removes each requested card once. Nothing is removed unless every
    /// requested card is held, counting repeats in `cards` separately.
    pub fn remove_cards(&mut self, cards: &[Card]) -> Result<(), GameError> {
        let mut remaining = self.cards.clone();
        for card in cards {
            let pos = remaining
                .iter()
                .position(|c| c == card)
                .ok_or(GameError::CardNotInHand(*card))?;
            remaining.remove(pos);
        }

        self.cards = remaining;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::{Rank, Suit};

    fn sample_hand() -> Hand {
        Hand::new(vec![
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Four, Suit::Hearts),
        ])
    }

    #[test]
    fn test_cards_are_sorted() {
        let hand = sample_hand();
        assert_eq!(hand.cards()[0], THREE_OF_SPADES);
        assert_eq!(hand.card_count(), 3);
        assert!(hand.find_three_of_spades());
    }

    #[test]
    fn test_remove_cards() {
        let mut hand = sample_hand();
        hand.remove_cards(&[THREE_OF_SPADES]).unwrap();

        assert_eq!(
            hand.cards(),
            &[
                Card::new(Rank::Four, Suit::Hearts),
                Card::new(Rank::Five, Suit::Spades)
            ]
        );
        assert!(!hand.find_three_of_spades());
    }

    #[test]
    fn test_remove_is_all_or_nothing() {
        let mut hand = sample_hand();
        let result = hand.remove_cards(&[THREE_OF_SPADES, Card::new(Rank::Ace, Suit::Spades)]);

        assert_eq!(
            result,
            Err(GameError::CardNotInHand(Card::new(Rank::Ace, Suit::Spades)))
        );
        assert_eq!(hand, sample_hand());
    }

    #[test]
    fn test_remove_same_card_twice_fails() {
        let mut hand = sample_hand();
        let result = hand.remove_cards(&[THREE_OF_SPADES, THREE_OF_SPADES]);
        assert_eq!(result, Err(GameError::CardNotInHand(THREE_OF_SPADES)));
        assert_eq!(hand.card_count(), 3);
    }

    #[test]
    fn test_emptying_hand() {
        let mut hand = sample_hand();
        let all = hand.cards().to_vec();
        hand.remove_cards(&all).unwrap();
        assert!(hand.is_empty());
    }
}
