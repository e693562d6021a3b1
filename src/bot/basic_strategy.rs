use std::cmp::Reverse;
use std::collections::BTreeMap;

use tracing::debug;

use crate::game::{Card, Combination, GameState, Hand, Rank, RuleSet};

use super::types::Strategy;

/// Basic bot strategy that plays the cheapest legal combination.
///
/// On an open table it leads with the longest non-bomb containing its lowest
/// card; otherwise it plays the lowest combination that beats the table and
/// only reaches for a bomb when nothing else works.
pub struct BasicStrategy {
    rules: RuleSet,
}

impl BasicStrategy {
    pub fn new() -> Self {
        Self::with_rules(RuleSet::default())
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Every single, pair, triple, quad, straight and straight bomb the hand can form.
    ///
    /// Straights and straight bombs use the lowest suits below their top rank,
    /// with every card of the top rank tried, so the list stays small.
    fn candidate_moves(cards: &[Card]) -> Vec<Combination> {
        let mut by_rank: BTreeMap<Rank, Vec<Card>> = BTreeMap::new();
        for card in cards {
            by_rank.entry(card.rank).or_default().push(*card);
        }
        for group in by_rank.values_mut() {
            group.sort();
        }

        let mut moves = Vec::new();

        for group in by_rank.values() {
            for size in 1..=group.len() {
                for subset in Self::subsets(group, size) {
                    moves.extend(Combination::from_cards(&subset).ok());
                }
            }
        }

        let runs: Vec<&Vec<Card>> = by_rank
            .iter()
            .filter(|(rank, _)| **rank != Rank::Two)
            .map(|(_, group)| group)
            .collect();

        for start in 0..runs.len() {
            for end in start + 1..runs.len() {
                if runs[end][0].height() != runs[end - 1][0].height() + 1 {
                    break;
                }
                let lower = &runs[start..end];

                if lower.len() >= 2 {
                    let base: Vec<Card> = lower.iter().map(|group| group[0]).collect();
                    for top in runs[end].iter() {
                        let mut straight = base.clone();
                        straight.push(*top);
                        moves.extend(Combination::from_cards(&straight).ok());
                    }
                }

                let all_pairs = runs[start..=end].iter().all(|group| group.len() >= 2);
                if lower.len() >= 2 && all_pairs {
                    let mut double_run: Vec<Card> =
                        lower.iter().flat_map(|group| group[..2].to_vec()).collect();
                    let top = runs[end];
                    double_run.extend_from_slice(&top[top.len() - 2..]);
                    moves.extend(Combination::from_cards(&double_run).ok());
                }
            }
        }

        moves
    }

    fn subsets(group: &[Card], size: usize) -> Vec<Vec<Card>> {
        (0u32..(1 << group.len()))
            .filter(|mask| mask.count_ones() as usize == size)
            .map(|mask| {
                group
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, card)| *card)
                    .collect()
            })
            .collect()
    }

    /// Choose the best move from available options
    fn choose_best_move(
        &self,
        hand: &Hand,
        state: &GameState,
        must_open_with_three_of_spades: bool,
    ) -> Option<Combination> {
        let candidates = Self::candidate_moves(hand.cards());

        match state.table_combo() {
            None => {
                let lowest = *hand.cards().first()?;
                candidates
                    .into_iter()
                    .filter(|combo| combo.cards().contains(&lowest))
                    .filter(|combo| {
                        !must_open_with_three_of_spades || combo.contains_three_of_spades()
                    })
                    .min_by_key(|combo| (combo.is_bomb(), Reverse(combo.len()), combo.high_card()))
            }
            Some(table) => candidates
                .into_iter()
                .filter(|combo| combo.beats(table, &self.rules))
                .min_by_key(|combo| (combo.is_bomb(), combo.high_card())),
        }
    }
}

impl Default for BasicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for BasicStrategy {
    fn decide_move(
        &self,
        hand: &Hand,
        state: &GameState,
        must_open_with_three_of_spades: bool,
    ) -> Vec<Card> {
        debug!(
            player = state.current_player(),
            card_count = hand.card_count(),
            "Bot deciding move"
        );

        let chosen = self.choose_best_move(hand, state, must_open_with_three_of_spades);

        debug!(
            player = state.current_player(),
            chosen_move = ?chosen.as_ref().map(|combo| combo.to_string()),
            "Bot decided on move"
        );

        chosen.map(|combo| combo.cards().to_vec()).unwrap_or_default()
    }

    fn strategy_name(&self) -> &'static str {
        "BasicStrategy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{ComboType, THREE_OF_SPADES};

    fn hand(tokens: &str) -> Hand {
        Hand::new(Card::parse_many(tokens).unwrap())
    }

    fn state_with_table(tokens: &str) -> GameState {
        let mut state = GameState::new(0);
        state.set_table_combo(Combination::from_cards(&Card::parse_many(tokens).unwrap()).unwrap());
        state.next_player();
        state
    }

    #[test]
    fn test_bot_opens_with_three_of_spades() {
        let strategy = BasicStrategy::new();
        let hand = hand("3S 9D KH");

        let chosen = strategy.decide_move(&hand, &GameState::new(0), true);
        assert_eq!(chosen, vec![THREE_OF_SPADES]);
    }

    #[test]
    fn test_bot_leads_longest_combo_with_lowest_card() {
        let strategy = BasicStrategy::new();
        let hand = hand("3S 4C 5D 6H 9D 9S KH");

        let chosen = strategy.decide_move(&hand, &GameState::new(0), true);
        assert_eq!(chosen, Card::parse_many("3S 4C 5D 6H").unwrap());
    }

    #[test]
    fn test_bot_plays_lowest_beating_card() {
        let strategy = BasicStrategy::new();
        let hand = hand("4S 8C 9D KH");

        let chosen = strategy.decide_move(&hand, &state_with_table("8S"), false);
        assert_eq!(chosen, Card::parse_many("8C").unwrap());
    }

    #[test]
    fn test_bot_passes_when_no_valid_moves() {
        let strategy = BasicStrategy::new();
        let hand = hand("4S 8C 9D");

        let chosen = strategy.decide_move(&hand, &state_with_table("KS KH"), false);
        assert!(chosen.is_empty());
    }

    #[test]
    fn test_bot_bombs_a_two_only_when_needed() {
        let strategy = BasicStrategy::new();
        let hand = hand("6S 6C 6D 6H 9D");

        let chosen = strategy.decide_move(&hand, &state_with_table("2H"), false);
        assert_eq!(chosen, Card::parse_many("6S 6C 6D 6H").unwrap());

        let chosen = strategy.decide_move(&hand, &state_with_table("8H"), false);
        assert_eq!(chosen, Card::parse_many("9D").unwrap());
    }

    #[test]
    fn test_candidates_include_runs() {
        let moves = BasicStrategy::candidate_moves(&Card::parse_many("3S 3C 4D 4H 5S 5C").unwrap());
        let kinds: Vec<ComboType> = moves.iter().map(Combination::kind).collect();

        assert!(kinds.contains(&ComboType::StraightBomb));
        assert!(kinds.contains(&ComboType::Straight));
        assert!(kinds.contains(&ComboType::Pair));
        assert!(moves.iter().all(|combo| combo.kind() != ComboType::Invalid));
    }

    #[test]
    fn test_strategy_name() {
        assert_eq!(BasicStrategy::new().strategy_name(), "BasicStrategy");
    }
}
