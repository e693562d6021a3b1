use crate::game::{Card, GameState, Hand};

/// Trait for bot decision-making strategies.
///
/// Called once per turn by the driving loop and must return before the game
/// state changes. The game only validates what it is handed.
pub trait Strategy: Send + Sync {
    /// Decide which cards to play from `hand`. An empty selection is a pass.
    fn decide_move(
        &self,
        hand: &Hand,
        state: &GameState,
        must_open_with_three_of_spades: bool,
    ) -> Vec<Card>;

    /// Get the name of this strategy
    fn strategy_name(&self) -> &'static str;
}
