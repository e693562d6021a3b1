use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cards::Combination;
use super::config::PLAYER_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Table is empty; any valid combination may lead.
    RoundOpen,
    /// A combination is on the table and must be beaten or passed.
    RoundActive,
    GameOver,
}

/// Turn rotation, table and round bookkeeping for one game.
///
/// Whether the opening play must contain the 3 of spades is tracked by the
/// driver, not here.
#[derive(Debug, Clone)]
pub struct GameState {
    player_count: usize,
    current_player: usize,
    active_players: BTreeSet<usize>,
    table_combo: Option<Combination>,
    last_player_to_play: Option<usize>,
    consecutive_passes: usize,
    winner: Option<usize>,
}

impl GameState {
    pub fn new(starting_player: usize) -> Self {
        Self {
            player_count: PLAYER_COUNT,
            current_player: starting_player % PLAYER_COUNT,
            active_players: (0..PLAYER_COUNT).collect(),
            table_combo: None,
            last_player_to_play: None,
            consecutive_passes: 0,
            winner: None,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.check_game_over() {
            Phase::GameOver
        } else if self.table_combo.is_some() {
            Phase::RoundActive
        } else {
            Phase::RoundOpen
        }
    }

    pub fn player_count(&self) -> usize {
        self.player_count
    }

    pub fn current_player(&self) -> usize {
        self.current_player
    }

    pub fn active_players(&self) -> &BTreeSet<usize> {
        &self.active_players
    }

    pub fn is_active(&self, player: usize) -> bool {
        self.active_players.contains(&player)
    }

    pub fn table_combo(&self) -> Option<&Combination> {
        self.table_combo.as_ref()
    }

    pub fn last_player_to_play(&self) -> Option<usize> {
        self.last_player_to_play
    }

    pub fn consecutive_passes(&self) -> usize {
        self.consecutive_passes
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Records an accepted play by the current player.
    pub fn set_table_combo(&mut self, combo: Combination) {
        debug!(player = self.current_player, combo = %combo, "Table combo set");
        self.table_combo = Some(combo);
        self.mark_player_played();
    }

    pub fn mark_player_played(&mut self) {
        self.last_player_to_play = Some(self.current_player);
        self.consecutive_passes = 0;
    }

    pub fn mark_player_passed(&mut self) {
        self.consecutive_passes += 1;
    }

    /// Every active player other than the owner of the table combo has passed.
    ///
    /// If that owner has since gone out, all remaining active players must pass.
    pub fn all_others_passed(&self) -> bool {
        let owner_active = self
            .last_player_to_play
            .is_some_and(|player| self.is_active(player));
        let required = if owner_active {
            self.active_players.len().saturating_sub(1)
        } else {
            self.active_players.len()
        };
        self.table_combo.is_some() && self.consecutive_passes >= required
    }

    /// Clears the table and hands the lead to whoever owns the uncontested combo.
    pub fn reset_round(&mut self) {
        self.table_combo = None;
        self.consecutive_passes = 0;

        if let Some(leader) = self.last_player_to_play {
            self.current_player = leader;
            if !self.is_active(leader) {
                self.next_player();
            }
        }
        debug!(leader = self.current_player, "Round reset");
    }

    pub fn next_player(&mut self) {
        for offset in 1..=self.player_count {
            let candidate = (self.current_player + offset) % self.player_count;
            if self.is_active(candidate) {
                self.current_player = candidate;
                return;
            }
        }
    }

    /// Takes a player out of rotation. Callers must follow with
    /// [`GameState::next_player`] if the removed player held the turn.
    pub fn mark_player_inactive(&mut self, player: usize) {
        self.active_players.remove(&player);
    }

    /// Sets the winner unless one is already declared. Returns whether it took.
    pub fn declare_winner(&mut self, player: usize) -> bool {
        if self.winner.is_some() {
            return false;
        }
        self.winner = Some(player);
        true
    }

    pub fn check_game_over(&self) -> bool {
        self.winner.is_some() || self.active_players.len() <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::cards::Card;

    fn combo(tokens: &str) -> Combination {
        Combination::from_cards(&Card::parse_many(tokens).unwrap()).unwrap()
    }

    #[test]
    fn test_new_state_is_round_open() {
        let state = GameState::new(2);
        assert_eq!(state.current_player(), 2);
        assert_eq!(state.phase(), Phase::RoundOpen);
        assert_eq!(state.active_players().len(), 4);
        assert!(!state.all_others_passed());
        assert!(!state.check_game_over());
    }

    #[test]
    fn test_set_table_combo_moves_to_active() {
        let mut state = GameState::new(0);
        state.mark_player_passed();
        state.set_table_combo(combo("3S"));

        assert_eq!(state.phase(), Phase::RoundActive);
        assert_eq!(state.last_player_to_play(), Some(0));
        assert_eq!(state.consecutive_passes(), 0);
    }

    #[test]
    fn test_all_others_pass_resets_round_to_last_player() {
        let mut state = GameState::new(1);
        state.set_table_combo(combo("7H"));

        for _ in 0..3 {
            state.next_player();
            assert!(!state.all_others_passed());
            state.mark_player_passed();
        }
        assert!(state.all_others_passed());
        assert_eq!(state.current_player(), 0);

        state.reset_round();
        assert_eq!(state.phase(), Phase::RoundOpen);
        assert!(state.table_combo().is_none());
        assert_eq!(state.current_player(), 1);
        assert_eq!(state.consecutive_passes(), 0);
    }

    #[test]
    fn test_next_player_skips_inactive() {
        let mut state = GameState::new(0);
        state.mark_player_inactive(1);
        state.mark_player_inactive(2);
        state.next_player();
        assert_eq!(state.current_player(), 3);
        state.next_player();
        assert_eq!(state.current_player(), 0);
    }

    #[test]
    fn test_fewer_passes_needed_with_fewer_players() {
        let mut state = GameState::new(0);
        state.mark_player_inactive(3);
        state.set_table_combo(combo("9S"));
        state.mark_player_passed();
        assert!(!state.all_others_passed());
        state.mark_player_passed();
        assert!(state.all_others_passed());
    }

    #[test]
    fn test_round_owner_gone_out_passes_lead_on() {
        let mut state = GameState::new(2);
        state.set_table_combo(combo("AS"));
        state.mark_player_inactive(2);
        state.next_player();
        assert_eq!(state.current_player(), 3);

        for _ in 0..3 {
            assert!(!state.all_others_passed());
            state.mark_player_passed();
            state.next_player();
        }
        assert!(state.all_others_passed());

        state.reset_round();
        assert_eq!(state.current_player(), 3);
    }

    #[test]
    fn test_winner_is_set_once() {
        let mut state = GameState::new(0);
        assert!(state.declare_winner(2));
        assert!(!state.declare_winner(3));
        assert_eq!(state.winner(), Some(2));
        assert!(state.check_game_over());
        assert_eq!(state.phase(), Phase::GameOver);
    }

    #[test]
    fn test_game_over_when_one_player_left() {
        let mut state = GameState::new(0);
        state.mark_player_inactive(0);
        state.mark_player_inactive(1);
        assert!(!state.check_game_over());
        state.mark_player_inactive(2);
        assert!(state.check_game_over());
        assert_eq!(state.winner(), None);
    }
}
