// The driving loop: one Game owns the four hands, the state machine and the
// turn history, and folds rejected plays into passes.
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::bot::Strategy;
use crate::game::cards::{Card, ComboType, Combination, Deck, Hand};
use crate::game::config::{GameConfig, PLAYER_COUNT};
use crate::game::errors::GameError;
use crate::game::state::{GameState, Phase};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub hand: Hand,
}

impl Player {
    pub fn new(name: impl Into<String>, hand: Hand) -> Self {
        Self {
            name: name.into(),
            hand,
        }
    }
}

/// Why a non-empty selection was counted as a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    InvalidCombination,
    MissingThreeOfSpades,
    DoesNotBeatTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    Played { cards: Vec<Card>, kind: ComboType },
    Passed,
    Rejected { cards: Vec<Card>, reason: RejectReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    Continue,
    RoundReset,
    Won(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: usize,
    pub player: usize,
    pub action: TurnAction,
    pub outcome: TurnOutcome,
}

/// Read-only view of a game for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub turns: usize,
    pub current_player: usize,
    pub active_players: Vec<usize>,
    pub table_combo: Option<Vec<Card>>,
    pub table_kind: Option<ComboType>,
    pub last_player_to_play: Option<usize>,
    pub consecutive_passes: usize,
    pub winner: Option<usize>,
    pub hand_sizes: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Game {
    players: Vec<Player>,
    state: GameState,
    config: GameConfig,
    first_turn_of_game: bool,
    turns: usize,
    history: Vec<TurnRecord>,
}

impl Game {
    /// Shuffles a fresh deck, deals four hands and seats the holder of the
    /// 3 of spades first.
    pub fn new_game(player_names: &[String], config: GameConfig) -> Result<Self, GameError> {
        if player_names.len() != PLAYER_COUNT {
            return Err(GameError::InvalidPlayerCount {
                expected: PLAYER_COUNT,
                actual: player_names.len(),
            });
        }

        let mut deck = Deck::new();
        match config.seed {
            Some(seed) => deck.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => deck.shuffle(&mut rand::rng()),
        }

        let players = player_names
            .iter()
            .zip(deck.deal(PLAYER_COUNT)?)
            .map(|(name, hand)| Player::new(name.clone(), hand))
            .collect();

        Self::from_players(players, config)
    }

    /// Builds a game from pre-dealt hands. If nobody holds the 3 of spades,
    /// player 0 leads and the opening restriction is lifted.
    pub fn from_players(players: Vec<Player>, config: GameConfig) -> Result<Self, GameError> {
        if players.len() != PLAYER_COUNT {
            return Err(GameError::InvalidPlayerCount {
                expected: PLAYER_COUNT,
                actual: players.len(),
            });
        }

        let opener = players.iter().position(|p| p.hand.find_three_of_spades());
        let starting_player = opener.unwrap_or(0);

        info!(
            starting_player,
            name = %players[starting_player].name,
            seed = ?config.seed,
            "Starting game"
        );

        Ok(Self {
            players,
            state: GameState::new(starting_player),
            config,
            first_turn_of_game: opener.is_some(),
            turns: 0,
            history: Vec::new(),
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn winner(&self) -> Option<usize> {
        self.state.winner()
    }

    pub fn current_player_turn(&self) -> &str {
        &self.players[self.state.current_player()].name
    }

    /// True until the first play of the game has been accepted.
    pub fn first_turn_of_game(&self) -> bool {
        self.first_turn_of_game
    }

    pub fn must_open_with_three_of_spades(&self) -> bool {
        self.first_turn_of_game && self.state.table_combo().is_none()
    }

    /// Checks a non-empty selection against the table without changing anything.
    pub fn validate_play(&self, cards: &[Card]) -> Result<Combination, RejectReason> {
        let combo =
            Combination::from_cards(cards).map_err(|_| RejectReason::InvalidCombination)?;

        match self.state.table_combo() {
            None if self.first_turn_of_game && !combo.contains_three_of_spades() => {
                Err(RejectReason::MissingThreeOfSpades)
            }
            None => Ok(combo),
            Some(table) if combo.beats(table, &self.config.rules) => Ok(combo),
            Some(_) => Err(RejectReason::DoesNotBeatTable),
        }
    }

    /// Plays one turn for the current player. An empty selection is a pass;
    /// an invalid or losing selection is recorded as a rejected pass.
    pub fn play_turn(&mut self, selection: &[Card]) -> Result<TurnOutcome, GameError> {
        if self.state.check_game_over() {
            return Err(GameError::GameOver);
        }

        let player = self.state.current_player();
        if let Some(card) = selection
            .iter()
            .find(|card| !self.players[player].hand.contains(card))
        {
            return Err(GameError::CardNotInHand(*card));
        }

        self.turns += 1;

        let action = if selection.is_empty() {
            debug!(player, turn = self.turns, "Pass");
            TurnAction::Passed
        } else {
            match self.validate_play(selection) {
                Ok(combo) => {
                    self.players[player].hand.remove_cards(selection)?;
                    let action = TurnAction::Played {
                        cards: combo.cards().to_vec(),
                        kind: combo.kind(),
                    };
                    debug!(player, turn = self.turns, combo = %combo, "Play accepted");
                    self.state.set_table_combo(combo);
                    self.first_turn_of_game = false;
                    action
                }
                Err(reason) => {
                    debug!(
                        player,
                        turn = self.turns,
                        ?reason,
                        cards = ?selection,
                        "Play rejected, counted as pass"
                    );
                    TurnAction::Rejected {
                        cards: selection.to_vec(),
                        reason,
                    }
                }
            }
        };

        let outcome = match action {
            TurnAction::Played { .. } => self.finish_play(player),
            TurnAction::Passed | TurnAction::Rejected { .. } => self.record_pass(),
        };

        self.history.push(TurnRecord {
            turn: self.turns,
            player,
            action,
            outcome,
        });

        Ok(outcome)
    }

    fn finish_play(&mut self, player: usize) -> TurnOutcome {
        if self.players[player].hand.is_empty() {
            self.state.mark_player_inactive(player);
            self.state.declare_winner(player);
            info!(player, name = %self.players[player].name, turns = self.turns, "Player won");
            return TurnOutcome::Won(player);
        }

        self.state.next_player();
        TurnOutcome::Continue
    }

    fn record_pass(&mut self) -> TurnOutcome {
        // Nothing to contest on an open table; the lead moves on.
        if self.state.table_combo().is_none() {
            self.state.next_player();
            return TurnOutcome::Continue;
        }

        self.state.mark_player_passed();
        if self.state.all_others_passed() {
            self.state.reset_round();
            TurnOutcome::RoundReset
        } else {
            self.state.next_player();
            TurnOutcome::Continue
        }
    }

    /// Drives the game with one strategy per seat until someone wins.
    ///
    /// Hitting the configured turn limit is an abnormal end and is returned
    /// as [`GameError::TurnLimitExceeded`].
    pub fn run(&mut self, strategies: &[Box<dyn Strategy>]) -> Result<usize, GameError> {
        if strategies.len() != self.players.len() {
            return Err(GameError::InvalidPlayerCount {
                expected: self.players.len(),
                actual: strategies.len(),
            });
        }

        loop {
            if self.state.check_game_over() {
                return self.state.winner().ok_or(GameError::GameOver);
            }
            if self.turns >= self.config.turn_limit {
                warn!(turn_limit = self.config.turn_limit, "Turn limit reached without a winner");
                return Err(GameError::TurnLimitExceeded(self.config.turn_limit));
            }

            let player = self.state.current_player();
            let selection = strategies[player].decide_move(
                &self.players[player].hand,
                &self.state,
                self.must_open_with_three_of_spades(),
            );
            self.play_turn(&selection)?;
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let table = self.state.table_combo();
        GameSnapshot {
            phase: self.state.phase(),
            turns: self.turns,
            current_player: self.state.current_player(),
            active_players: self.state.active_players().iter().copied().collect(),
            table_combo: table.map(|combo| combo.cards().to_vec()),
            table_kind: table.map(Combination::kind),
            last_player_to_play: self.state.last_player_to_play(),
            consecutive_passes: self.state.consecutive_passes(),
            winner: self.state.winner(),
            hand_sizes: self.players.iter().map(|p| p.hand.card_count()).collect(),
        }
    }
}
