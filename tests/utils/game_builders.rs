use tienlen::{Card, Game, GameConfig, Hand, Player};

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($rank:ident $suit:ident),* $(,)?) => {
        vec![$(tienlen::Card::new(tienlen::Rank::$rank, tienlen::Suit::$suit)),*]
    };
}

// ============================================================================
// Game Setup Utilities
// ============================================================================

pub struct GameBuilder {
    player_cards: Vec<(String, Vec<Card>)>,
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            player_cards: vec![],
            config: GameConfig::default(),
        }
    }

    /// Create a simple four-player game scenario
    pub fn with_simple_four_player_game(self) -> Self {
        self.with_cards(vec![
            ("alice", cards![Three Spades, Four Hearts, Five Spades]), // Alice has 3S, goes first
            ("bob", cards![Six Clubs, Seven Diamonds, Eight Hearts]),
            ("charlie", cards![Nine Spades, Ten Clubs, Jack Diamonds]),
            ("david", cards![Queen Hearts, King Spades, Ace Clubs]),
        ])
    }

    /// Create a scenario with twos and bombs for testing cut rules
    pub fn with_bomb_scenario(self) -> Self {
        self.with_cards(vec![
            ("alice", cards![Three Spades, Two Hearts, Two Clubs, Nine Diamonds]),
            (
                "bob",
                cards![Four Spades, Four Clubs, Five Diamonds, Five Hearts, Six Spades, Six Clubs, Jack Hearts],
            ),
            ("charlie", cards![Eight Spades, Eight Clubs, Eight Diamonds, Eight Hearts, Ten Spades]),
            ("david", cards![Queen Hearts, King Spades, Ace Clubs]),
        ])
    }

    /// Create a custom game with specific card distributions
    pub fn with_cards(mut self, cards: Vec<(&str, Vec<Card>)>) -> Self {
        self.player_cards = cards
            .into_iter()
            .map(|(name, cards)| (name.to_string(), cards))
            .collect();
        self
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the game; with no custom cards a seeded random deal is used
    pub fn build(self) -> Game {
        if self.player_cards.is_empty() {
            let names: Vec<String> = ["alice", "bob", "charlie", "david"]
                .iter()
                .map(|s| s.to_string())
                .collect();
            return Game::new_game(&names, self.config).unwrap();
        }

        let players = self
            .player_cards
            .into_iter()
            .map(|(name, cards)| Player::new(name, Hand::new(cards)))
            .collect();
        Game::from_players(players, self.config).unwrap()
    }
}
