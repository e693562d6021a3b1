use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::game::errors::GameError;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Suit {
    Spades = 0,
    Clubs = 1,
    Diamonds = 2,
    Hearts = 3,
}

impl Suit {
    pub fn glyph(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
        }
    }
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Spades => "S",
                Suit::Clubs => "C",
                Suit::Diamonds => "D",
                Suit::Hearts => "H",
            }
        )
    }
}

impl TryFrom<&str> for Suit {
    type Error = GameError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "S" | "s" | "♠" => Ok(Suit::Spades),
            "C" | "c" | "♣" => Ok(Suit::Clubs),
            "D" | "d" | "♦" => Ok(Suit::Diamonds),
            "H" | "h" | "♥" => Ok(Suit::Hearts),
            _ => Err(GameError::MalformedCardToken(s.to_string())),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Rank {
    Three = 0,
    Four = 1,
    Five = 2,
    Six = 3,
    Seven = 4,
    Eight = 5,
    Nine = 6,
    Ten = 7,
    Jack = 8,
    Queen = 9,
    King = 10,
    Ace = 11,
    Two = 12,
}

impl Rank {
    /// Numeric strength used for straight adjacency: 3 through 10 map to
    /// themselves, J=11, Q=12, K=13, A=14, 2=15.
    pub fn height(&self) -> u8 {
        *self as u8 + 3
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Three => "3",
                Rank::Four => "4",
                Rank::Five => "5",
                Rank::Six => "6",
                Rank::Seven => "7",
                Rank::Eight => "8",
                Rank::Nine => "9",
                Rank::Ten => "10",
                Rank::Jack => "J",
                Rank::Queen => "Q",
                Rank::King => "K",
                Rank::Ace => "A",
                Rank::Two => "2",
            }
        )
    }
}

impl TryFrom<&str> for Rank {
    type Error = GameError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_uppercase().as_str() {
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            "2" => Ok(Rank::Two),
            _ => Err(GameError::MalformedCardToken(s.to_string())),
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (*self as u8).cmp(&(*other as u8))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

/// The card that must be part of the first play of every game.
pub const THREE_OF_SPADES: Card = Card {
    rank: Rank::Three,
    suit: Suit::Spades,
};

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.rank.cmp(&other.rank) {
            std::cmp::Ordering::Equal => self.suit.cmp(&other.suit),
            other => other,
        }
    }
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn height(&self) -> u8 {
        self.rank.height()
    }

    /// Parses tokens such as `3S`, `10h`, `TD` or `K♥`.
    pub fn from_string(s: &str) -> Result<Self, GameError> {
        let token = s.trim();
        let malformed = || GameError::MalformedCardToken(s.to_string());

        let suit_char = token.chars().last().ok_or_else(malformed)?;
        let rank_part = &token[..token.len() - suit_char.len_utf8()];
        if rank_part.is_empty() {
            return Err(malformed());
        }

        let mut buf = [0u8; 4];
        let rank = Rank::try_from(rank_part).map_err(|_| malformed())?;
        let suit = Suit::try_from(&*suit_char.encode_utf8(&mut buf)).map_err(|_| malformed())?;

        Ok(Self::new(rank, suit))
    }

    /// Parses a whitespace-separated list of card tokens.
    pub fn parse_many(s: &str) -> Result<Vec<Card>, GameError> {
        s.split_whitespace().map(Card::from_string).collect()
    }

    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(52);
        for rank in Rank::iter() {
            for suit in Suit::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_string(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
