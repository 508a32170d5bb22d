use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Represents one of the four suits in a standard 52-card deck.
/// Each suit owns one foundation pile on the table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

/// Card colour, used by the alternating-colour tableau rule.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    pub fn from_symbol(c: char) -> Option<Suit> {
        all_suits().into_iter().find(|s| s.symbol() == c)
    }

    /// Position of the suit in canonical order; also the foundation index.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Represents the rank of a playing card from Ace (lowest) through King.
/// There is no wraparound: Ace has no predecessor and King has no successor.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1), the only rank an empty foundation accepts
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13), the only rank an empty tableau column accepts
    King,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<Rank> {
        let idx = usize::from(v).checked_sub(1)?;
        all_ranks().get(idx).copied()
    }

    /// The rank directly above this one, `None` for King.
    pub fn next(self) -> Option<Rank> {
        Rank::from_value(self.value() + 1)
    }

    /// The rank directly below this one, `None` for Ace.
    pub fn prev(self) -> Option<Rank> {
        Rank::from_value(self.value() - 1)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
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
        }
    }

    pub fn from_symbol(s: &str) -> Option<Rank> {
        all_ranks().into_iter().find(|r| r.symbol() == s)
    }
}

/// A single playing card: suit, rank and which way up it lies.
///
/// Identity is suit and rank only. Two cards compare equal (and hash the
/// same) regardless of `face_down`, so a card keeps its identity when it is
/// flipped.
///
/// ```
/// use patience_engine::cards::{Card, Rank, Suit};
///
/// let hidden = Card::new(Suit::Hearts, Rank::Ten).face_down();
/// assert_eq!(hidden, hidden.face_up());
/// assert_eq!(hidden.key(), "♥10");
/// ```
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card
    pub suit: Suit,
    /// The rank of the card (Ace through King)
    pub rank: Rank,
    /// Whether the card currently lies face down
    #[serde(default)]
    pub face_down: bool,
}

impl Card {
    /// Creates a face-up card.
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_down: false,
        }
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    pub fn face_up(self) -> Self {
        Self {
            face_down: false,
            ..self
        }
    }

    pub fn face_down(self) -> Self {
        Self {
            face_down: true,
            ..self
        }
    }

    /// Stable string identity: suit symbol followed by rank symbol.
    pub fn key(&self) -> String {
        format!("{}{}", self.suit.symbol(), self.rank.symbol())
    }

    /// Inverse of [`Card::key`]. The parsed card is face up.
    pub fn from_key(key: &str) -> Result<Card, EngineError> {
        let mut chars = key.chars();
        let suit = chars.next().and_then(Suit::from_symbol);
        let rank = Rank::from_symbol(chars.as_str());
        match (suit, rank) {
            (Some(suit), Some(rank)) => Ok(Card::new(suit, rank)),
            _ => Err(EngineError::InvalidCardKey(key.to_string())),
        }
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank.symbol())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Card::from_key(s)
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// All 52 cards face up, suit-major (♣ ♦ ♥ ♠) and rank-minor (A..K).
pub fn generate_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::new(s, r));
        }
    }
    v
}
