use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{generate_deck, Card};

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// A 52-card deck with its own seeded RNG, so a given seed always yields
/// the same sequence of shuffles.
///
/// # Examples
///
/// ```
/// use patience_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(42);
/// let mut b = Deck::new_with_seed(42);
/// a.shuffle();
/// b.shuffle();
/// assert_eq!(a.cards(), b.cards());
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep canonical order until shuffle is called explicitly
        Self {
            cards: generate_deck(),
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = generate_deck();
        self.cards.shuffle(&mut self.rng);
    }

    pub fn reset(&mut self) {
        self.cards = generate_deck();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// One shuffled deck for `seed` (or [`DEFAULT_SEED`]).
pub fn shuffled_deck(seed: Option<u64>) -> Vec<Card> {
    let mut deck = Deck::new_with_seed(seed.unwrap_or(DEFAULT_SEED));
    deck.shuffle();
    deck.into_cards()
}
