use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::{all_suits, Card, Suit, DECK_SIZE};
use crate::deck::shuffled_deck;
use crate::errors::EngineError;
use crate::rules::is_valid_run;

/// Number of tableau columns in the deal.
pub const TABLEAU_COLUMNS: usize = 7;

/// Cards dealt into the tableau: 1 + 2 + ... + 7.
pub const TABLEAU_DEAL: usize = TABLEAU_COLUMNS * (TABLEAU_COLUMNS + 1) / 2;

/// Immutable snapshot of where every card lies.
///
/// The four zones together always hold exactly the 52-card deck. A `Game`
/// is never changed in place by the engine: [`crate::engine::react`]
/// borrows one and returns the next.
///
/// Equality compares every zone card by card, facing included, so two
/// tables differing only in a flipped card are not equal. Deserializing
/// runs [`Game::check_invariants`] and refuses a broken table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawGame")]
pub struct Game {
    /// Face-down draw pile; cards are drawn from the end
    pub(crate) stock: Vec<Card>,
    /// Face-up cards drawn from the stock; only the last is playable
    pub(crate) waste: Vec<Card>,
    /// One ascending pile per suit, indexed by [`Suit::index`]
    pub(crate) foundations: [Vec<Card>; 4],
    /// Dealt columns, a face-down prefix followed by a face-up run
    pub(crate) tableau: [Vec<Card>; TABLEAU_COLUMNS],
}

/// Wire shape of [`Game`] before its invariants are checked.
#[derive(Deserialize)]
struct RawGame {
    stock: Vec<Card>,
    waste: Vec<Card>,
    foundations: [Vec<Card>; 4],
    tableau: [Vec<Card>; TABLEAU_COLUMNS],
}

impl TryFrom<RawGame> for Game {
    type Error = EngineError;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        let game = Game {
            stock: raw.stock,
            waste: raw.waste,
            foundations: raw.foundations,
            tableau: raw.tableau,
        };
        game.check_invariants()?;
        Ok(game)
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        same_pile(&self.stock, &other.stock)
            && same_pile(&self.waste, &other.waste)
            && self
                .foundations
                .iter()
                .zip(&other.foundations)
                .all(|(a, b)| same_pile(a, b))
            && self
                .tableau
                .iter()
                .zip(&other.tableau)
                .all(|(a, b)| same_pile(a, b))
    }
}

impl Eq for Game {}

// Card equality ignores facing; table equality must not.
fn same_pile(a: &[Card], b: &[Card]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| x == y && x.face_down == y.face_down)
}

impl Game {
    /// Builds a table from explicit zones and checks it.
    ///
    /// Stock cards are turned face down, waste and foundation cards face
    /// up; tableau cards keep the facing they are given.
    pub fn from_zones(
        stock: Vec<Card>,
        waste: Vec<Card>,
        foundations: [Vec<Card>; 4],
        tableau: [Vec<Card>; TABLEAU_COLUMNS],
    ) -> Result<Game, EngineError> {
        let game = Game {
            stock: stock.into_iter().map(Card::face_down).collect(),
            waste: waste.into_iter().map(Card::face_up).collect(),
            foundations: foundations.map(|pile| pile.into_iter().map(Card::face_up).collect()),
            tableau,
        };
        game.check_invariants()?;
        Ok(game)
    }

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    pub fn foundation(&self, suit: Suit) -> &[Card] {
        &self.foundations[suit.index()]
    }

    pub fn foundation_top(&self, suit: Suit) -> Option<&Card> {
        self.foundations[suit.index()].last()
    }

    pub fn tableau(&self) -> &[Vec<Card>; TABLEAU_COLUMNS] {
        &self.tableau
    }

    pub fn column(&self, column: usize) -> Option<&[Card]> {
        self.tableau.get(column).map(Vec::as_slice)
    }

    /// True when the column's last card is face down and waits for a flip.
    pub fn needs_flip(&self, column: usize) -> bool {
        self.tableau
            .get(column)
            .and_then(|c| c.last())
            .is_some_and(|c| c.face_down)
    }

    /// Every card on the table: stock, waste, foundations, then tableau.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flatten())
            .chain(self.tableau.iter().flatten())
    }

    /// Face-up tableau cards, column by column.
    pub fn movable_tableau_cards(&self) -> Vec<Card> {
        self.tableau
            .iter()
            .flat_map(|col| col.iter().filter(|c| !c.face_down).copied())
            .collect()
    }

    /// Verifies the table invariants: the zones hold exactly the full deck,
    /// each zone has the right facing, foundations ascend from Ace in their
    /// own suit and every tableau column is a face-down prefix followed by a
    /// valid face-up run.
    pub fn check_invariants(&self) -> Result<(), EngineError> {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in self.all_cards() {
            if !seen.insert(*card) {
                return Err(EngineError::InvariantViolated(format!(
                    "card {} appears more than once",
                    card
                )));
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(EngineError::InvariantViolated(format!(
                "table holds {} cards, expected {}",
                seen.len(),
                DECK_SIZE
            )));
        }

        if let Some(c) = self.stock.iter().find(|c| !c.face_down) {
            return Err(EngineError::InvariantViolated(format!(
                "stock card {} is face up",
                c
            )));
        }
        if let Some(c) = self.waste.iter().find(|c| c.face_down) {
            return Err(EngineError::InvariantViolated(format!(
                "waste card {} is face down",
                c
            )));
        }

        for suit in all_suits() {
            for (i, card) in self.foundation(suit).iter().enumerate() {
                let in_place = card.suit == suit
                    && usize::from(card.rank.value()) == i + 1
                    && !card.face_down;
                if !in_place {
                    return Err(EngineError::InvariantViolated(format!(
                        "card {} out of place on the {:?} foundation",
                        card, suit
                    )));
                }
            }
        }

        for (i, col) in self.tableau.iter().enumerate() {
            let hidden = col.iter().take_while(|c| c.face_down).count();
            if !is_valid_run(&col[hidden..]) {
                return Err(EngineError::InvariantViolated(format!(
                    "column {} face-up cards do not form a run",
                    i
                )));
            }
        }
        Ok(())
    }
}

/// Deals the fixed layout from `deck`.
///
/// Column `i` receives `i` face-down cards and then one face-up card, each
/// taken from the end of `deck`. The 24 cards left over become the stock
/// in their original order.
///
/// # Errors
///
/// [`EngineError::InvalidDeck`] unless `deck` holds exactly 52 distinct
/// cards.
///
/// # Examples
///
/// ```
/// use patience_engine::cards::generate_deck;
/// use patience_engine::game::generate_game;
///
/// let game = generate_game(&generate_deck()).unwrap();
/// let lengths: Vec<usize> = game.tableau().iter().map(Vec::len).collect();
/// assert_eq!(lengths, [1, 2, 3, 4, 5, 6, 7]);
/// assert_eq!(game.stock().len(), 24);
/// ```
pub fn generate_game(deck: &[Card]) -> Result<Game, EngineError> {
    if deck.len() != DECK_SIZE {
        return Err(EngineError::InvalidDeck(format!(
            "expected {} cards, got {}",
            DECK_SIZE,
            deck.len()
        )));
    }
    let mut seen = HashSet::with_capacity(DECK_SIZE);
    if let Some(dup) = deck.iter().find(|c| !seen.insert(**c)) {
        return Err(EngineError::InvalidDeck(format!(
            "card {} appears more than once",
            dup
        )));
    }

    let mut deck = deck.to_vec();
    let mut tableau: [Vec<Card>; TABLEAU_COLUMNS] = Default::default();
    for (i, col) in tableau.iter_mut().enumerate() {
        for _ in 0..=i {
            let card = deck
                .pop()
                .ok_or_else(|| EngineError::InvalidDeck("ran out of cards".into()))?;
            col.push(card.face_down());
        }
        if let Some(top) = col.last_mut() {
            *top = top.face_up();
        }
    }

    Ok(Game {
        stock: deck.into_iter().map(Card::face_down).collect(),
        waste: Vec::new(),
        foundations: Default::default(),
        tableau,
    })
}

/// Shuffles a fresh deck with `seed` (or the default seed) and deals it.
pub fn new_game(seed: Option<u64>) -> Result<Game, EngineError> {
    generate_game(&shuffled_deck(seed))
}
