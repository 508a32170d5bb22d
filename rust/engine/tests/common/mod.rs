// Shared table builders for integration tests.
#![allow(dead_code)]

use std::collections::HashSet;

use patience_engine::cards::{generate_deck, Card};
use patience_engine::game::Game;

/// Face-up card from its key, e.g. `c("♥10")`.
pub fn c(key: &str) -> Card {
    Card::from_key(key).expect("valid card key")
}

/// Face-down card from its key.
pub fn down(key: &str) -> Card {
    c(key).face_down()
}

pub fn cards(keys: &[&str]) -> Vec<Card> {
    keys.iter().map(|k| c(k)).collect()
}

/// Builds a table from the given waste, foundations and tableau; every card
/// not placed there goes to the stock in canonical order.
pub fn table(waste: Vec<Card>, foundations: [Vec<Card>; 4], tableau: [Vec<Card>; 7]) -> Game {
    let used: HashSet<Card> = waste
        .iter()
        .chain(foundations.iter().flatten())
        .chain(tableau.iter().flatten())
        .copied()
        .collect();
    let stock = generate_deck()
        .into_iter()
        .filter(|c| !used.contains(c))
        .collect();
    Game::from_zones(stock, waste, foundations, tableau).expect("valid test table")
}

/// A table with only the given tableau columns filled (others empty).
pub fn tableau_only(columns: &[(usize, Vec<Card>)]) -> Game {
    let mut tableau: [Vec<Card>; 7] = Default::default();
    for (i, col) in columns {
        tableau[*i] = col.clone();
    }
    table(Vec::new(), Default::default(), tableau)
}
