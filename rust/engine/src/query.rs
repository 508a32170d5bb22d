//! Read-only helpers for the input layer: where a card can go, where it is
//! played from, and what moves along with it. They share the placement
//! rules with [`crate::engine::react`] so no rule logic needs repeating
//! outside the engine.

use crate::action::{Action, MoveDestination, MoveSource};
use crate::cards::{all_suits, Card, Suit};
use crate::errors::EngineError;
use crate::game::{Game, TABLEAU_COLUMNS};
use crate::rules::{can_place_on_column, can_place_on_foundation, is_valid_run};

/// Foundations that would accept `card` right now.
pub fn get_possible_stack_destinations(game: &Game, card: &Card) -> Vec<Suit> {
    all_suits()
        .into_iter()
        .filter(|&suit| can_place_on_foundation(game, suit, card))
        .collect()
}

/// Tableau columns that would accept `card` right now.
pub fn get_possible_bar_destinations(game: &Game, card: &Card) -> Vec<usize> {
    (0..TABLEAU_COLUMNS)
        .filter(|&column| can_place_on_column(game, column, card))
        .collect()
}

/// Locates the playable position of `card`.
///
/// Looks at the waste top, then face-up tableau cards column by column,
/// then the foundation tops.
///
/// # Errors
///
/// [`EngineError::CardNotPlayable`] when the card is buried, face down or
/// in the stock. Callers are expected to ask only about cards they saw
/// face up, so this is a programming error rather than a rejected move.
pub fn generate_source(game: &Game, card: &Card) -> Result<MoveSource, EngineError> {
    if game.waste_top() == Some(card) {
        return Ok(MoveSource::FromWaste);
    }

    for (column, col) in game.tableau().iter().enumerate() {
        let found = col.iter().position(|c| !c.face_down && c == card);
        if let Some(card_index) = found {
            return Ok(MoveSource::FromTableau { column, card_index });
        }
    }

    all_suits()
        .into_iter()
        .find(|&suit| game.foundation_top(suit) == Some(card))
        .map(|suit| MoveSource::FromFoundation { suit })
        .ok_or(EngineError::CardNotPlayable(*card))
}

/// The cards that move together when `card` is picked up: its face-up
/// tableau run through the end of the column, or just the card when it is
/// the waste top. Empty for any other card.
pub fn get_card_group(game: &Game, card: &Card) -> Vec<Card> {
    for col in game.tableau() {
        if let Some(i) = col.iter().position(|c| c == card) {
            if col[i].face_down {
                return Vec::new();
            }
            return col[i..].to_vec();
        }
    }

    match game.waste_top() {
        Some(top) if top == card => vec![*top],
        _ => Vec::new(),
    }
}

/// Every action [`crate::engine::react`] would accept on `game`.
///
/// Order: draw, flips, waste moves, tableau moves, foundation moves.
pub fn legal_actions(game: &Game) -> Vec<Action> {
    let mut actions = Vec::new();

    if !game.stock().is_empty() {
        actions.push(Action::OpenDeck);
    }
    for column in 0..TABLEAU_COLUMNS {
        if game.needs_flip(column) {
            actions.push(Action::FlipCard { column });
        }
    }

    if let Some(card) = game.waste_top() {
        push_moves(game, MoveSource::FromWaste, card, true, &mut actions);
    }

    for (column, col) in game.tableau().iter().enumerate() {
        let first_up = col.iter().take_while(|c| c.face_down).count();
        for card_index in first_up..col.len() {
            if !is_valid_run(&col[card_index..]) {
                continue;
            }
            let is_last = card_index + 1 == col.len();
            let source = MoveSource::FromTableau { column, card_index };
            push_moves(game, source, &col[card_index], is_last, &mut actions);
        }
    }

    for suit in all_suits() {
        if let Some(card) = game.foundation_top(suit) {
            let source = MoveSource::FromFoundation { suit };
            push_moves(game, source, card, false, &mut actions);
        }
    }
    actions
}

fn push_moves(
    game: &Game,
    source: MoveSource,
    card: &Card,
    to_foundation: bool,
    out: &mut Vec<Action>,
) {
    let from_column = match source {
        MoveSource::FromTableau { column, .. } => Some(column),
        _ => None,
    };
    for column in get_possible_bar_destinations(game, card) {
        if from_column != Some(column) {
            out.push(Action::move_card(source, MoveDestination::ToTableau { column }));
        }
    }
    if to_foundation {
        for suit in get_possible_stack_destinations(game, card) {
            out.push(Action::move_card(source, MoveDestination::ToFoundation { suit }));
        }
    }
}
