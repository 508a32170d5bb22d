use tracing::debug;

use crate::action::{Action, MoveDestination, MoveSource};
use crate::cards::{Card, Suit};
use crate::errors::{InvalidMove, ReplayError};
use crate::game::{generate_game, Game};
use crate::rules::{can_place_on_column, can_place_on_foundation, is_valid_run};

/// Applies `action` to `game` and returns the next table state.
///
/// `game` is only borrowed and is never modified. On success the returned
/// value is a complete new state; on failure nothing has been applied and
/// the caller keeps using `game`.
///
/// # Errors
///
/// [`InvalidMove`] when the action's preconditions do not hold: drawing
/// from an empty stock, flipping a face-up or missing card, or a move that
/// breaks the foundation or tableau placement rules.
///
/// # Examples
///
/// ```
/// use patience_engine::action::Action;
/// use patience_engine::engine::react;
/// use patience_engine::game::new_game;
///
/// let game = new_game(Some(7)).unwrap();
/// let next = react(&game, Action::OpenDeck).unwrap();
/// assert_eq!(next.waste().len(), 1);
/// assert_eq!(next.stock().len(), game.stock().len() - 1);
/// // the prior state is untouched
/// assert!(game.waste().is_empty());
/// ```
pub fn react(game: &Game, action: Action) -> Result<Game, InvalidMove> {
    let result = match action {
        Action::Move {
            source,
            destination,
        } => move_cards(game, source, destination),
        Action::OpenDeck => open_deck(game),
        Action::FlipCard { column } => flip_card(game, column),
    };
    match &result {
        Ok(_) => debug!(?action, "action applied"),
        Err(e) => debug!(?action, error = %e, "action rejected"),
    }
    result
}

/// Deals `deck` and applies `actions` in order.
///
/// Replaying the same deck and actions always produces the same table.
///
/// # Errors
///
/// [`ReplayError::Deal`] if `deck` is not a full deck, or
/// [`ReplayError::Rejected`] naming the zero-based index of the first
/// action `react` refuses.
pub fn replay(deck: &[Card], actions: &[Action]) -> Result<Game, ReplayError> {
    let initial = generate_game(deck)?;
    actions
        .iter()
        .enumerate()
        .try_fold(initial, |game, (step, action)| {
            react(&game, *action).map_err(|source| ReplayError::Rejected { step, source })
        })
}

fn move_cards(
    game: &Game,
    source: MoveSource,
    destination: MoveDestination,
) -> Result<Game, InvalidMove> {
    use MoveDestination as D;
    use MoveSource as S;

    match (source, destination) {
        (S::FromWaste, D::ToFoundation { suit }) => move_waste_to_foundation(game, suit),
        (S::FromWaste, D::ToTableau { column }) => move_waste_to_tableau(game, column),
        (S::FromFoundation { .. }, D::ToFoundation { .. }) => Err(InvalidMove::because(
            "foundation cards cannot move to another foundation",
        )),
        (S::FromFoundation { suit }, D::ToTableau { column }) => {
            move_foundation_to_tableau(game, suit, column)
        }
        (S::FromTableau { column, card_index }, D::ToFoundation { suit }) => {
            move_tableau_to_foundation(game, column, card_index, suit)
        }
        (S::FromTableau { column, card_index }, D::ToTableau { column: to }) => {
            move_tableau_to_tableau(game, column, card_index, to)
        }
    }
}

fn check_foundation(game: &Game, suit: Suit, card: &Card) -> Result<(), InvalidMove> {
    if can_place_on_foundation(game, suit, card) {
        Ok(())
    } else {
        Err(InvalidMove::because(format!(
            "{} cannot go on the {:?} foundation",
            card, suit
        )))
    }
}

fn check_column(game: &Game, column: usize, card: &Card) -> Result<(), InvalidMove> {
    if can_place_on_column(game, column, card) {
        Ok(())
    } else {
        Err(InvalidMove::because(format!(
            "{} cannot go on column {}",
            card, column
        )))
    }
}

fn waste_top(game: &Game) -> Result<Card, InvalidMove> {
    game.waste_top()
        .copied()
        .ok_or_else(|| InvalidMove::because("waste is empty"))
}

fn move_waste_to_foundation(game: &Game, suit: Suit) -> Result<Game, InvalidMove> {
    let card = waste_top(game)?;
    check_foundation(game, suit, &card)?;

    let mut next = game.clone();
    next.waste.pop();
    next.foundations[suit.index()].push(card);
    Ok(next)
}

fn move_waste_to_tableau(game: &Game, column: usize) -> Result<Game, InvalidMove> {
    let card = waste_top(game)?;
    check_column(game, column, &card)?;

    let mut next = game.clone();
    next.waste.pop();
    next.tableau[column].push(card);
    Ok(next)
}

fn move_foundation_to_tableau(game: &Game, suit: Suit, column: usize) -> Result<Game, InvalidMove> {
    let card = game
        .foundation_top(suit)
        .copied()
        .ok_or_else(|| InvalidMove::because(format!("{:?} foundation is empty", suit)))?;
    if card.face_down {
        return Err(InvalidMove::because("foundation card is face down"));
    }
    check_column(game, column, &card)?;

    let mut next = game.clone();
    next.foundations[suit.index()].pop();
    next.tableau[column].push(card);
    Ok(next)
}

fn move_tableau_to_foundation(
    game: &Game,
    column: usize,
    card_index: usize,
    suit: Suit,
) -> Result<Game, InvalidMove> {
    let col = game
        .column(column)
        .ok_or_else(|| InvalidMove::because(format!("no column {}", column)))?;
    let card = match col.last() {
        Some(top) if card_index == col.len() - 1 => *top,
        Some(_) => {
            return Err(InvalidMove::because(
                "only the last card of a column can go to a foundation",
            ))
        }
        None => return Err(InvalidMove::because(format!("column {} is empty", column))),
    };
    if card.face_down {
        return Err(InvalidMove::because(format!("{} is face down", card)));
    }
    check_foundation(game, suit, &card)?;

    let mut next = game.clone();
    next.tableau[column].pop();
    next.foundations[suit.index()].push(card);
    Ok(next)
}

fn move_tableau_to_tableau(
    game: &Game,
    from: usize,
    card_index: usize,
    to: usize,
) -> Result<Game, InvalidMove> {
    if from == to {
        return Err(InvalidMove::because("source and destination column are the same"));
    }
    let col = game
        .column(from)
        .ok_or_else(|| InvalidMove::because(format!("no column {}", from)))?;
    let run = col
        .get(card_index..)
        .filter(|run| !run.is_empty())
        .ok_or_else(|| {
            InvalidMove::because(format!("no card at index {} of column {}", card_index, from))
        })?;
    let head = run[0];
    if head.face_down {
        return Err(InvalidMove::because(format!("{} is face down", head)));
    }
    if !is_valid_run(run) {
        return Err(InvalidMove::because("cards below the head do not form a run"));
    }
    check_column(game, to, &head)?;

    let mut next = game.clone();
    let moved = next.tableau[from].split_off(card_index);
    next.tableau[to].extend(moved);
    Ok(next)
}

fn open_deck(game: &Game) -> Result<Game, InvalidMove> {
    let mut next = game.clone();
    let card = next
        .stock
        .pop()
        .ok_or_else(|| InvalidMove::because("stock is empty"))?;
    next.waste.push(card.face_up());
    Ok(next)
}

fn flip_card(game: &Game, column: usize) -> Result<Game, InvalidMove> {
    let card = game
        .column(column)
        .ok_or_else(|| InvalidMove::because(format!("no column {}", column)))?
        .last()
        .copied()
        .ok_or_else(|| InvalidMove::because(format!("column {} is empty", column)))?;
    if !card.face_down {
        return Err(InvalidMove::because(format!("{} is already face up", card)));
    }

    let mut next = game.clone();
    if let Some(top) = next.tableau[column].last_mut() {
        *top = card.face_up();
    }
    Ok(next)
}
