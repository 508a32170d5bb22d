use serde::{Deserialize, Serialize};

use crate::cards::Suit;

/// Where a moved card (or run of cards) is taken from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoveSource {
    /// Top card of the waste
    FromWaste,
    /// Top card of the given suit's foundation
    FromFoundation { suit: Suit },
    /// The run starting at `card_index` in tableau column `column`
    FromTableau { column: usize, card_index: usize },
}

/// Where a moved card (or run of cards) is placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoveDestination {
    /// Onto the given suit's foundation
    ToFoundation { suit: Suit },
    /// Onto the end of tableau column `column`
    ToTableau { column: usize },
}

/// Every intent a player can issue. The engine matches on this
/// exhaustively, so a new variant must be handled everywhere it is consumed.
///
/// ```
/// use patience_engine::action::{Action, MoveDestination, MoveSource};
///
/// let action = Action::Move {
///     source: MoveSource::FromWaste,
///     destination: MoveDestination::ToTableau { column: 3 },
/// };
/// let json = serde_json::to_string(&action).unwrap();
/// assert_eq!(serde_json::from_str::<Action>(&json).unwrap(), action);
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Move a card or run between zones
    Move {
        source: MoveSource,
        destination: MoveDestination,
    },
    /// Draw the top stock card onto the waste
    OpenDeck,
    /// Reveal the face-down card at the end of a tableau column
    FlipCard { column: usize },
}

impl Action {
    pub fn move_card(source: MoveSource, destination: MoveDestination) -> Self {
        Action::Move {
            source,
            destination,
        }
    }
}
