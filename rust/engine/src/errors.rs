use thiserror::Error;

use crate::cards::Card;

/// Rejection of a player action whose preconditions do not hold.
///
/// This is the only error [`crate::engine::react`] returns. It carries an
/// optional human-readable detail but no machine-readable subcode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid move.{}", detail_suffix(.detail))]
pub struct InvalidMove {
    pub detail: Option<String>,
}

impl InvalidMove {
    pub fn new() -> Self {
        Self { detail: None }
    }

    pub fn because(detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
        }
    }
}

impl Default for InvalidMove {
    fn default() -> Self {
        Self::new()
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!(" {}", d),
        None => String::new(),
    }
}

/// Programming errors: broken preconditions and violated invariants.
/// Never produced by a legal-or-illegal player action.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid deck: {0}")]
    InvalidDeck(String),
    #[error("Card {0} is not at a playable position")]
    CardNotPlayable(Card),
    #[error("Unrecognized card key {0:?}")]
    InvalidCardKey(String),
    #[error("Table invariant violated: {0}")]
    InvariantViolated(String),
}

/// Failure while replaying a recorded action sequence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error(transparent)]
    Deal(#[from] EngineError),
    #[error("Action #{step} rejected: {source}")]
    Rejected { step: usize, source: InvalidMove },
}
