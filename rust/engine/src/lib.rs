//! # patience-engine: Klondike Rule Engine Core
//!
//! A deterministic, side-effect-free rule engine for single-player Klondike
//! patience (draw one). Given a table state and a proposed action it decides
//! whether the action is legal and, if so, returns the next table state.
//! Rendering, input handling and animation live outside this crate; they
//! read [`game::Game`] and [`query`] results and feed [`action::Action`]s
//! back into [`engine::react`].
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and string keys
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`game`] - Table state, the initial deal and invariant checks
//! - [`action`] - The closed set of player actions
//! - [`rules`] - Foundation and tableau placement predicates
//! - [`engine`] - The state transition function and replay
//! - [`query`] - Read-only helpers for discovering legal moves
//! - [`config`] - Shuffle seed settings from file and environment
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use patience_engine::action::{Action, MoveDestination};
//! use patience_engine::engine::react;
//! use patience_engine::game::new_game;
//! use patience_engine::query::{generate_source, get_possible_bar_destinations};
//!
//! let mut game = new_game(Some(42)).unwrap();
//!
//! // Draw until the waste top fits somewhere on the tableau, or the stock runs out
//! while let Ok(next) = react(&game, Action::OpenDeck) {
//!     game = next;
//!     let card = *game.waste_top().unwrap();
//!     if let Some(&column) = get_possible_bar_destinations(&game, &card).first() {
//!         let source = generate_source(&game, &card).unwrap();
//!         let destination = MoveDestination::ToTableau { column };
//!         game = react(&game, Action::Move { source, destination }).unwrap();
//!         break;
//!     }
//! }
//! assert!(game.check_invariants().is_ok());
//! ```
//!
//! ## Errors
//!
//! A rejected action yields [`errors::InvalidMove`] and leaves the caller's
//! state as it was. Broken preconditions, such as dealing from a deck that
//! is not exactly 52 distinct cards or asking for the source of a buried
//! card, yield [`errors::EngineError`] instead.

pub mod action;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod query;
pub mod rules;
