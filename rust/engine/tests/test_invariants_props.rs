//! Property tests: random play from random deals never breaks the table
//! invariants.

use std::collections::HashSet;

use patience_engine::action::{Action, MoveDestination, MoveSource};
use patience_engine::cards::{all_suits, Card};
use patience_engine::engine::react;
use patience_engine::game::{new_game, Game, TABLEAU_COLUMNS};
use patience_engine::query::legal_actions;
use proptest::prelude::*;

fn config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

fn assert_conserved(game: &Game) -> Result<(), TestCaseError> {
    let all: Vec<Card> = game.all_cards().copied().collect();
    prop_assert_eq!(all.len(), 52);
    let unique: HashSet<Card> = all.into_iter().collect();
    prop_assert_eq!(unique.len(), 52);
    Ok(())
}

fn assert_face_down_prefix(game: &Game) -> Result<(), TestCaseError> {
    for col in game.tableau() {
        let hidden = col.iter().take_while(|c| c.face_down).count();
        prop_assert!(col[hidden..].iter().all(|c| !c.face_down));
    }
    Ok(())
}

/// Any action at all, legal or not, addressed by small indices.
fn any_action() -> impl Strategy<Value = Action> {
    let suit = (0usize..4).prop_map(|i| all_suits()[i]);
    let source = prop_oneof![
        Just(MoveSource::FromWaste),
        suit.clone().prop_map(|suit| MoveSource::FromFoundation { suit }),
        (0usize..TABLEAU_COLUMNS + 1, 0usize..20)
            .prop_map(|(column, card_index)| MoveSource::FromTableau { column, card_index }),
    ];
    let destination = prop_oneof![
        suit.prop_map(|suit| MoveDestination::ToFoundation { suit }),
        (0usize..TABLEAU_COLUMNS + 1).prop_map(|column| MoveDestination::ToTableau { column }),
    ];
    prop_oneof![
        (source, destination).prop_map(|(source, destination)| Action::Move {
            source,
            destination
        }),
        Just(Action::OpenDeck),
        (0usize..TABLEAU_COLUMNS + 1).prop_map(|column| Action::FlipCard { column }),
    ]
}

proptest! {
    #![proptest_config(config())]

    /// Legal play chosen by index keeps every card on the table exactly once.
    #[test]
    fn prop_legal_play_conserves_the_deck(
        seed in any::<u64>(),
        picks in proptest::collection::vec(any::<prop::sample::Index>(), 0..150),
    ) {
        let mut game = new_game(Some(seed)).unwrap();
        for pick in picks {
            let actions = legal_actions(&game);
            if actions.is_empty() {
                break;
            }
            let action = actions[pick.index(actions.len())];
            game = react(&game, action).unwrap();
            assert_conserved(&game)?;
            assert_face_down_prefix(&game)?;
            prop_assert!(game.check_invariants().is_ok());
        }
    }

    /// Arbitrary actions are either applied cleanly or rejected without
    /// touching the state.
    #[test]
    fn prop_arbitrary_actions_are_all_or_nothing(
        seed in any::<u64>(),
        actions in proptest::collection::vec(any_action(), 0..200),
    ) {
        let mut game = new_game(Some(seed)).unwrap();
        for action in actions {
            let before = game.clone();
            match react(&game, action) {
                Ok(next) => {
                    prop_assert!(next.check_invariants().is_ok(), "{:?}", action);
                    game = next;
                }
                Err(_) => prop_assert_eq!(&game, &before),
            }
        }
    }
}
