use crate::cards::{Card, Rank, Suit};
use crate::game::Game;

/// Whether `above` may be laid on `below` in a tableau column.
///
/// The two cards must be of opposite colour and `above` must be exactly one
/// rank lower than `below`. The empty-column rule (King only) is handled by
/// [`can_place_on_column`], not here.
///
/// # Examples
///
/// ```
/// use patience_engine::cards::{Card, Rank, Suit};
/// use patience_engine::rules::can_stack_in_bars;
///
/// let ten_hearts = Card::new(Suit::Hearts, Rank::Ten);
/// assert!(can_stack_in_bars(&ten_hearts, &Card::new(Suit::Spades, Rank::Nine)));
/// assert!(!can_stack_in_bars(&ten_hearts, &Card::new(Suit::Diamonds, Rank::Nine)));
/// assert!(!can_stack_in_bars(&ten_hearts, &Card::new(Suit::Spades, Rank::Eight)));
/// ```
pub fn can_stack_in_bars(below: &Card, above: &Card) -> bool {
    let color_ok = below.color() != above.color();
    let order_ok = above.rank.next() == Some(below.rank);
    color_ok && order_ok
}

/// Whether `above` may be laid on `below` on a foundation: same suit,
/// exactly one rank higher.
///
/// ```
/// use patience_engine::cards::{Card, Rank, Suit};
/// use patience_engine::rules::can_stack_in_stacks;
///
/// let nine_clubs = Card::new(Suit::Clubs, Rank::Nine);
/// assert!(can_stack_in_stacks(&nine_clubs, &Card::new(Suit::Clubs, Rank::Ten)));
/// assert!(!can_stack_in_stacks(&nine_clubs, &Card::new(Suit::Diamonds, Rank::Ten)));
/// assert!(!can_stack_in_stacks(&nine_clubs, &Card::new(Suit::Clubs, Rank::Eight)));
/// ```
pub fn can_stack_in_stacks(below: &Card, above: &Card) -> bool {
    let suit_ok = below.suit == above.suit;
    let order_ok = below.rank.next() == Some(above.rank);
    suit_ok && order_ok
}

/// Whether `card` may go onto the `suit` foundation of `game` right now.
pub fn can_place_on_foundation(game: &Game, suit: Suit, card: &Card) -> bool {
    // wrong pile
    if card.suit != suit {
        return false;
    }
    match game.foundation_top(suit) {
        None => card.rank == Rank::Ace,
        Some(top) => can_stack_in_stacks(top, card),
    }
}

/// Whether `card` may go onto the end of tableau column `column` right now.
pub fn can_place_on_column(game: &Game, column: usize, card: &Card) -> bool {
    let Some(col) = game.column(column) else {
        return false;
    };
    match col.last() {
        // an empty column takes only the highest rank
        None => card.rank == Rank::King,
        // never over an unrevealed card
        Some(top) if top.face_down => false,
        Some(top) => can_stack_in_bars(top, card),
    }
}

/// Whether `cards` is a movable run: all face up, each card stacking on the
/// one before it. An empty slice is a valid (empty) run.
pub fn is_valid_run(cards: &[Card]) -> bool {
    cards.iter().all(|c| !c.face_down)
        && cards
            .windows(2)
            .all(|pair| can_stack_in_bars(&pair[0], &pair[1]))
}
