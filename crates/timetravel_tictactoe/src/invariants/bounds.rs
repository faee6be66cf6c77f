//! Structural invariants: the history exists and the cursor points into it.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: History is never empty and starts with the empty board.
pub struct NonEmptyHistoryInvariant;

impl Invariant<GameState> for NonEmptyHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

/// Invariant: The current move indexes a retained snapshot.
pub struct CursorInRangeInvariant;

impl Invariant<GameState> for CursorInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_move < game.history.len()
    }

    fn description() -> &'static str {
        "Current move is within the history"
    }
}
