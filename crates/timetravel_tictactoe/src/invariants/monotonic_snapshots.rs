//! Monotonic snapshots invariant: each snapshot adds exactly one mark.

use super::super::{Board, GameState, Position, Square};
use super::Invariant;

/// Invariant: Every snapshot is its predecessor plus one newly occupied square.
///
/// Squares are never cleared or overwritten within the retained history.
pub struct MonotonicSnapshotsInvariant;

/// Returns the single square that went from empty to occupied, if exactly one did
/// and nothing else changed.
pub(crate) fn single_addition(before: &Board, after: &Board) -> Option<(Position, Square)> {
    let mut added = None;
    for pos in Position::ALL {
        match (before.get(pos), after.get(pos)) {
            (old, new) if old == new => {}
            (Square::Empty, new @ Square::Occupied(_)) if added.is_none() => {
                added = Some((pos, new));
            }
            _ => return None,
        }
    }
    added
}

impl Invariant<GameState> for MonotonicSnapshotsInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .all(|pair| single_addition(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}
