//! Alternating marks invariant: X, O, X, O, ...

use super::super::{GameState, Player, Square};
use super::Invariant;
use super::monotonic_snapshots::single_addition;

/// Invariant: The mark added by snapshot `k` belongs to the player whose turn
/// it was at move `k - 1`.
///
/// The first mark is always X.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .windows(2)
            .enumerate()
            .all(|(moves_played, pair)| {
                matches!(
                    single_addition(&pair[0], &pair[1]),
                    Some((_, Square::Occupied(player))) if player == Player::for_move(moves_played)
                )
            })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
