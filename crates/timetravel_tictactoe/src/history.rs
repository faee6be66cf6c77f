//! Game state with snapshot history and time travel.
//!
//! The history is a mutable sequence of board snapshots. Playing a move
//! truncates everything after the current move before appending, and
//! jumping truncates everything after the target. Alternate futures are
//! never kept.

use super::action::{JumpError, Move, MoveError};
use super::invariants::{InvariantSet, TimeTravelInvariants};
use super::rules;
use super::{Board, GameStatus, Player, Position, Square};
use tracing::{debug, instrument, warn};

/// One game session: every retained snapshot plus the selected one.
///
/// The player to move is derived from the parity of the current move,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) current_move: usize,
}

impl GameState {
    /// Creates a new game with a single empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_move: 0,
        }
    }

    /// Returns the snapshot at the current move.
    pub fn active_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Returns true iff X places the next mark.
    pub fn is_x_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    /// Returns the player to place the next mark.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Returns every retained snapshot, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the index of the active snapshot.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Evaluates the active board.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        let board = self.active_board();
        if let Some(winner) = rules::check_winner(board) {
            GameStatus::Won(winner)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.to_move(),
            }
        }
    }

    /// Returns the move that produced snapshot `index`.
    ///
    /// `None` for the initial snapshot or an index outside the history.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        if index == 0 {
            return None;
        }
        let before = self.history.get(index - 1)?;
        let after = self.history.get(index)?;
        Position::ALL.iter().find_map(|&pos| {
            match (before.get(pos), after.get(pos)) {
                (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, pos)),
                _ => None,
            }
        })
    }

    /// Positions a move may currently target.
    ///
    /// Empty once the active board is won or full.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status().is_over() {
            Vec::new()
        } else {
            Position::valid_moves(self.active_board())
        }
    }

    /// Places the next mark at `position`.
    ///
    /// Discards every snapshot after the current move, appends the new
    /// snapshot and selects it.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] if the active board has a winner and
    /// [`MoveError::SquareOccupied`] if the square is taken. The state is
    /// unchanged on error.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, position: Position) -> Result<Move, MoveError> {
        let board = *self.active_board();

        if let Some(winner) = rules::check_winner(&board) {
            debug!(%winner, "Rejecting move on finished board");
            return Err(MoveError::GameOver(winner));
        }

        if !board.is_empty(position) {
            debug!("Rejecting move on occupied square");
            return Err(MoveError::SquareOccupied(position));
        }

        let action = Move::new(self.to_move(), position);
        let mut next = board;
        next.set(position, Square::Occupied(action.player));

        self.history.truncate(self.current_move + 1);
        self.history.push(next);
        self.current_move = self.history.len() - 1;

        debug!(%action, history_len = self.history.len(), "Move applied");
        self.assert_invariants();

        Ok(action)
    }

    /// Places the next mark at a raw row-major index.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for indices above 8, otherwise
    /// behaves like [`GameState::play`].
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> Result<Move, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(position)
    }

    /// Selects snapshot `move_index` and discards every snapshot after it.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `move_index` is not in the
    /// history. The state is unchanged on error.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<(), JumpError> {
        if move_index >= self.history.len() {
            debug!("Rejecting out-of-range jump");
            return Err(JumpError::OutOfRange {
                requested: move_index,
                len: self.history.len(),
            });
        }

        self.current_move = move_index;
        self.history.truncate(move_index + 1);

        debug!(history_len = self.history.len(), "Jumped to move");
        self.assert_invariants();

        Ok(())
    }

    /// Checks all history invariants in debug builds.
    fn assert_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = TimeTravelInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            panic!("History invariants violated: {:?}", violations);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
