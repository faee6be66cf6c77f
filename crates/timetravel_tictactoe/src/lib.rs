//! Time-travel tic-tac-toe - pure game logic.
//!
//! # Architecture
//!
//! - **Types**: players, squares and the 3x3 board
//! - **Position**: named board cells with row-major indices
//! - **Rules**: win and draw detection over a single board
//! - **History**: the snapshot history with its current move
//! - **Invariants**: checkable properties of a history
//!
//! # Example
//!
//! ```
//! use timetravel_tictactoe::{GameState, GameStatus, Player, Position};
//!
//! let mut game = GameState::new();
//! game.play(Position::Center).unwrap();
//! game.play(Position::TopLeft).unwrap();
//! assert_eq!(game.history().len(), 3);
//!
//! // Travel back to the first move; the later snapshot is discarded.
//! game.jump_to(1).unwrap();
//! assert_eq!(game.history().len(), 2);
//! assert_eq!(game.status(), GameStatus::InProgress { next: Player::O });
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{JumpError, Move, MoveError};
pub use history::GameState;
pub use position::Position;
pub use rules::{check_winner, is_draw, is_full, winning_line};
pub use types::{Board, GameStatus, Player, Square};
