//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a single board snapshot. Status is never
//! cached; callers re-evaluate the active board on every read.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
