//! A two-player console game of 'Connect 4'
//!
//! Two human players share a board of configurable size and play one
//! or more rounds, collecting points for wins (2) and draws (1).
//!
//! # Basic Usage
//!
//! ```
//! use connect4_match::{board::{Board, Cell}, setup::BoardSize};
//!
//!# fn main() -> anyhow::Result<()> {
//! let mut board = Board::new(BoardSize::default());
//! for _ in 0..4 {
//!     board.try_drop(3, Cell::PlayerOne)?;
//! }
//!
//! assert_eq!(board.longest_run_through(Cell::PlayerOne), 4);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod player;

pub mod setup;

pub mod input;

pub mod game;

pub mod ticket;


/// The smallest number of rows a board may have
pub const MIN_ROWS: usize = 5;
/// The largest number of rows a board may have
pub const MAX_ROWS: usize = 9;
/// The smallest number of columns a board may have
pub const MIN_COLUMNS: usize = 5;
/// The largest number of columns a board may have
pub const MAX_COLUMNS: usize = 9;

/// Rows used when the board size prompt is left blank
pub const DEFAULT_ROWS: usize = 6;
/// Columns used when the board size prompt is left blank
pub const DEFAULT_COLUMNS: usize = 7;

/// The length of a run needed to win a round
pub const CONNECT: usize = 4;

/// Typed in place of a column to abandon the current round
pub const END_COMMAND: &str = "end";

/// Points awarded to the winner of a round
pub const WIN_POINTS: u32 = 2;
/// Points awarded to each player when a round is drawn
pub const DRAW_POINTS: u32 = 1;

const_assert!(MIN_ROWS <= DEFAULT_ROWS && DEFAULT_ROWS <= MAX_ROWS);
const_assert!(MIN_COLUMNS <= DEFAULT_COLUMNS && DEFAULT_COLUMNS <= MAX_COLUMNS);
// a run must fit on the smallest board in every direction
const_assert!(CONNECT <= MIN_ROWS && CONNECT <= MIN_COLUMNS);
