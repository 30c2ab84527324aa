//! Errors caused by player input
//!
//! The `Display` text of each variant is exactly what the console shows
//! the player before asking again.

use crate::{MAX_COLUMNS, MAX_ROWS, MIN_COLUMNS, MIN_ROWS};

/// A column choice the board refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("The column number is out of range (1 - {columns})")]
    OutOfRange { column: usize, columns: usize },

    #[error("Column {0} is full")]
    ColumnFull(usize),
}

/// An answer to one of the setup prompts that cannot be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("Invalid input")]
    InvalidInput,

    #[error("Board rows should be from {} to {}", MIN_ROWS, MAX_ROWS)]
    RowsOutOfRange(usize),

    #[error("Board columns should be from {} to {}", MIN_COLUMNS, MAX_COLUMNS)]
    ColumnsOutOfRange(usize),

    #[error("Player name must not be empty")]
    BlankName,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketError {
    #[error("ticket is empty")]
    Empty,

    #[error("'{0}' is not a digit")]
    NotADigit(char),

    #[error("ticket has an odd number of digits ({0})")]
    OddLength(usize),
}
