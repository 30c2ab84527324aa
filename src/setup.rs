//! Parsing of the answers given before the first round

use regex::Regex;

use std::sync::OnceLock;

use crate::error::SetupError;
use crate::{DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_COLUMNS, MAX_ROWS, MIN_COLUMNS, MIN_ROWS};

/// Dimensions of a board, always within the allowed ranges
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BoardSize {
    rows: usize,
    columns: usize,
}

impl BoardSize {
    pub fn new(rows: usize, columns: usize) -> Result<Self, SetupError> {
        if !(MIN_ROWS..=MAX_ROWS).contains(&rows) {
            return Err(SetupError::RowsOutOfRange(rows));
        }
        if !(MIN_COLUMNS..=MAX_COLUMNS).contains(&columns) {
            return Err(SetupError::ColumnsOutOfRange(columns));
        }
        Ok(Self { rows, columns })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
        }
    }
}

/// Settings resolved once before any round starts
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct MatchConfig {
    pub rounds: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { rounds: 1 }
    }
}

fn board_size_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^\s*([0-9]+)\s*x\s*([0-9]+)\s*$").expect("board size pattern is valid")
    })
}

/// Parses an answer of the form `<rows> x <columns>`
///
/// A blank answer selects the default 6 x 7 board.
pub fn parse_board_size(input: &str) -> Result<BoardSize, SetupError> {
    if input.trim().is_empty() {
        return Ok(BoardSize::default());
    }
    let captures = board_size_pattern()
        .captures(input)
        .ok_or(SetupError::InvalidInput)?;

    // digit strings too long for usize are simply out of range
    let rows = captures[1].parse().unwrap_or(usize::MAX);
    let columns = captures[2].parse().unwrap_or(usize::MAX);
    BoardSize::new(rows, columns)
}

/// Parses the number of rounds to play
///
/// A blank answer means a single round. Anything else must be a positive
/// decimal number that fits in a `u32`.
pub fn parse_round_count(input: &str) -> Result<MatchConfig, SetupError> {
    if input.is_empty() {
        return Ok(MatchConfig::default());
    }
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SetupError::InvalidInput);
    }
    match input.parse::<u32>() {
        Ok(rounds) if rounds >= 1 => Ok(MatchConfig { rounds }),
        _ => Err(SetupError::InvalidInput),
    }
}

/// Accepts any non-empty name verbatim
pub fn parse_player_name(input: &str) -> Result<String, SetupError> {
    if input.is_empty() {
        Err(SetupError::BlankName)
    } else {
        Ok(input.to_string())
    }
}
