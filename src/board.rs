use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::fmt;
use std::io::Write;

use crate::error::MoveError;
use crate::setup::BoardSize;

const SIDE: &str = "║";
const CORNER_LEFT: &str = "╚";
const CORNER_RIGHT: &str = "╝";
const BOTTOM: &str = "═";
const JOINT: &str = "╩";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// The character drawn for this cell
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::PlayerOne => 'o',
            Cell::PlayerTwo => '*',
        }
    }

    fn color(self) -> Color {
        match self {
            Cell::Empty => Color::Reset,
            Cell::PlayerOne => Color::Red,
            Cell::PlayerTwo => Color::Yellow,
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A grid of cells whose dimensions are fixed at construction
///
/// Rows are counted from the bottom of the board and columns from the
/// left, both starting at 0. Columns are 1-indexed only where a player
/// names them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: BoardSize,
    cells: Vec<Cell>, // cells are stored left-to-right, bottom-to-top
    heights: Vec<usize>,
    last_move: Option<(usize, usize)>,
}

impl Board {
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.rows() * size.columns()],
            heights: vec![0; size.columns()],
            last_move: None,
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.rows()
    }

    pub fn columns(&self) -> usize {
        self.size.columns()
    }

    /// Row and column of the most recently dropped mark
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[column + self.columns() * row]
    }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Empty);
        self.heights.iter_mut().for_each(|height| *height = 0);
        self.last_move = None;
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    /// Drops `mark` into a 1-indexed column
    ///
    /// Returns the row the mark landed on. The board is left untouched
    /// when the column does not exist or has no room left.
    pub fn try_drop(&mut self, column_one_indexed: usize, mark: Cell) -> Result<usize, MoveError> {
        let columns = self.columns();
        if column_one_indexed < 1 || column_one_indexed > columns {
            return Err(MoveError::OutOfRange {
                column: column_one_indexed,
                columns,
            });
        }
        let column = column_one_indexed - 1;
        if !self.playable(column) {
            return Err(MoveError::ColumnFull(column_one_indexed));
        }

        let row = self.heights[column];
        self.cells[column + columns * row] = mark;
        self.heights[column] += 1;
        self.last_move = Some((row, column));
        Ok(row)
    }

    fn playable(&self, column: usize) -> bool {
        self.heights[column] < self.rows()
    }

    /// Length of the longest line of `mark` passing through the last move
    ///
    /// Horizontal, vertical and both diagonal lines are measured, counting
    /// the last move itself once. Returns 0 before any move has been
    /// played, or when the last move is not `mark`.
    pub fn longest_run_through(&self, mark: Cell) -> usize {
        let (row, column) = match self.last_move {
            Some(position) => position,
            None => return 0,
        };
        if self.cell(row, column) != mark {
            return 0;
        }

        let (rows, columns) = (self.rows() as i32, self.columns() as i32);
        // (dx, dy) of horizontal, vertical, diagonal / and diagonal \
        [(1i32, 0i32), (0, 1), (1, 1), (1, -1)]
            .iter()
            .map(|&(dx, dy)| {
                let mut run = 1;
                for sign in [-1i32, 1].iter() {
                    let mut x = column as i32 + sign * dx;
                    let mut y = row as i32 + sign * dy;
                    loop {
                        if x < 0
                            || x >= columns
                            || y < 0
                            || y >= rows
                            || self.cells[x as usize + self.columns() * y as usize] != mark
                        {
                            break;
                        }
                        x += sign * dx;
                        y += sign * dy;
                        run += 1;
                    }
                }
                run
            })
            .max()
            .unwrap_or(0)
    }

    /// The plain text picture of the board
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn header(&self) -> String {
        let numbers: Vec<String> = (1..=self.columns()).map(|x| x.to_string()).collect();
        format!(" {} ", numbers.join(" "))
    }

    fn footer(&self) -> String {
        format!(
            "{}{}{}",
            CORNER_LEFT,
            vec![BOTTOM; self.columns()].join(JOINT),
            CORNER_RIGHT
        )
    }

    /// Draws the board in colour
    pub fn display<W: Write>(&self, out: &mut W) -> Result<()> {
        out.queue(PrintStyledContent(style(self.header() + "\n")))?;
        for y in (0..self.rows()).rev() {
            out.queue(PrintStyledContent(style(SIDE).with(Color::DarkBlue)))?;
            for x in 0..self.columns() {
                let cell = self.cell(y, x);
                out.queue(PrintStyledContent(
                    style(cell.glyph())
                        .attribute(Attribute::Bold)
                        .with(cell.color()),
                ))?
                .queue(PrintStyledContent(style(SIDE).with(Color::DarkBlue)))?;
            }
            out.queue(PrintStyledContent(style("\n")))?;
        }
        out.queue(PrintStyledContent(
            style(self.footer() + "\n").with(Color::DarkBlue),
        ))?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for y in (0..self.rows()).rev() {
            let row: Vec<String> = (0..self.columns())
                .map(|x| self.cell(y, x).to_string())
                .collect();
            writeln!(f, "{}{}{}", SIDE, row.join(SIDE), SIDE)?;
        }
        writeln!(f, "{}", self.footer())
    }
}
