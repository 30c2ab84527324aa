use anyhow::Result;

use crate::board::Cell;
use crate::input::InputProvider;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    mark: Cell,
    score: u32,
}

impl Player {
    pub fn new(name: String, mark: Cell) -> Self {
        Self {
            name,
            mark,
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mark(&self) -> Cell {
        self.mark
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Asks for this player's next column
    ///
    /// The answer is passed back untouched; checking it is up to the caller.
    pub fn request_move<I: InputProvider>(&self, input: &mut I) -> Result<String> {
        input.ask_move(&self.name)
    }

    pub fn award_points(&mut self, points: u32) {
        self.score += points;
    }
}
