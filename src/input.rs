//! Where the answers of the players come from

use anyhow::{anyhow, Result};

use std::io::{stdin, stdout, BufRead, StdinLock, Stdout, Write};

use crate::{DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Supplies the raw answer to each question the game asks
pub trait InputProvider {
    fn ask_player_name(&mut self, label: &str) -> Result<String>;
    fn ask_board_size(&mut self) -> Result<String>;
    fn ask_number_game(&mut self) -> Result<String>;
    fn ask_move(&mut self, player_name: &str) -> Result<String>;
}

/// Prompts on a writer and reads one line per answer from a reader
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(stdin().lock(), stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn ask(&mut self, prompt: &[&str]) -> Result<String> {
        for line in prompt {
            writeln!(self.writer, "{}", line)?;
        }
        self.writer.flush()?;

        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Err(anyhow!("standard input closed"));
        }
        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }
        Ok(buffer)
    }
}

impl<R: BufRead, W: Write> InputProvider for ConsoleInput<R, W> {
    fn ask_player_name(&mut self, label: &str) -> Result<String> {
        let prompt = format!("{} player's name:", label);
        self.ask(&[prompt.as_str()])
    }

    fn ask_board_size(&mut self) -> Result<String> {
        let hint = format!("Press Enter for default ({} x {})", DEFAULT_ROWS, DEFAULT_COLUMNS);
        self.ask(&["Set the board dimensions (Rows x Columns)", hint.as_str()])
    }

    fn ask_number_game(&mut self) -> Result<String> {
        self.ask(&[
            "Do you want to play single or multiple games?",
            "For a single game, input 1 or press Enter",
            "Input a number of games:",
        ])
    }

    fn ask_move(&mut self, player_name: &str) -> Result<String> {
        let prompt = format!("{}'s turn:", player_name);
        self.ask(&[prompt.as_str()])
    }
}
