//! Match setup, the round loop and scoring

use anyhow::Result;
use tracing::{debug, info};

use std::io::Write;

use crate::board::{Board, Cell};
use crate::error::SetupError;
use crate::input::InputProvider;
use crate::player::Player;
use crate::setup::{parse_board_size, parse_player_name, parse_round_count, MatchConfig};
use crate::{CONNECT, DRAW_POINTS, END_COMMAND, WIN_POINTS};

const LABEL_FIRST_PLAYER: &str = "First";
const LABEL_SECOND_PLAYER: &str = "Second";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RenderStyle {
    Plain,
    Colored,
}

/// How a single round ended
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum RoundOutcome {
    /// Index of the winning player (0 for the first player)
    Win(usize),
    Draw,
    /// A player typed `end`
    Abandoned,
}

pub struct Game<I, W> {
    input: I,
    out: W,
    players: [Player; 2],
    board: Board,
    config: MatchConfig,
    // index of the player asked for the final move of the previous round
    last_player: Option<usize>,
    style: RenderStyle,
}

impl<I: InputProvider, W: Write> Game<I, W> {
    /// Asks for the names, the board size and the number of rounds
    ///
    /// Every question is repeated until it gets a usable answer.
    pub fn setup(mut input: I, mut out: W) -> Result<Self> {
        writeln!(out, "Connect Four")?;

        let first_name = ask_until_valid(
            &mut out,
            || input.ask_player_name(LABEL_FIRST_PLAYER),
            parse_player_name,
        )?;
        let second_name = ask_until_valid(
            &mut out,
            || input.ask_player_name(LABEL_SECOND_PLAYER),
            parse_player_name,
        )?;
        let size = ask_until_valid(&mut out, || input.ask_board_size(), parse_board_size)?;
        let config = ask_until_valid(&mut out, || input.ask_number_game(), parse_round_count)?;

        info!(
            rows = size.rows(),
            columns = size.columns(),
            rounds = config.rounds,
            "match configured"
        );

        Ok(Self {
            input,
            out,
            players: [
                Player::new(first_name, Cell::PlayerOne),
                Player::new(second_name, Cell::PlayerTwo),
            ],
            board: Board::new(size),
            config,
            last_player: None,
            style: RenderStyle::Plain,
        })
    }

    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> MatchConfig {
        self.config
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Plays every configured round and reports the scores
    pub fn launch(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "{} VS {}",
            self.players[0].name(),
            self.players[1].name()
        )?;
        writeln!(
            self.out,
            "{} X {} board",
            self.board.rows(),
            self.board.columns()
        )?;

        let rounds = self.config.rounds;
        if rounds > 1 {
            writeln!(self.out, "Total {} games", rounds)?;
            for round in 1..=rounds {
                writeln!(self.out, "Game #{}", round)?;
                self.play_round()?;
                writeln!(self.out, "Score")?;
                writeln!(
                    self.out,
                    "{}: {} {}: {}",
                    self.players[0].name(),
                    self.players[0].score(),
                    self.players[1].name(),
                    self.players[1].score()
                )?;
            }
        } else {
            writeln!(self.out, "Single Game")?;
            self.play_round()?;
        }

        info!(
            first = self.players[0].score(),
            second = self.players[1].score(),
            "match finished"
        );
        writeln!(self.out, "Game over!")?;
        Ok(())
    }

    /// Plays one round on a cleared board
    pub fn play_round(&mut self) -> Result<RoundOutcome> {
        self.board.reset();
        self.draw_board()?;

        let mut current = self.next_starter();
        info!(starter = self.players[current].name(), "round started");

        loop {
            self.last_player = Some(current);
            let answer = self.players[current].request_move(&mut self.input)?;
            if answer == END_COMMAND {
                info!(player = self.players[current].name(), "round abandoned");
                return Ok(RoundOutcome::Abandoned);
            }

            let column = match parse_column(&answer) {
                Some(column) => column,
                None => {
                    writeln!(self.out, "Incorrect column number")?;
                    continue;
                }
            };

            let mark = self.players[current].mark();
            match self.board.try_drop(column, mark) {
                Ok(row) => debug!(player = self.players[current].name(), column, row, "mark dropped"),
                Err(err) => {
                    writeln!(self.out, "{}", err)?;
                    // try the move again
                    continue;
                }
            }
            self.draw_board()?;

            if self.board.is_full() {
                writeln!(self.out, "It is a draw")?;
                for player in self.players.iter_mut() {
                    player.award_points(DRAW_POINTS);
                }
                info!("round drawn");
                return Ok(RoundOutcome::Draw);
            }

            if self.board.longest_run_through(mark) >= CONNECT {
                let winner = &mut self.players[current];
                writeln!(self.out, "Player {} won", winner.name())?;
                winner.award_points(WIN_POINTS);
                info!(winner = winner.name(), "round won");
                return Ok(RoundOutcome::Win(current));
            }

            current = 1 - current;
        }
    }

    // the player who did not make the final request of the last round opens
    fn next_starter(&self) -> usize {
        match self.last_player {
            Some(0) => 1,
            _ => 0,
        }
    }

    fn draw_board(&mut self) -> Result<()> {
        match self.style {
            RenderStyle::Plain => write!(self.out, "{}", self.board)?,
            RenderStyle::Colored => self.board.display(&mut self.out)?,
        }
        Ok(())
    }
}

fn ask_until_valid<T, W: Write>(
    out: &mut W,
    mut ask: impl FnMut() -> Result<String>,
    parse: impl Fn(&str) -> Result<T, SetupError>,
) -> Result<T> {
    loop {
        let answer = ask()?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(err) => writeln!(out, "{}", err)?,
        }
    }
}

/// A move must be made of digits only before the board will look at it
fn parse_column(answer: &str) -> Option<usize> {
    if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // too many digits for usize is still a column out of range
    Some(answer.parse().unwrap_or(usize::MAX))
}
