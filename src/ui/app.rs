use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use tracing::{debug, info};

use super::prompt::{self, PROMPT};
use super::view;
use crate::config::DisplayConfig;
use crate::error::{MoveError, PlayError};
use crate::game::{GameOutcome, GameState, Player, WinDetector};

/// Text front end: reads columns from `input`, writes the game to `output`.
pub struct App<R, W> {
    input: R,
    output: W,
    display: DisplayConfig,
    state: GameState,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(input: R, output: W, display: DisplayConfig, state: GameState) -> Self {
        App {
            input,
            output,
            display,
            state,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Play turns until someone wins or the board fills up.
    pub fn run(&mut self) -> Result<GameOutcome, PlayError> {
        info!(first = ?self.state.current_player(), "game started");

        while let Some(player) = self.state.current_player() {
            self.print_turn(player)?;
            let outcome = self.take_turn()?;

            if self.display.clear_screen {
                self.clear()?;
            }

            match outcome {
                GameOutcome::Win(winner) => {
                    if let Some(window) = WinDetector::winning_window(self.state.board(), winner) {
                        info!(
                            %winner,
                            line = window.direction.name(),
                            cells = ?window.cells,
                            "four in a row"
                        );
                    }
                    writeln!(self.output, "{}", view::winner_line(winner, self.display.glyphs))?;
                    self.print_board()?;
                }
                GameOutcome::Draw => {
                    writeln!(self.output, "{}", view::TIE_LINE)?;
                    self.print_board()?;
                }
                GameOutcome::InProgress => {}
            }
        }

        let outcome = self.state.outcome();
        info!(?outcome, moves = self.state.moves().len(), "game finished");
        Ok(outcome)
    }

    fn print_turn(&mut self, player: Player) -> io::Result<()> {
        writeln!(self.output, "{}", view::turn_header(player, self.display.glyphs))?;
        writeln!(self.output, "{}", view::BOARD_HEADER)?;
        self.print_board()
    }

    fn print_board(&mut self) -> io::Result<()> {
        for line in view::board_lines(self.state.board(), &self.display) {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    /// Re-prompt until the current player lands a piece.
    fn take_turn(&mut self) -> Result<GameOutcome, PlayError> {
        loop {
            let column = self.read_column()?;
            match self.state.play(column) {
                Ok(outcome) => return Ok(outcome),
                Err(MoveError::ColumnFull(err)) => {
                    debug!(%err, "column full");
                    writeln!(
                        self.output,
                        "{}",
                        view::column_full_line(&err, self.display.glyphs)
                    )?;
                }
                Err(err @ MoveError::InvalidColumn(_)) => {
                    writeln!(self.output, "{err}")?;
                }
                Err(MoveError::GameOver) => return Ok(self.state.outcome()),
            }
        }
    }

    fn read_column(&mut self) -> Result<usize, PlayError> {
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PlayError::InputClosed);
            }

            match prompt::parse_column(&line) {
                Ok(column) => return Ok(column),
                Err(err) => {
                    debug!(input = line.trim(), %err, "rejected input");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        self.output.flush()
    }
}
