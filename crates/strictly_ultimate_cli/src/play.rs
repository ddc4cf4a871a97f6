//! Interactive line-based play loop.
//!
//! Translates typed commands into engine calls and renders the engine's
//! snapshot after every change. The running tally lives here, not in the
//! engine.

use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_ultimate::{Position, Scoreboard, UltimateBoardEngine};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  <board> <cell>  play a cell, both numbered 1-9 left to right, top to bottom
  c               toggle the forced-board rule
  r               restart the current game
  s               reset the score
  h               show this help
  q               quit";

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Mark a cell in a micro board.
    Move {
        /// Micro board.
        micro: Position,
        /// Cell inside the micro board.
        cell: Position,
    },
    /// Flip the forced-board rule.
    ToggleConstraint,
    /// Restart the current game.
    Reset,
    /// Zero the tally.
    ResetScore,
    /// Print the command list.
    Help,
    /// Leave the session.
    Quit,
}

impl Input {
    /// Parses one line; `None` for anything unrecognized.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["c" | "constraint"] => Some(Input::ToggleConstraint),
            ["r" | "reset"] => Some(Input::Reset),
            ["s" | "score"] => Some(Input::ResetScore),
            ["h" | "help" | "?"] => Some(Input::Help),
            ["q" | "quit" | "exit"] => Some(Input::Quit),
            [micro, cell] => Some(Input::Move {
                micro: Position::from_input(micro)?,
                cell: Position::from_input(cell)?,
            }),
            _ => None,
        }
    }
}

/// One terminal play session: an engine, a tally, and the I/O streams.
pub struct Session<R, W> {
    engine: UltimateBoardEngine,
    score: Scoreboard,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given streams.
    #[instrument(skip(input, output))]
    pub fn new(constraint_enabled: bool, input: R, output: W) -> Self {
        Self {
            engine: UltimateBoardEngine::new(constraint_enabled),
            score: Scoreboard::new(),
            input,
            output,
        }
    }

    /// Runs until the user quits or input ends, returning the final tally.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<Scoreboard> {
        writeln!(self.output, "{}", HELP)?;
        self.render()?;

        while let Some(line) = self.read_line()? {
            let Some(input) = Input::parse(&line) else {
                writeln!(self.output, "Unrecognized input: {:?} (h for help)", line.trim())?;
                continue;
            };
            debug!(?input, "Command");

            match input {
                Input::Quit => break,
                Input::Help => writeln!(self.output, "{}", HELP)?,
                Input::ResetScore => {
                    self.score.reset();
                    writeln!(self.output, "Score reset. {}", self.score)?;
                }
                Input::Reset => {
                    self.engine.reset();
                    self.render()?;
                }
                Input::ToggleConstraint => {
                    let enabled = !self.engine.state().constraint_enabled();
                    self.engine.set_constraint_enabled(enabled);
                    let label = if enabled { "on" } else { "off" };
                    writeln!(self.output, "Forced-board rule {}", label)?;
                    self.render()?;
                }
                Input::Move { micro, cell } => {
                    if !self.play_move(micro, cell)? {
                        break;
                    }
                }
            }
        }

        info!(score = %self.score, "Session finished");
        Ok(self.score)
    }

    /// Plays a move; returns false if the user declined a rematch.
    fn play_move(&mut self, micro: Position, cell: Position) -> Result<bool> {
        let result = match self.engine.apply_move(micro.to_index(), cell.to_index()) {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err.kind, "Move rejected");
                writeln!(self.output, "Illegal move: {}", err.kind)?;
                return Ok(true);
            }
        };

        self.render()?;
        let Some(outcome) = *result.macro_outcome() else {
            return Ok(true);
        };

        self.score.record(outcome);
        writeln!(self.output, "{}", self.score)?;
        writeln!(self.output, "Play again? [y/n]")?;

        let again = self
            .read_line()?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y"));
        if again {
            self.engine.reset();
            self.render()?;
        }
        Ok(again)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn render(&mut self) -> Result<()> {
        let snapshot = self.engine.status();
        writeln!(self.output)?;
        writeln!(self.output, "{}", self.engine.state().display())?;
        writeln!(self.output)?;
        writeln!(self.output, "{}", snapshot.status_line())?;
        if !snapshot.is_over() {
            let boards: Vec<String> = snapshot
                .selectable_boards()
                .iter()
                .map(|b| (b.to_index() + 1).to_string())
                .collect();
            writeln!(self.output, "Playable boards: {}", boards.join(" "))?;
        }
        Ok(())
    }
}
