//! Parsing of typed commands.

use checkers_core::{Coord, CoordError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("expected a square as `x,y` or `x y`, got `{0}`")]
    Malformed(String),

    #[error(transparent)]
    OffBoard(#[from] CoordError),
}

/// A line of input from the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Press on a square: picks up a piece, or moves the held one there.
    Square(Coord),
    /// Put the held piece back.
    Cancel,
    Reset,
    Help,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let input = input.trim();
        match input {
            "quit" | "q" | "exit" => return Ok(Command::Quit),
            "reset" => return Ok(Command::Reset),
            "cancel" | "c" => return Ok(Command::Cancel),
            "help" | "?" => return Ok(Command::Help),
            _ => {}
        }

        let mut parts = input
            .split(|ch: char| ch == ',' || ch.is_whitespace())
            .filter(|part| !part.is_empty());
        let malformed = || CommandError::Malformed(input.to_string());

        let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let x: i32 = x.parse().map_err(|_| malformed())?;
        let y: i32 = y.parse().map_err(|_| malformed())?;
        Ok(Command::Square(Coord::try_new(x, y)?))
    }
}
