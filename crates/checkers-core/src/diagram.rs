//! Text diagrams of a board position.
//!
//! A diagram is eight rows of eight characters, top row (`y = 0`) first.
//! Rows are separated by newlines or `/`, and spaces inside a row are
//! ignored so diagrams can be laid out readably in tests:
//!
//! ```text
//! . . . . . . . .
//! . . . . . . . .
//! . . . . . . . .
//! . . . . y . . .
//! . . . w . . . .
//! . . . . . . . .
//! . . . . . . . .
//! . . . . . . . .
//! ```
//!
//! `.` is an empty square, `w`/`W` a Player One man/king and `y`/`Y` a
//! Player Two man/king.

use crate::{Coord, Piece, BOARD_SIZE};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("invalid diagram: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("row {row} has {len} squares, expected 8")]
    InvalidRowLength { row: usize, len: usize },

    #[error("invalid character '{ch}' in row {row}")]
    InvalidCharacter { row: usize, ch: char },
}

/// A parsed diagram: one occupancy value per square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagram {
    rows: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Diagram {
    /// The standard starting position.
    pub const STARTPOS: &'static str =
        "w.w.w.w./.w.w.w.w/w.w.w.w./......../......../.y.y.y.y/y.y.y.y./.y.y.y.y";

    /// Parses a diagram.
    pub fn parse(text: &str) -> Result<Self, DiagramError> {
        let lines: Vec<&str> = text
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() != BOARD_SIZE as usize {
            return Err(DiagramError::InvalidRowCount(lines.len()));
        }

        let mut rows = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (y, line) in lines.iter().enumerate() {
            let squares: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if squares.len() != BOARD_SIZE as usize {
                return Err(DiagramError::InvalidRowLength {
                    row: y,
                    len: squares.len(),
                });
            }
            for (x, &ch) in squares.iter().enumerate() {
                rows[y][x] = match ch {
                    '.' => None,
                    other => Some(
                        Piece::from_diagram_char(other)
                            .ok_or(DiagramError::InvalidCharacter { row: y, ch: other })?,
                    ),
                };
            }
        }

        Ok(Diagram { rows })
    }

    /// Builds a diagram by asking `occupancy` about every square.
    pub fn from_fn(mut occupancy: impl FnMut(Coord) -> Option<Piece>) -> Self {
        let mut rows = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for coord in Coord::all() {
            rows[coord.y() as usize][coord.x() as usize] = occupancy(coord);
        }
        Diagram { rows }
    }

    /// Returns the occupancy of a square.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.rows[coord.y() as usize][coord.x() as usize]
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            let line: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('.', Piece::to_diagram_char).to_string())
                .collect();
            write!(f, "{}", line.join(" "))?;
            if y + 1 < row.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
