//! Board coordinate representation.

use crate::Piece;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of squares along each edge of the board.
pub const BOARD_SIZE: u8 = 8;

/// Error returned when a coordinate falls outside the board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    #[error("coordinate ({x}, {y}) is outside the 8x8 board")]
    OutOfRange { x: i32, y: i32 },
}

/// A square on the board as a column `x` and row `y`, both in `0..8`.
///
/// `(0, 0)` is the top-left square; rows grow downward.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// The top-left square.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Creates a coordinate, or `None` if it is off the board.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Coord { x, y })
        } else {
            None
        }
    }

    /// Creates a coordinate from signed input, failing with
    /// [`CoordError::OutOfRange`] if either axis is outside `0..8`.
    pub fn try_new(x: i32, y: i32) -> Result<Self, CoordError> {
        let bound = i32::from(BOARD_SIZE);
        if (0..bound).contains(&x) && (0..bound).contains(&y) {
            Ok(Coord {
                x: x as u8,
                y: y as u8,
            })
        } else {
            Err(CoordError::OutOfRange { x, y })
        }
    }

    /// Column, 0 at the left edge.
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row, 0 at the top edge.
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the coordinate `(dx, dy)` away, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        if (0..BOARD_SIZE as i16).contains(&x) && (0..BOARD_SIZE as i16).contains(&y) {
            Some(Coord {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Returns true for the squares pieces stand on: `(0, 0)` and every
    /// square of the same colour.
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.x + self.y) % 2 == 0
    }

    /// Returns the square halfway between `self` and `to` on a two-square
    /// diagonal jump.
    pub fn jumped_over(self, to: Coord) -> Option<Coord> {
        let dx = to.x as i8 - self.x as i8;
        let dy = to.y as i8 - self.y as i8;
        if dx.abs() != 2 || dy.abs() != 2 {
            return None;
        }
        self.offset(dx.signum(), dy.signum())
    }

    /// Column distance between two coordinates.
    #[inline]
    pub fn dx(self, to: Coord) -> u8 {
        self.x.abs_diff(to.x)
    }

    /// Iterates every square in row-major order (`y` outer, `x` inner).
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord { x, y }))
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A piece together with the square it stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacedPiece {
    pub coord: Coord,
    pub piece: Piece,
}

impl PlacedPiece {
    #[inline]
    pub const fn new(coord: Coord, piece: Piece) -> Self {
        PlacedPiece { coord, piece }
    }

    /// The same piece standing on another square.
    #[inline]
    pub const fn at(self, coord: Coord) -> Self {
        PlacedPiece::new(coord, self.piece)
    }
}
