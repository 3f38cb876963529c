//! Pixel geometry of the rendered board.

use checkers_core::{Coord, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// A point in board-local pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        PixelPos { x, y }
    }
}

/// Converts between pixels and board squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardGeometry {
    board_size: i32,
    square_size: i32,
    piece_radius: i32,
}

impl BoardGeometry {
    pub fn new(board_size: u32) -> Self {
        let board_size = i32::try_from(board_size).unwrap_or(i32::MAX);
        let square_size = board_size / i32::from(BOARD_SIZE);
        BoardGeometry {
            board_size,
            square_size,
            piece_radius: square_size * 2 / 5,
        }
    }

    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    pub fn square_size(&self) -> i32 {
        self.square_size
    }

    pub fn piece_radius(&self) -> i32 {
        self.piece_radius
    }

    /// Returns the square under `pos`, or `None` if the point is on the
    /// outer pixel border or off the board.
    pub fn index_from_position(&self, pos: PixelPos) -> Option<Coord> {
        let inside = |v: i32| v > 0 && v < self.board_size - 1;
        if !inside(pos.x) || !inside(pos.y) || self.square_size == 0 {
            return None;
        }
        let x = u8::try_from(pos.x / self.square_size).ok()?;
        let y = u8::try_from(pos.y / self.square_size).ok()?;
        Coord::new(x, y)
    }

    /// Returns the centre of a square.
    pub fn center_of(&self, coord: Coord) -> PixelPos {
        let half = self.square_size / 2;
        PixelPos::new(
            half + self.square_size * i32::from(coord.x()),
            half + self.square_size * i32::from(coord.y()),
        )
    }

    /// Returns the top-left corner of a square.
    pub fn corner_of(&self, coord: Coord) -> PixelPos {
        PixelPos::new(
            self.square_size * i32::from(coord.x()),
            self.square_size * i32::from(coord.y()),
        )
    }
}
