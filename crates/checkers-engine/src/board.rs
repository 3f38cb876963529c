//! Board state: piece occupancy plus the chopping block.

use checkers_core::{Coord, CoordError, Diagram, DiagramError, Piece, PlacedPiece, Player};
use std::fmt;

const SIZE: usize = checkers_core::BOARD_SIZE as usize;

/// The 8x8 grid of occupancy values and the pieces marked for capture
/// during an open capture chain.
///
/// The board knows nothing about turns or legality; [`set`](Board::set)
/// writes whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells indexed `[y][x]`.
    cells: [[Option<Piece>; SIZE]; SIZE],

    /// Squares whose pieces have been jumped in the current chain but not
    /// yet lifted off the board.
    chopping_block: Vec<Coord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            cells: [[None; SIZE]; SIZE],
            chopping_block: Vec::new(),
        }
    }

    /// Creates the standard starting position: twelve men per side on the
    /// playable squares of their three home rows.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for player in Player::ALL {
            for row in player.home_rows() {
                for x in 0..SIZE as u8 {
                    if let Some(coord) = Coord::new(x, row).filter(|c| c.is_playable()) {
                        board.set(coord, Some(Piece::man(player)));
                    }
                }
            }
        }
        board
    }

    /// Creates a board from a text diagram.
    pub fn from_diagram(text: &str) -> Result<Self, DiagramError> {
        let diagram = Diagram::parse(text)?;
        let mut board = Board::empty();
        for coord in Coord::all() {
            board.set(coord, diagram.piece_at(coord));
        }
        Ok(board)
    }

    /// Returns the board as a text diagram.
    pub fn to_diagram(&self) -> Diagram {
        Diagram::from_fn(|coord| self.piece_at(coord))
    }

    /// Returns the occupancy at raw column/row indices.
    pub fn get(&self, x: i32, y: i32) -> Result<Option<Piece>, CoordError> {
        Coord::try_new(x, y).map(|coord| self.piece_at(coord))
    }

    /// Returns the occupancy of a square.
    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.cells[coord.y() as usize][coord.x() as usize]
    }

    /// Overwrites a square.
    #[inline]
    pub fn set(&mut self, coord: Coord, value: Option<Piece>) {
        self.cells[coord.y() as usize][coord.x() as usize] = value;
    }

    #[inline]
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.piece_at(coord).is_none()
    }

    /// Returns every piece owned by `player`, scanning rows top to bottom
    /// and each row left to right.
    pub fn pieces_of(&self, player: Player) -> Vec<PlacedPiece> {
        Coord::all()
            .filter_map(|coord| {
                self.piece_at(coord)
                    .filter(|piece| piece.belongs_to(player))
                    .map(|piece| PlacedPiece::new(coord, piece))
            })
            .collect()
    }

    /// Returns the number of pieces owned by `player`.
    pub fn count_of(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_some_and(|piece| piece.belongs_to(player)))
            .count()
    }

    /// Marks the piece on `coord` as captured. It stays on the board until
    /// [`remove_captured`](Board::remove_captured) is called.
    pub fn mark_captured(&mut self, coord: Coord) {
        if !self.is_marked(coord) {
            self.chopping_block.push(coord);
        }
    }

    /// Returns true if the piece on `coord` has already been jumped.
    #[inline]
    pub fn is_marked(&self, coord: Coord) -> bool {
        self.chopping_block.contains(&coord)
    }

    /// Squares marked for capture, in the order they were jumped.
    pub fn chopping_block(&self) -> &[Coord] {
        &self.chopping_block
    }

    /// Empties every marked square and clears the chopping block,
    /// returning the squares that were cleared.
    pub fn remove_captured(&mut self) -> Vec<Coord> {
        let captured = std::mem::take(&mut self.chopping_block);
        for &coord in &captured {
            self.set(coord, None);
        }
        captured
    }

    /// Forgets all marks without touching the pieces.
    pub fn clear_chopping_block(&mut self) {
        self.chopping_block.clear();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_diagram())
    }
}
