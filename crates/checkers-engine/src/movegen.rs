//! Move generation.
//!
//! Plain moves step one square diagonally onto an empty square. Hops jump
//! two squares diagonally over an opposing piece that has not already been
//! jumped in the current chain. Whenever a piece has a hop available, its
//! plain moves are illegal.

use crate::Board;
use checkers_core::{Coord, PlacedPiece};

/// The destination squares available to one piece.
///
/// A piece moves along at most four diagonals, so a fixed-size array avoids
/// heap allocations during generation.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Targets {
    squares: [Coord; Self::MAX_TARGETS],
    len: usize,
}

impl Targets {
    /// Maximum number of destinations for a single piece.
    pub const MAX_TARGETS: usize = 4;

    /// Creates an empty target list.
    #[inline]
    pub const fn new() -> Self {
        Targets {
            squares: [Coord::ORIGIN; Self::MAX_TARGETS],
            len: 0,
        }
    }

    /// Adds a destination to the list.
    #[inline]
    pub fn push(&mut self, coord: Coord) {
        debug_assert!(self.len < Self::MAX_TARGETS);
        self.squares[self.len] = coord;
        self.len += 1;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Coord] {
        &self.squares[..self.len]
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.as_slice().contains(&coord)
    }

    /// Returns the destinations as an owned vector.
    pub fn to_vec(&self) -> Vec<Coord> {
        self.as_slice().to_vec()
    }
}

impl Default for Targets {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Targets {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for Targets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Generates the hops available to `mover`.
///
/// `origin` is the square the moving piece still physically occupies. During
/// a chain the piece is only lifted off that square when the chain resolves,
/// so landing back on it is allowed. Outside a chain pass `mover.coord`.
pub fn generate_hops(board: &Board, mover: PlacedPiece, origin: Coord) -> Targets {
    let mut targets = Targets::new();
    let from = mover.coord;

    for &(dx, dy) in mover.piece.directions() {
        let (Some(over), Some(landing)) = (from.offset(dx, dy), from.offset(2 * dx, 2 * dy)) else {
            continue;
        };

        let jumps_opponent = board
            .piece_at(over)
            .is_some_and(|piece| piece.is_opponent_of(mover.piece));
        let landing_vacant = board.is_empty(landing) || landing == origin;

        if jumps_opponent && !board.is_marked(over) && landing_vacant {
            targets.push(landing);
        }
    }

    targets
}

/// Generates the one-square diagonal moves available to `mover`, ignoring
/// captures.
pub fn generate_steps(board: &Board, mover: PlacedPiece) -> Targets {
    let mut targets = Targets::new();

    for &(dx, dy) in mover.piece.directions() {
        if let Some(to) = mover.coord.offset(dx, dy) {
            if board.is_empty(to) {
                targets.push(to);
            }
        }
    }

    targets
}

/// Generates the legal destinations for `mover`: its hops if it has any,
/// otherwise its plain steps.
pub fn generate_moves(board: &Board, mover: PlacedPiece, origin: Coord) -> Targets {
    let hops = generate_hops(board, mover, origin);
    if hops.is_empty() {
        generate_steps(board, mover)
    } else {
        hops
    }
}
