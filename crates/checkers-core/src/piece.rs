//! Checkers piece representation.

use crate::Player;
use serde::{Deserialize, Serialize};

/// The rank of a piece: a plain man or a crowned king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Man = 0,
    King = 1,
}

/// A piece on the board, owned by one player.
///
/// An empty square is represented as `None` wherever an `Option<Piece>`
/// is used, so every cell holds exactly one occupancy value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub rank: Rank,
}

/// Diagonal steps a king may take.
const ALL_DIAGONALS: [(i8, i8); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

impl Piece {
    /// Creates a piece.
    #[inline]
    pub const fn new(owner: Player, rank: Rank) -> Self {
        Piece { owner, rank }
    }

    /// Creates an uncrowned piece.
    #[inline]
    pub const fn man(owner: Player) -> Self {
        Self::new(owner, Rank::Man)
    }

    /// Creates a crowned piece.
    #[inline]
    pub const fn king(owner: Player) -> Self {
        Self::new(owner, Rank::King)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Returns true if this piece is owned by `player`.
    #[inline]
    pub fn belongs_to(self, player: Player) -> bool {
        self.owner == player
    }

    /// Returns true if `other` is owned by the opposing player.
    #[inline]
    pub fn is_opponent_of(self, other: Piece) -> bool {
        self.owner != other.owner
    }

    /// Returns this piece promoted to king. Kings stay kings.
    #[inline]
    pub const fn crowned(self) -> Self {
        Self::king(self.owner)
    }

    /// Returns true if a man of this owner standing on `row` must be crowned.
    #[inline]
    pub fn promotes_on(self, row: u8) -> bool {
        !self.is_king() && row == self.owner.promotion_row()
    }

    /// Returns the diagonal unit steps this piece may move along.
    ///
    /// Men only move toward the opponent's edge; kings move in all four
    /// diagonal directions.
    pub fn directions(self) -> &'static [(i8, i8)] {
        match (self.rank, self.owner) {
            (Rank::King, _) => &ALL_DIAGONALS,
            (Rank::Man, Player::One) => &ALL_DIAGONALS[..2],
            (Rank::Man, Player::Two) => &ALL_DIAGONALS[2..],
        }
    }

    /// Returns the diagram character for this piece.
    pub const fn to_diagram_char(self) -> char {
        match (self.owner, self.rank) {
            (Player::One, Rank::Man) => 'w',
            (Player::One, Rank::King) => 'W',
            (Player::Two, Rank::Man) => 'y',
            (Player::Two, Rank::King) => 'Y',
        }
    }

    /// Parses a diagram character into a piece.
    pub const fn from_diagram_char(c: char) -> Option<Self> {
        match c {
            'w' => Some(Piece::man(Player::One)),
            'W' => Some(Piece::king(Player::One)),
            'y' => Some(Piece::man(Player::Two)),
            'Y' => Some(Piece::king(Player::Two)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = match self.rank {
            Rank::Man => "man",
            Rank::King => "king",
        };
        write!(f, "{} {}", self.owner, rank)
    }
}
