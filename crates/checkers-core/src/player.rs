//! Player representation.

use serde::{Deserialize, Serialize};

/// The two sides of a checkers game.
///
/// Player One starts on rows 0-2 and moves toward increasing `y`.
/// Player Two starts on rows 5-7 and moves toward decreasing `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    /// Both players in order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Returns the other player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the index (0 for One, 1 for Two).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row direction men of this player move in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Player::One => 1,
            Player::Two => -1,
        }
    }

    /// Returns the row on which this player's men are crowned.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Player::One => 7,
            Player::Two => 0,
        }
    }

    /// Returns the three rows this player's men start on.
    #[inline]
    pub const fn home_rows(self) -> [u8; 3] {
        match self {
            Player::One => [0, 1, 2],
            Player::Two => [5, 6, 7],
        }
    }

    /// Returns the colour name shown to players.
    pub const fn name(self) -> &'static str {
        match self {
            Player::One => "White",
            Player::Two => "Yellow",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
