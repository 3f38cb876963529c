//! Win detection.

use crate::Board;
use checkers_core::Player;
use serde::{Deserialize, Serialize};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Player Two has no pieces left.
    PlayerOneWins,
    /// Player One has no pieces left.
    PlayerTwoWins,
}

impl GameResult {
    /// Returns the result in which `player` wins.
    pub const fn won_by(player: Player) -> Self {
        match player {
            Player::One => GameResult::PlayerOneWins,
            Player::Two => GameResult::PlayerTwoWins,
        }
    }

    pub const fn winner(self) -> Player {
        match self {
            GameResult::PlayerOneWins => Player::One,
            GameResult::PlayerTwoWins => Player::Two,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Wins!", self.winner())
    }
}

/// Returns the result if either side has run out of pieces.
///
/// A side that still has pieces but cannot move is not treated as lost.
pub fn game_result(board: &Board) -> Option<GameResult> {
    // Player Two is checked first, so a board with no pieces at all goes to Player One.
    Player::ALL
        .into_iter()
        .rev()
        .find(|&player| board.count_of(player) == 0)
        .map(|loser| GameResult::won_by(loser.opponent()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::{Coord, Piece};

    #[test]
    fn no_result_at_start() {
        assert_eq!(game_result(&Board::startpos()), None);
    }

    #[test]
    fn empty_side_loses() {
        let mut board = Board::empty();
        board.set(Coord::new(0, 0).unwrap(), Some(Piece::man(Player::One)));
        assert_eq!(game_result(&board), Some(GameResult::PlayerOneWins));

        let mut board = Board::empty();
        board.set(Coord::new(1, 7).unwrap(), Some(Piece::king(Player::Two)));
        assert_eq!(game_result(&board), Some(GameResult::PlayerTwoWins));
    }

    #[test]
    fn blocked_side_is_not_a_loss() {
        let board = Board::from_diagram(
            "
            w . . . . . . .
            . y . . . . . .
            . . y . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        )
        .unwrap();
        assert_eq!(game_result(&board), None);
    }

    #[test]
    fn display() {
        assert_eq!(GameResult::PlayerOneWins.to_string(), "White Wins!");
        assert_eq!(GameResult::PlayerTwoWins.to_string(), "Yellow Wins!");
    }
}
