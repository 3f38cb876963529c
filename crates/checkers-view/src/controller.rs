//! Pointer input handling.
//!
//! Pressing on a selectable piece picks it up and it follows the pointer.
//! Releasing over a legal square makes the move. After a hop that forces
//! another, the piece stays in hand and the next hop is chosen with a press.
//! Dropping on any other square snaps the piece back, unless a capture
//! chain is open, in which case it stays in hand until a legal hop is chosen.
//! Releasing on the square the piece came from keeps it in hand, so a click
//! on the piece and then a click on the destination also makes the move.

use crate::animation::snap_step;
use crate::config::ViewConfig;
use crate::frame::{self, Frame};
use crate::geometry::{BoardGeometry, PixelPos};
use checkers_core::Coord;
use checkers_engine::{Game, GameError, MoveProgress};
use tracing::debug;

/// What the pointer is doing with a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hand {
    #[default]
    Empty,
    /// The piece whose board square is `square` is drawn at `pos`.
    Holding { square: Coord, pos: PixelPos },
    /// The piece on `square` is easing from `pos` into `target`.
    Snapping {
        square: Coord,
        pos: PixelPos,
        target: PixelPos,
    },
}

impl Hand {
    /// The board square of the piece drawn away from its square, if any.
    pub fn square(&self) -> Option<Coord> {
        match *self {
            Hand::Empty => None,
            Hand::Holding { square, .. } | Hand::Snapping { square, .. } => Some(square),
        }
    }

    /// Where that piece is drawn.
    pub fn pos(&self) -> Option<PixelPos> {
        match *self {
            Hand::Empty => None,
            Hand::Holding { pos, .. } | Hand::Snapping { pos, .. } => Some(pos),
        }
    }
}

/// Drives a [`Game`] from pointer events and exposes what to draw.
#[derive(Debug, Clone)]
pub struct InputController {
    game: Game,
    config: ViewConfig,
    geometry: BoardGeometry,
    hand: Hand,
    /// Legal square under the pointer while dragging.
    hover: Option<Coord>,
    /// Polyline of the move being made: the piece's starting centre, one
    /// point per hop landed, and the pointer last.
    path: Vec<PixelPos>,
    /// Why the engine turned down the last press or drop.
    rejected: Option<GameError>,
}

impl InputController {
    pub fn new(config: ViewConfig) -> Self {
        Self::with_game(Game::new(), config)
    }

    /// Wraps an existing game, e.g. one set up from a diagram.
    pub fn with_game(game: Game, config: ViewConfig) -> Self {
        InputController {
            game,
            geometry: BoardGeometry::new(config.board_size),
            config,
            hand: Hand::Empty,
            hover: None,
            path: Vec::new(),
            rejected: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn hand(&self) -> Hand {
        self.hand
    }

    pub fn hover(&self) -> Option<Coord> {
        self.hover
    }

    pub fn move_path(&self) -> &[PixelPos] {
        &self.path
    }

    /// Why the engine refused the latest press or drop, if it did.
    pub fn rejected(&self) -> Option<&GameError> {
        self.rejected.as_ref()
    }

    /// Starts a new game, dropping anything in hand.
    pub fn reset(&mut self) {
        self.game.reset();
        self.hand = Hand::Empty;
        self.hover = None;
        self.path.clear();
        self.rejected = None;
    }

    pub fn pointer_down(&mut self, pos: PixelPos) {
        self.rejected = None;
        if self.path.is_empty() {
            self.pick_up(pos);
        } else {
            self.drop_at(pos);
        }
    }

    pub fn pointer_moved(&mut self, pos: PixelPos) {
        let Hand::Holding { square, .. } = self.hand else {
            return;
        };
        self.hand = Hand::Holding { square, pos };
        if let Some(last) = self.path.last_mut() {
            *last = pos;
        }

        let under = self.geometry.index_from_position(pos);
        let legal = self.game.chain().map(|chain| *chain.targets());
        self.hover = under.filter(|&coord| legal.is_some_and(|targets| targets.contains(coord)));
    }

    pub fn pointer_up(&mut self, pos: PixelPos) {
        // A release only finishes the initial drag; later hops are pressed.
        if self.path.is_empty() || self.path.len() > 2 {
            return;
        }
        // Releasing where the piece was picked up is a click: keep holding it
        // so the next press chooses the destination.
        if let Hand::Holding { square, .. } = self.hand {
            if self.geometry.index_from_position(pos) == Some(square) {
                return;
            }
        }
        self.drop_at(pos);
    }

    /// Advances animations by one frame.
    pub fn update(&mut self) {
        if let Hand::Snapping {
            square,
            pos,
            target,
        } = self.hand
        {
            let pos = snap_step(pos, target);
            self.hand = if pos == target {
                Hand::Empty
            } else {
                Hand::Snapping {
                    square,
                    pos,
                    target,
                }
            };
        }
    }

    /// Builds the draw list for the current state.
    pub fn frame(&self) -> Frame {
        frame::build(self)
    }

    fn pick_up(&mut self, pos: PixelPos) {
        if self.hand != Hand::Empty {
            return;
        }
        let Some(square) = self.geometry.index_from_position(pos) else {
            return;
        };

        match self.game.select(square) {
            Ok(_) => {
                self.hand = Hand::Holding { square, pos };
                self.path = vec![self.geometry.center_of(square), pos];
            }
            Err(err) => {
                debug!(%square, %err, "piece not picked up");
                self.rejected = Some(err);
            }
        }
    }

    fn drop_at(&mut self, pos: PixelPos) {
        self.hover = None;
        let Hand::Holding { square, .. } = self.hand else {
            return;
        };

        let Some(target) = self.geometry.index_from_position(pos) else {
            self.put_back(square, pos);
            return;
        };

        match self.game.progress(target) {
            Ok(MoveProgress::Continues(_)) => {
                let landed = self.geometry.center_of(target);
                let at = self.path.len().saturating_sub(1);
                self.path.insert(at, landed);
            }
            Ok(MoveProgress::Complete(summary)) => {
                self.path.clear();
                self.hand = Hand::Snapping {
                    square: summary.to,
                    pos,
                    target: self.geometry.center_of(summary.to),
                };
            }
            Err(err) => {
                debug!(%err, "drop rejected");
                self.rejected = Some(err);
                self.put_back(square, pos);
            }
        }
    }

    /// Returns the held piece to its square, unless a capture chain holds it.
    fn put_back(&mut self, square: Coord, pos: PixelPos) {
        match self.game.cancel() {
            Ok(()) => {
                self.path.clear();
                self.hand = Hand::Snapping {
                    square,
                    pos,
                    target: self.geometry.center_of(square),
                };
            }
            Err(GameError::ChainInProgress) => {}
            Err(err) => debug!(%err, "nothing to put back"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::{Piece, Player};
    use checkers_engine::{Board, TurnState};

    fn c(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    fn controller() -> InputController {
        InputController::new(ViewConfig::default())
    }

    fn center(ctl: &InputController, x: u8, y: u8) -> PixelPos {
        ctl.geometry().center_of(c(x, y))
    }

    fn settle(ctl: &mut InputController) {
        for _ in 0..32 {
            ctl.update();
        }
    }

    #[test]
    fn drag_and_drop_plain_move() {
        let mut ctl = controller();
        let from = center(&ctl, 1, 5);
        let to = center(&ctl, 2, 4);

        ctl.pointer_down(from);
        assert_eq!(ctl.hand(), Hand::Holding { square: c(1, 5), pos: from });
        assert_eq!(ctl.move_path(), &[from, from]);

        ctl.pointer_moved(to);
        assert_eq!(ctl.hover(), Some(c(2, 4)));

        ctl.pointer_up(to);
        assert!(ctl.move_path().is_empty());
        assert_eq!(ctl.game().current_player(), Player::One);
        assert_eq!(ctl.game().board().piece_at(c(2, 4)), Some(Piece::man(Player::Two)));

        settle(&mut ctl);
        assert_eq!(ctl.hand(), Hand::Empty);
    }

    #[test]
    fn hover_ignores_illegal_squares() {
        let mut ctl = controller();
        ctl.pointer_down(center(&ctl, 1, 5));
        ctl.pointer_moved(center(&ctl, 1, 4));
        assert_eq!(ctl.hover(), None);
    }

    #[test]
    fn opponent_piece_is_not_picked_up() {
        let mut ctl = controller();
        ctl.pointer_down(center(&ctl, 0, 2));
        assert_eq!(ctl.hand(), Hand::Empty);
        assert!(ctl.move_path().is_empty());
        assert_eq!(ctl.game().turn_state(), &TurnState::Idle);
        assert_eq!(ctl.rejected(), Some(&GameError::NotYourPiece(c(0, 2))));

        // The next accepted press clears it.
        ctl.pointer_down(center(&ctl, 1, 5));
        assert_eq!(ctl.rejected(), None);
    }

    #[test]
    fn illegal_drop_snaps_back() {
        let mut ctl = controller();
        let from = center(&ctl, 1, 5);
        let bad = center(&ctl, 1, 3);
        let before = ctl.game().board().clone();

        ctl.pointer_down(from);
        ctl.pointer_moved(bad);
        ctl.pointer_up(bad);

        assert_eq!(
            ctl.hand(),
            Hand::Snapping {
                square: c(1, 5),
                pos: bad,
                target: from
            }
        );
        assert_eq!(ctl.game().board(), &before);
        assert_eq!(ctl.game().turn_state(), &TurnState::Idle);
        assert_eq!(ctl.game().current_player(), Player::Two);

        // Nothing can be picked up while the piece is still easing home.
        ctl.pointer_down(center(&ctl, 3, 5));
        assert_eq!(ctl.game().turn_state(), &TurnState::Idle);

        settle(&mut ctl);
        assert_eq!(ctl.hand(), Hand::Empty);
    }

    #[test]
    fn click_then_click_moves() {
        let mut ctl = controller();
        let from = center(&ctl, 1, 5);
        let to = center(&ctl, 2, 4);

        ctl.pointer_down(from);
        ctl.pointer_up(from);
        settle(&mut ctl);
        assert!(matches!(ctl.hand(), Hand::Holding { square, .. } if square == c(1, 5)));
        assert!(matches!(ctl.game().turn_state(), TurnState::Dragging(_)));

        ctl.pointer_down(to);
        ctl.pointer_up(to);
        assert_eq!(ctl.game().current_player(), Player::One);
        assert_eq!(ctl.game().board().piece_at(c(2, 4)), Some(Piece::man(Player::Two)));
        assert_eq!(ctl.game().board().piece_at(c(1, 5)), None);

        settle(&mut ctl);
        assert_eq!(ctl.hand(), Hand::Empty);
    }

    #[test]
    fn drop_off_board_snaps_back() {
        let mut ctl = controller();
        ctl.pointer_down(center(&ctl, 1, 5));
        ctl.pointer_up(PixelPos::new(-10, 900));
        assert!(matches!(ctl.hand(), Hand::Snapping { square, .. } if square == c(1, 5)));
        assert_eq!(ctl.game().turn_state(), &TurnState::Idle);
    }

    #[test]
    fn capture_chain_by_drag_then_press() {
        let board = Board::from_diagram(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . w . . .
            . . . . . . . .
            . . . . w . . .
            . . . . . y . .
            . . w . . . . .
            ",
        )
        .unwrap();
        let mut ctl =
            InputController::with_game(Game::from_board(board, Player::Two), ViewConfig::default());
        let start = center(&ctl, 5, 6);
        let first = center(&ctl, 3, 4);
        let second = center(&ctl, 5, 2);

        ctl.pointer_down(start);
        ctl.pointer_moved(first);
        ctl.pointer_up(first);

        // The first hop is recorded in the path and the piece stays in hand.
        assert_eq!(ctl.move_path(), &[start, first, first]);
        assert!(matches!(ctl.hand(), Hand::Holding { square, .. } if square == c(5, 6)));
        assert_eq!(ctl.game().board().chopping_block(), &[c(4, 5)]);

        // Releasing again does nothing; pressing on an illegal square keeps the chain.
        ctl.pointer_up(first);
        ctl.pointer_down(center(&ctl, 2, 3));
        assert!(matches!(ctl.game().turn_state(), TurnState::Resolving(_)));
        assert!(matches!(ctl.hand(), Hand::Holding { .. }));

        ctl.pointer_moved(second);
        assert_eq!(ctl.hover(), Some(c(5, 2)));
        ctl.pointer_down(second);

        assert!(ctl.move_path().is_empty());
        assert_eq!(ctl.game().count_of(Player::One), 1);
        assert_eq!(ctl.game().current_player(), Player::One);
        assert!(matches!(ctl.hand(), Hand::Snapping { square, .. } if square == c(5, 2)));
    }

    #[test]
    fn reset_clears_hand() {
        let mut ctl = controller();
        ctl.pointer_down(center(&ctl, 1, 5));
        ctl.reset();
        assert_eq!(ctl.hand(), Hand::Empty);
        assert!(ctl.move_path().is_empty());
        assert_eq!(ctl.game().turn_state(), &TurnState::Idle);
    }
}
