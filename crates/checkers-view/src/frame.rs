//! Per-frame draw lists.
//!
//! A [`Frame`] is a flat list of primitive shapes in paint order. Hosts
//! replay it onto whatever surface they have.

use crate::config::Rgb;
use crate::controller::{Hand, InputController};
use crate::geometry::PixelPos;
use checkers_core::{Coord, Piece, PlacedPiece, Player};
use serde::Serialize;
use std::f64::consts::FRAC_1_SQRT_2;

/// A single drawing primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Fill the whole surface.
    Clear { color: Rgb },
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        color: Rgb,
    },
    /// A filled circle.
    Circle {
        center: PixelPos,
        radius: i32,
        color: Rgb,
    },
    /// An open polyline through `points`.
    Lines {
        points: Vec<PixelPos>,
        width: i32,
        color: Rgb,
    },
    Text {
        text: String,
        at: PixelPos,
        size: i32,
        color: Rgb,
    },
}

/// Everything to paint for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    fn square(&mut self, corner: PixelPos, size: i32, color: Rgb) {
        self.push(DrawCommand::Rect {
            x: corner.x,
            y: corner.y,
            width: size,
            height: size,
            color,
        });
    }

    fn line(&mut self, from: PixelPos, to: PixelPos, width: i32, color: Rgb) {
        self.push(DrawCommand::Lines {
            points: vec![from, to],
            width,
            color,
        });
    }

    /// Serializes the frame for a host.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

const MARK_THICKNESS: i32 = 2;
const PATH_THICKNESS: i32 = 4;

/// Paints the board, highlights, move path, pieces, and banner.
pub(crate) fn build(ctl: &InputController) -> Frame {
    let mut frame = Frame::default();
    let theme = &ctl.config().theme;
    let geometry = ctl.geometry();
    let game = ctl.game();
    let size = geometry.square_size();

    frame.push(DrawCommand::Clear {
        color: theme.background,
    });

    for coord in Coord::all() {
        let color = if coord.is_playable() {
            theme.playable_square
        } else {
            theme.other_square
        };
        frame.square(geometry.corner_of(coord), size, color);
    }

    // Destinations are only shown while the piece is in hand.
    if let (Hand::Holding { .. }, Some(chain)) = (ctl.hand(), game.chain()) {
        for &target in chain.targets() {
            frame.square(geometry.corner_of(target), size, theme.legal_move);
        }
    }

    if let Some(hover) = ctl.hover() {
        frame.square(geometry.corner_of(hover), size, theme.hover);
    }

    let path = ctl.move_path();
    if path.len() > 1 {
        frame.push(DrawCommand::Lines {
            points: path.to_vec(),
            width: PATH_THICKNESS,
            color: theme.move_path,
        });
        for &hop in &path[1..path.len() - 1] {
            frame.push(DrawCommand::Circle {
                center: hop,
                radius: geometry.piece_radius() * 9 / 20,
                color: theme.move_path,
            });
        }
    }

    let selectable: Vec<Coord> = match game.chain() {
        Some(chain) => vec![chain.origin().coord],
        None => game.selectable_pieces().iter().map(|p| p.coord).collect(),
    };
    let lifted = ctl.hand().square();

    let mut in_hand = None;
    for coord in Coord::all() {
        let Some(piece) = game.board().piece_at(coord) else {
            continue;
        };
        let placed = PlacedPiece::new(coord, piece);
        if lifted == Some(coord) {
            in_hand = ctl.hand().pos().map(|pos| (placed, pos));
            continue;
        }
        draw_piece(&mut frame, ctl, placed, geometry.center_of(coord), &selectable);
    }
    if let Some((placed, pos)) = in_hand {
        draw_piece(&mut frame, ctl, placed, pos, &selectable);
    }

    if let Some(result) = game.result() {
        let board = geometry.board_size();
        frame.push(DrawCommand::Text {
            text: result.to_string(),
            at: PixelPos::new(board * 7 / 32, board * 5 / 12),
            size: board * 13 / 96,
            color: theme.banner_text,
        });
    }

    frame
}

fn draw_piece(
    frame: &mut Frame,
    ctl: &InputController,
    placed: PlacedPiece,
    at: PixelPos,
    selectable: &[Coord],
) {
    let theme = &ctl.config().theme;
    let radius = ctl.geometry().piece_radius();

    let outline = if selectable.contains(&placed.coord) {
        theme.selectable_outline
    } else {
        theme.outline
    };
    frame.push(DrawCommand::Circle {
        center: at,
        radius: radius * 23 / 20,
        color: outline,
    });
    frame.push(DrawCommand::Circle {
        center: at,
        radius,
        color: piece_color(ctl, placed.piece),
    });

    if placed.piece.is_king() {
        let (x, y) = (at.x, at.y);
        let nudge = MARK_THICKNESS / 2;
        frame.line(
            PixelPos::new(x - radius, y - nudge),
            PixelPos::new(x + radius, y - nudge),
            MARK_THICKNESS,
            theme.outline,
        );
        frame.line(
            PixelPos::new(x - nudge, y - radius),
            PixelPos::new(x - nudge, y + radius),
            MARK_THICKNESS,
            theme.outline,
        );
    }

    if ctl.game().board().is_marked(placed.coord) {
        let d = (f64::from(radius) * FRAC_1_SQRT_2) as i32;
        frame.line(
            PixelPos::new(at.x - d, at.y - d),
            PixelPos::new(at.x + d, at.y + d),
            MARK_THICKNESS,
            theme.capture_mark,
        );
        frame.line(
            PixelPos::new(at.x - d, at.y + d),
            PixelPos::new(at.x + d, at.y - d),
            MARK_THICKNESS,
            theme.capture_mark,
        );
    }
}

fn piece_color(ctl: &InputController, piece: Piece) -> Rgb {
    let theme = &ctl.config().theme;
    match piece.owner {
        Player::One => theme.player_one,
        Player::Two => theme.player_two,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ViewConfig;
    use checkers_engine::{Board, Game};

    fn c(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    fn circles_at(frame: &Frame, at: PixelPos) -> Vec<(i32, Rgb)> {
        frame
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } if *center == at => Some((*radius, *color)),
                _ => None,
            })
            .collect()
    }

    fn rects_with(frame: &Frame, wanted: Rgb) -> usize {
        frame
            .commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Rect { color, .. } if *color == wanted))
            .count()
    }

    #[test]
    fn opening_frame() {
        let ctl = InputController::new(ViewConfig::default());
        let theme = ctl.config().theme.clone();
        let frame = ctl.frame();

        assert_eq!(frame.commands[0], DrawCommand::Clear { color: theme.background });
        assert_eq!(rects_with(&frame, theme.playable_square), 32);
        assert_eq!(rects_with(&frame, theme.other_square), 32);

        // 24 pieces, an outline and a body each.
        let circles = frame
            .commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Circle { .. }))
            .count();
        assert_eq!(circles, 48);

        // Yellow's front row is selectable, its back row is not.
        let front = circles_at(&frame, ctl.geometry().center_of(c(1, 5)));
        assert_eq!(front[0], (27, theme.selectable_outline));
        assert_eq!(front[1], (24, theme.player_two));
        let back = circles_at(&frame, ctl.geometry().center_of(c(1, 7)));
        assert_eq!(back[0].1, theme.outline);
    }

    #[test]
    fn held_piece_shows_targets_and_is_drawn_last() {
        let mut ctl = InputController::new(ViewConfig::default());
        let theme = ctl.config().theme.clone();
        let grab = ctl.geometry().center_of(c(1, 5));
        let hover = ctl.geometry().center_of(c(2, 4));
        ctl.pointer_down(grab);
        ctl.pointer_moved(hover);

        let frame = ctl.frame();
        // (0, 4) is a legal target; (2, 4) is legal and hovered.
        assert_eq!(rects_with(&frame, theme.legal_move), 2);
        assert_eq!(rects_with(&frame, theme.hover), 1);
        assert!(frame.commands.iter().any(|cmd| matches!(
            cmd,
            DrawCommand::Lines { points, .. } if points == &vec![grab, hover]
        )));

        let last_body = frame.commands.last().unwrap();
        assert_eq!(
            last_body,
            &DrawCommand::Circle {
                center: hover,
                radius: 24,
                color: theme.player_two
            }
        );
    }

    #[test]
    fn kings_and_captured_pieces_are_marked() {
        let board = Board::from_diagram(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . y . y . .
            . . W . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        )
        .unwrap();
        let mut ctl = InputController::with_game(
            Game::from_board(board, Player::One),
            ViewConfig::default(),
        );
        let theme = ctl.config().theme.clone();
        let start = ctl.geometry().center_of(c(2, 5));
        let landing = ctl.geometry().center_of(c(4, 3));
        ctl.pointer_down(start);
        ctl.pointer_moved(landing);
        ctl.pointer_up(landing);
        assert_eq!(ctl.game().board().chopping_block(), &[c(3, 4)]);

        let frame = ctl.frame();
        let red_lines = frame
            .commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Lines { color, .. } if *color == theme.capture_mark))
            .count();
        assert_eq!(red_lines, 2);

        let crosses = frame
            .commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Lines { color, width: 2, .. } if *color == theme.outline))
            .count();
        assert_eq!(crosses, 2);

        // One hop dot on the path, at the landing square.
        let dots = circles_at(&frame, landing);
        assert!(dots.contains(&(10, theme.move_path)));
    }

    #[test]
    fn winner_banner() {
        let board = Board::from_diagram(
            "
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . w . . . .
            . . y . . . . .
            . . . . . . . .
            . . . . . . . .
            ",
        )
        .unwrap();
        let mut ctl = InputController::with_game(
            Game::from_board(board, Player::Two),
            ViewConfig::default(),
        );
        let start = ctl.geometry().center_of(c(2, 5));
        let landing = ctl.geometry().center_of(c(4, 3));
        ctl.pointer_down(start);
        ctl.pointer_up(landing);

        let frame = ctl.frame();
        let Some(DrawCommand::Text { text, at, size, .. }) = frame.commands.last() else {
            panic!("banner should be painted last");
        };
        assert_eq!(text, "Yellow Wins!");
        assert_eq!(*at, PixelPos::new(105, 200));
        assert_eq!(*size, 65);
    }

    #[test]
    fn serializes_with_kind_tags() {
        let frame = InputController::new(ViewConfig::default()).frame();
        let json: serde_json::Value = serde_json::from_str(&frame.to_json().unwrap()).unwrap();
        assert_eq!(json["commands"][0]["kind"], "clear");
        assert_eq!(json["commands"][0]["color"], serde_json::json!([100, 100, 100]));
        assert_eq!(json["commands"][1]["kind"], "rect");
    }
}
