//! Text rendering of the board and turn status.

use checkers_core::{Coord, BOARD_SIZE};
use checkers_view::{Hand, InputController};

/// Draws the board with column and row labels.
///
/// Pieces use diagram letters. A piece waiting on the chopping block shows
/// as `x` and the piece in hand is bracketed.
pub fn board(ctl: &InputController) -> String {
    let board = ctl.game().board();
    let held = match ctl.hand() {
        Hand::Holding { square, .. } => Some(square),
        _ => None,
    };

    let header: String = (0..BOARD_SIZE).map(|x| format!(" {} ", x)).collect();
    let mut out = format!("   {}\n", header);

    for y in 0..BOARD_SIZE {
        out.push_str(&format!(" {} ", y));
        for coord in (0..BOARD_SIZE).filter_map(|x| Coord::new(x, y)) {
            let ch = match board.piece_at(coord) {
                Some(_) if board.is_marked(coord) => 'x',
                Some(piece) => piece.to_diagram_char(),
                None if coord.is_playable() => '.',
                None => ' ',
            };
            if held == Some(coord) {
                out.push_str(&format!("[{}]", ch));
            } else {
                out.push_str(&format!(" {} ", ch));
            }
        }
        out.push('\n');
    }
    out
}

/// One line saying whose turn it is and what can be pressed.
pub fn status(ctl: &InputController) -> String {
    let game = ctl.game();
    if let Some(result) = game.result() {
        return result.to_string();
    }

    let player = game.current_player();
    match game.chain() {
        Some(chain) if chain.has_hopped() => {
            format!("{} must keep jumping: {}", player, squares(chain.targets()))
        }
        Some(chain) => format!(
            "{} holds {}, move to: {}",
            player,
            chain.origin().coord,
            squares(chain.targets())
        ),
        None => {
            let pieces = game.selectable_pieces();
            format!(
                "{} to move, pick up: {}",
                player,
                squares(pieces.iter().map(|p| &p.coord))
            )
        }
    }
}

fn squares<'a>(coords: impl IntoIterator<Item = &'a Coord>) -> String {
    coords
        .into_iter()
        .map(|c| format!("{},{}", c.x(), c.y()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_view::ViewConfig;

    #[test]
    fn opening_board() {
        let ctl = InputController::new(ViewConfig::default());
        let text = board(&ctl);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "    0  1  2  3  4  5  6  7 ");
        assert_eq!(lines[1], " 0  w     w     w     w    ");
        assert_eq!(lines[5], " 4  .     .     .     .    ");
        assert_eq!(lines[8], " 7     y     y     y     y ");
    }

    #[test]
    fn opening_status() {
        let ctl = InputController::new(ViewConfig::default());
        assert_eq!(status(&ctl), "Yellow to move, pick up: 1,5 3,5 5,5 7,5");
    }

    #[test]
    fn held_piece() {
        let mut ctl = InputController::new(ViewConfig::default());
        let at = ctl.geometry().center_of(Coord::new(1, 5).unwrap());
        ctl.pointer_down(at);
        assert_eq!(status(&ctl), "Yellow holds (1, 5), move to: 0,4 2,4");
        assert!(board(&ctl).lines().nth(6).unwrap().starts_with(" 5    [y]"));
    }
}
