//! Turn management and move progression.
//!
//! [`Game`] owns the board, the side to move, and the move currently in
//! progress. A move runs through three states:
//!
//! - **Idle**: nothing selected.
//! - **Dragging**: a piece of the side to move has been picked up and its
//!   legal destinations are known.
//! - **Resolving**: the piece has made at least one hop and more hops are
//!   forced. The same piece must continue until no hop remains.
//!
//! The turn passes to the opponent only when a move chain resolves.

use crate::movegen::{generate_hops, generate_moves, Targets};
use crate::rules::{game_result, GameResult};
use crate::Board;
use checkers_core::{Coord, CoordError, Piece, PlacedPiece, Player};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Error type for game operations.
///
/// None of these are fatal: a rejected command leaves the game exactly as
/// it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A coordinate outside the board was supplied.
    #[error(transparent)]
    OutOfRange(#[from] CoordError),
    /// The target is not among the selected piece's legal destinations.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Coord, to: Coord },
    /// A move was attempted with nothing selected.
    #[error("no piece is selected")]
    NoPieceSelected,
    /// A piece is already picked up.
    #[error("a piece is already selected")]
    PieceAlreadySelected,
    /// A capture chain is open and must be continued.
    #[error("a capture chain is in progress")]
    ChainInProgress,
    /// The selected square holds no piece.
    #[error("no piece at {0}")]
    EmptySquare(Coord),
    /// The selected piece belongs to the other player.
    #[error("piece at {0} does not belong to the side to move")]
    NotYourPiece(Coord),
    /// The piece cannot move this turn, or another piece has a capture.
    #[error("piece at {0} cannot be moved this turn")]
    NotSelectable(Coord),
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,
}

/// A piece in motion during one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveChain {
    /// Where the piece started and what it was when picked up.
    origin: PlacedPiece,
    /// Square reached by the most recent hop, or the origin before any.
    current: Coord,
    /// Squares visited so far, starting with the origin.
    path: Vec<Coord>,
    /// Legal destinations from `current`.
    targets: Targets,
}

impl MoveChain {
    fn new(origin: PlacedPiece, targets: Targets) -> Self {
        MoveChain {
            origin,
            current: origin.coord,
            path: vec![origin.coord],
            targets,
        }
    }

    pub fn origin(&self) -> PlacedPiece {
        self.origin
    }

    pub fn current(&self) -> Coord {
        self.current
    }

    /// The moving piece at the square it has reached.
    pub fn mover(&self) -> PlacedPiece {
        self.origin.at(self.current)
    }

    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    /// Returns true once the piece has made a hop.
    pub fn has_hopped(&self) -> bool {
        self.path.len() > 1
    }
}

/// Where the current turn stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TurnState {
    #[default]
    Idle,
    Dragging(MoveChain),
    Resolving(MoveChain),
}

impl TurnState {
    /// Returns the move in progress, if any.
    pub fn chain(&self) -> Option<&MoveChain> {
        match self {
            TurnState::Idle => None,
            TurnState::Dragging(chain) | TurnState::Resolving(chain) => Some(chain),
        }
    }
}

/// A completed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveSummary {
    pub player: Player,
    pub from: Coord,
    pub to: Coord,
    /// Every square visited, origin first.
    pub path: Vec<Coord>,
    /// Squares whose pieces were removed.
    pub captured: Vec<Coord>,
    /// The piece as it stands on `to`.
    pub piece: Piece,
    pub promoted: bool,
}

/// Outcome of a successful [`Game::progress`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveProgress {
    /// A hop landed and more hops are forced; the targets are the only legal
    /// continuations.
    Continues(Targets),
    /// The move is over and the turn has passed.
    Complete(MoveSummary),
}

/// A game of English draughts.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current_player: Player,
    turn: TurnState,
    result: Option<GameResult>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Player Two opens the game.
    pub const FIRST_PLAYER: Player = Player::Two;

    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Game {
            board: Board::startpos(),
            current_player: Self::FIRST_PLAYER,
            turn: TurnState::Idle,
            result: None,
        }
    }

    /// Creates a game from a custom position with `to_move` to play.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let mut game = Game {
            board,
            current_player: to_move,
            turn: TurnState::Idle,
            result: None,
        };
        game.board.clear_chopping_block();
        game.test_for_game_over();
        game
    }

    /// Restarts from the standard starting position.
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game result if the game is over.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn turn_state(&self) -> &TurnState {
        &self.turn
    }

    /// Returns the move in progress, if any.
    pub fn chain(&self) -> Option<&MoveChain> {
        self.turn.chain()
    }

    /// Returns the piece on a square given as raw indices.
    pub fn piece_at(&self, x: i32, y: i32) -> Result<Option<Piece>, GameError> {
        Ok(self.board.get(x, y)?)
    }

    pub fn count_of(&self, player: Player) -> usize {
        self.board.count_of(player)
    }

    /// Returns true if `piece` belongs to `player`.
    pub fn is_own_piece(player: Player, piece: Option<Piece>) -> bool {
        piece.is_some_and(|piece| piece.belongs_to(player))
    }

    /// The square the piece standing on `coord` physically occupies: its
    /// chain origin while it is mid-chain, otherwise `coord` itself.
    fn origin_of(&self, coord: Coord) -> Coord {
        match self.chain() {
            Some(chain) if chain.current == coord => chain.origin.coord,
            _ => coord,
        }
    }

    /// Returns the legal destinations for a piece. Hops, when available,
    /// are the only legal moves.
    pub fn legal_moves(&self, piece: PlacedPiece) -> Targets {
        generate_moves(&self.board, piece, self.origin_of(piece.coord))
    }

    /// Returns the two-square capture destinations for a piece.
    pub fn hops(&self, piece: PlacedPiece) -> Targets {
        generate_hops(&self.board, piece, self.origin_of(piece.coord))
    }

    pub fn is_legal_move(&self, piece: PlacedPiece, target: Coord) -> bool {
        self.legal_moves(piece).contains(target)
    }

    /// Returns true if `player` has at least one legal move.
    ///
    /// This does not affect the result: a blocked side does not lose.
    pub fn can_move(&self, player: Player) -> bool {
        self.board
            .pieces_of(player)
            .into_iter()
            .any(|piece| !generate_moves(&self.board, piece, piece.coord).is_empty())
    }

    /// Returns the pieces the side to move may pick up.
    ///
    /// While a move is in progress only the moving piece is selectable. Otherwise,
    /// if any piece has a hop, only pieces with hops are selectable; if none
    /// does, every piece with a legal step is.
    pub fn selectable_pieces(&self) -> Vec<PlacedPiece> {
        if self.result.is_some() {
            return Vec::new();
        }
        if let Some(chain) = self.chain() {
            return vec![chain.mover()];
        }

        let pieces = self.board.pieces_of(self.current_player);
        let capturing: Vec<PlacedPiece> = pieces
            .iter()
            .copied()
            .filter(|&piece| !self.hops(piece).is_empty())
            .collect();
        if !capturing.is_empty() {
            return capturing;
        }

        pieces
            .into_iter()
            .filter(|&piece| !self.legal_moves(piece).is_empty())
            .collect()
    }

    /// Picks up the piece on `coord` and returns its legal destinations.
    pub fn select(&mut self, coord: Coord) -> Result<Targets, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameAlreadyOver);
        }
        match self.turn {
            TurnState::Idle => {}
            TurnState::Dragging(_) => return Err(GameError::PieceAlreadySelected),
            TurnState::Resolving(_) => return Err(GameError::ChainInProgress),
        }

        let piece = self
            .board
            .piece_at(coord)
            .ok_or(GameError::EmptySquare(coord))?;
        if !Self::is_own_piece(self.current_player, Some(piece)) {
            return Err(GameError::NotYourPiece(coord));
        }

        let placed = PlacedPiece::new(coord, piece);
        if !self.selectable_pieces().contains(&placed) {
            return Err(GameError::NotSelectable(coord));
        }

        let targets = self.legal_moves(placed);
        debug!(player = %self.current_player, from = %coord, ?targets, "piece selected");
        self.turn = TurnState::Dragging(MoveChain::new(placed, targets));
        Ok(targets)
    }

    /// Puts the selected piece back down without moving it.
    ///
    /// Fails with [`GameError::ChainInProgress`] once a hop has been made.
    pub fn cancel(&mut self) -> Result<(), GameError> {
        match self.turn {
            TurnState::Idle => Err(GameError::NoPieceSelected),
            TurnState::Resolving(_) => Err(GameError::ChainInProgress),
            TurnState::Dragging(_) => {
                self.turn = TurnState::Idle;
                debug!("selection cancelled");
                Ok(())
            }
        }
    }

    /// Moves the selected piece to `target`.
    ///
    /// A rejected target leaves the board, the chain, and the selection
    /// untouched.
    pub fn progress(&mut self, target: Coord) -> Result<MoveProgress, GameError> {
        let chain = self.chain().ok_or(GameError::NoPieceSelected)?;
        if !chain.targets.contains(target) {
            debug!(from = %chain.current, to = %target, "illegal move rejected");
            return Err(GameError::IllegalMove {
                from: chain.current,
                to: target,
            });
        }

        match std::mem::take(&mut self.turn) {
            TurnState::Idle => Err(GameError::NoPieceSelected),
            TurnState::Dragging(chain) | TurnState::Resolving(chain) => {
                Ok(self.start_move(chain, target))
            }
        }
    }

    /// Advances `chain` to `target`, which must already be known legal.
    fn start_move(&mut self, mut chain: MoveChain, target: Coord) -> MoveProgress {
        let hop_from = chain.current;
        chain.current = target;
        chain.path.push(target);

        if hop_from.dx(target) == 2 {
            if let Some(jumped) = hop_from.jumped_over(target) {
                self.board.mark_captured(jumped);
            }

            let more = generate_hops(&self.board, chain.mover(), chain.origin.coord);
            if !more.is_empty() {
                debug!(from = %hop_from, to = %target, continuations = ?more, "hop made, chain continues");
                chain.targets = more;
                self.turn = TurnState::Resolving(chain);
                return MoveProgress::Continues(more);
            }
        }

        MoveProgress::Complete(self.end_move(chain))
    }

    /// Resolves a chain: lifts the captured pieces, moves and possibly
    /// crowns the piece, and passes the turn.
    fn end_move(&mut self, chain: MoveChain) -> MoveSummary {
        let captured = self.board.remove_captured();
        let from = chain.origin.coord;
        let to = chain.current;

        self.board.set(from, None);
        let promoted = chain.origin.piece.promotes_on(to.y());
        let piece = if promoted {
            chain.origin.piece.crowned()
        } else {
            chain.origin.piece
        };
        self.board.set(to, Some(piece));

        let player = self.current_player;
        self.turn = TurnState::Idle;
        self.current_player = player.opponent();

        info!(
            %player,
            %from,
            %to,
            captured = captured.len(),
            promoted,
            "move complete"
        );

        self.test_for_game_over();

        MoveSummary {
            player,
            from,
            to,
            path: chain.path,
            captured,
            piece,
            promoted,
        }
    }

    /// Ends the game if either side has no pieces left.
    fn test_for_game_over(&mut self) {
        if let Some(result) = game_result(&self.board) {
            info!(%result, "game over");
            self.result = Some(result);
        }
    }
}
