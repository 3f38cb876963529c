//! Core types for English draughts.
//!
//! This crate provides the fundamental types used across the checkers engine:
//! - [`Player`], [`Rank`], and [`Piece`] for piece representation
//! - [`Coord`] and [`PlacedPiece`] for board coordinates
//! - [`Diagram`] text notation for setting up and printing boards

mod coord;
mod diagram;
mod piece;
mod player;

pub use coord::{Coord, CoordError, PlacedPiece, BOARD_SIZE};
pub use diagram::{Diagram, DiagramError};
pub use piece::{Piece, Rank};
pub use player::Player;
