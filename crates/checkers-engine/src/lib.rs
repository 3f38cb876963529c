//! Rules engine for English draughts.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 occupancy grid plus the chopping block of pieces
//!   jumped during an open capture chain
//! - [`movegen`] - plain steps, mandatory hops, and [`Targets`]
//! - [`Game`] - turn alternation, multi-hop capture chains, promotion, and
//!   win detection
//!
//! # Example
//!
//! ```
//! use checkers_core::{Coord, Player};
//! use checkers_engine::{Game, MoveProgress};
//!
//! let mut game = Game::new();
//! assert_eq!(game.current_player(), Player::Two);
//!
//! let from = Coord::new(1, 5).unwrap();
//! let to = Coord::new(2, 4).unwrap();
//! let targets = game.select(from).unwrap();
//! assert!(targets.contains(to));
//!
//! match game.progress(to).unwrap() {
//!     MoveProgress::Complete(summary) => assert_eq!(summary.to, to),
//!     MoveProgress::Continues(_) => unreachable!("a plain step never chains"),
//! }
//! assert_eq!(game.current_player(), Player::One);
//! ```

mod board;
mod game;
pub mod movegen;
pub mod rules;

pub use board::Board;
pub use game::{Game, GameError, MoveChain, MoveProgress, MoveSummary, TurnState};
pub use movegen::{generate_hops, generate_moves, generate_steps, Targets};
pub use rules::{game_result, GameResult};
