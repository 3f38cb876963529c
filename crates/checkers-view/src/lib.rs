//! View and input layer for the checkers engine.
//!
//! The engine never calls into this crate. Instead the
//! [`InputController`] feeds pointer events to a [`Game`](checkers_engine::Game)
//! and polls it each frame to build a renderer-agnostic [`Frame`] of
//! [`DrawCommand`]s that a host (canvas, terminal, native window) can paint.

mod animation;
mod config;
mod controller;
mod frame;
mod geometry;

pub use animation::snap_step;
pub use config::{ConfigError, Rgb, Theme, ViewConfig};
pub use controller::{Hand, InputController};
pub use frame::{DrawCommand, Frame};
pub use geometry::{BoardGeometry, PixelPos};
