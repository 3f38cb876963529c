//! View configuration.
//!
//! The only setting that changes behaviour is the board's pixel size; the
//! rest is colour. Hosts pass configuration as JSON, and every field is
//! optional.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration is not valid JSON for [`ViewConfig`].
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    /// The board is too small to tell the squares apart.
    #[error("Board size {0}px is too small; at least {min}px is required", min = ViewConfig::MIN_BOARD_SIZE)]
    BoardTooSmall(u32),
}

/// An RGB colour, serialized as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colours used when building a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: Rgb,
    /// Squares pieces stand on.
    pub playable_square: Rgb,
    pub other_square: Rgb,
    /// Fill for the selected piece's legal destinations.
    pub legal_move: Rgb,
    /// Fill for the legal destination under the pointer.
    pub hover: Rgb,
    pub player_one: Rgb,
    pub player_two: Rgb,
    pub outline: Rgb,
    /// Outline for pieces the side to move may pick up.
    pub selectable_outline: Rgb,
    pub move_path: Rgb,
    pub capture_mark: Rgb,
    pub banner_text: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Rgb(100, 100, 100),
            playable_square: Rgb(200, 0, 0),
            other_square: Rgb(0, 0, 0),
            legal_move: Rgb(200, 255, 100),
            hover: Rgb(95, 90, 255),
            player_one: Rgb(200, 200, 200),
            player_two: Rgb(250, 250, 100),
            outline: Rgb(0, 0, 0),
            selectable_outline: Rgb(55, 55, 255),
            move_path: Rgb(50, 50, 255),
            capture_mark: Rgb(255, 0, 0),
            banner_text: Rgb(50, 50, 230),
        }
    }
}

/// Top-level view configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Width and height of the board in pixels. Defaults to 480.
    #[serde(default = "default_board_size")]
    pub board_size: u32,
    #[serde(default)]
    pub theme: Theme,
}

fn default_board_size() -> u32 {
    480
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            board_size: default_board_size(),
            theme: Theme::default(),
        }
    }
}

impl ViewConfig {
    /// Smallest board that still gives every square 8 pixels.
    pub const MIN_BOARD_SIZE: u32 = 64;

    /// Creates a default configuration with the given board size.
    pub fn with_board_size(board_size: u32) -> Result<Self, ConfigError> {
        let config = ViewConfig {
            board_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ParseError`] for malformed JSON and
    /// [`ConfigError::BoardTooSmall`] if the board size is below
    /// [`Self::MIN_BOARD_SIZE`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ViewConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < Self::MIN_BOARD_SIZE {
            return Err(ConfigError::BoardTooSmall(self.board_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_uses_defaults() {
        let config = ViewConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewConfig::default());
        assert_eq!(config.board_size, 480);
    }

    #[test]
    fn partial_theme_keeps_other_colours() {
        let config =
            ViewConfig::from_json(r#"{"board_size": 640, "theme": {"hover": [1, 2, 3]}}"#).unwrap();
        assert_eq!(config.board_size, 640);
        assert_eq!(config.theme.hover, Rgb(1, 2, 3));
        assert_eq!(config.theme.player_one, Theme::default().player_one);
    }

    #[test]
    fn rejects_tiny_boards() {
        assert!(matches!(
            ViewConfig::from_json(r#"{"board_size": 16}"#),
            Err(ConfigError::BoardTooSmall(16))
        ));
        assert!(ViewConfig::with_board_size(64).is_ok());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            ViewConfig::from_json("{board_size: 480"),
            Err(ConfigError::ParseError(_))
        ));
    }
}
