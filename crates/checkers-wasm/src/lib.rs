//! WebAssembly bindings for the checkers engine.
//!
//! The host forwards canvas pointer events and repaints from the draw list
//! returned by `frame()` once per animation tick.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Checkers } from 'checkers-wasm';
//!
//! await init();
//!
//! const game = new Checkers(480);
//! canvas.onmousedown = (e) => game.pointerDown(e.offsetX, e.offsetY);
//! canvas.onmousemove = (e) => game.pointerMove(e.offsetX, e.offsetY);
//! canvas.onmouseup = (e) => game.pointerUp(e.offsetX, e.offsetY);
//!
//! function tick() {
//!   game.update();
//!   paint(game.frame().commands);
//!   requestAnimationFrame(tick);
//! }
//! ```

use checkers_core::Player;
use checkers_view::{InputController, PixelPos, ViewConfig};
use wasm_bindgen::prelude::*;

/// A checkers game driven by pointer events from JavaScript.
#[wasm_bindgen]
pub struct Checkers {
    controller: InputController,
}

#[wasm_bindgen]
impl Checkers {
    /// Creates a game rendered on a square canvas of `board_size` pixels.
    ///
    /// Returns an error if the board is too small to draw.
    #[wasm_bindgen(constructor)]
    pub fn new(board_size: u32) -> Result<Checkers, JsError> {
        let config =
            ViewConfig::with_board_size(board_size).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Checkers {
            controller: InputController::new(config),
        })
    }

    /// Creates a game from a JSON view configuration, e.g.
    /// `{"board_size": 640, "theme": {"hover": [0, 0, 255]}}`.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<Checkers, JsError> {
        let config = ViewConfig::from_json(json).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Checkers {
            controller: InputController::new(config),
        })
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: i32, y: i32) {
        self.controller.pointer_down(PixelPos::new(x, y));
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: i32, y: i32) {
        self.controller.pointer_moved(PixelPos::new(x, y));
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: i32, y: i32) {
        self.controller.pointer_up(PixelPos::new(x, y));
    }

    /// Advances animations by one tick.
    pub fn update(&mut self) {
        self.controller.update();
    }

    /// Returns the draw list for the current state as `{ commands: [...] }`.
    pub fn frame(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.controller.frame())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns the player to move ("white" or "yellow").
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> String {
        player_name(self.controller.game().current_player())
    }

    /// Returns the winner ("white" or "yellow"), or null while the game is on.
    pub fn winner(&self) -> Option<String> {
        self.controller
            .game()
            .result()
            .map(|result| player_name(result.winner()))
    }

    /// Returns the piece on a square as a diagram character (`w`, `W`, `y`,
    /// `Y`), or null if the square is empty.
    ///
    /// Returns an error if the square is off the board.
    #[wasm_bindgen(js_name = pieceAt)]
    pub fn piece_at(&self, x: i32, y: i32) -> Result<Option<String>, JsError> {
        let piece = self
            .controller
            .game()
            .piece_at(x, y)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(piece.map(|p| p.to_diagram_char().to_string()))
    }

    /// Returns how many pieces a player has left.
    #[wasm_bindgen(js_name = countOf)]
    pub fn count_of(&self, player: &str) -> Result<usize, JsError> {
        let player = match player {
            "white" => Player::One,
            "yellow" => Player::Two,
            other => return Err(JsError::new(&format!("Unknown player: {}", other))),
        };
        Ok(self.controller.game().count_of(player))
    }

    /// Returns the board as a diagram, top row first.
    #[wasm_bindgen(js_name = boardDiagram)]
    pub fn board_diagram(&self) -> String {
        self.controller.game().board().to_diagram().to_string()
    }

    /// Starts a new game.
    pub fn reset(&mut self) {
        self.controller.reset();
    }
}

fn player_name(player: Player) -> String {
    player.name().to_lowercase()
}

/// Initialization function called when WASM module loads.
#[wasm_bindgen(start)]
pub fn init() {}
