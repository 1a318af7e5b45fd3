use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod lines;
pub mod rules;
pub mod types;

use crate::config::{GameConfig, narrow_grid_size, narrow_win_streak};
use crate::error::GameError;
use crate::game::Session;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Browser handle for one game session.
#[wasm_bindgen]
pub struct TicTacToe {
    session: Session,
}

/// Numeric inputs arrive as `u32` and are narrowed with a range check, so an
/// oversized value is rejected instead of wrapping into a valid size.
#[wasm_bindgen]
impl TicTacToe {
    #[wasm_bindgen(constructor)]
    pub fn new(grid_size: u32, win_streak: u32) -> Result<TicTacToe, JsError> {
        let config = GameConfig::from_wide(grid_size, win_streak).map_err(GameError::from)?;
        Ok(Self {
            session: Session::new(config),
        })
    }

    pub fn configure(&mut self, grid_size: u32, win_streak: u32) -> Result<(), JsError> {
        let config = GameConfig::from_wide(grid_size, win_streak).map_err(GameError::from)?;
        self.session
            .configure(config.grid_size(), config.win_streak())
            .map_err(GameError::from)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setGridSize)]
    pub fn set_grid_size(&mut self, grid_size: u32) -> Result<(), JsError> {
        let grid_size = narrow_grid_size(grid_size).map_err(GameError::from)?;
        self.session
            .set_grid_size(grid_size)
            .map_err(GameError::from)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setWinStreak)]
    pub fn set_win_streak(&mut self, win_streak: u32) -> Result<(), JsError> {
        let win_streak = narrow_win_streak(win_streak, self.session.config().grid_size())
            .map_err(GameError::from)?;
        self.session
            .set_win_streak(win_streak)
            .map_err(GameError::from)?;
        Ok(())
    }

    /// Returns `false` when the click is ignored (occupied cell, game over).
    pub fn play(&mut self, index: usize) -> bool {
        self.session.play(index).is_ok()
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.session.to_game_state())?)
    }

    #[wasm_bindgen(js_name = statusText)]
    pub fn status_text(&self) -> String {
        self.session.outcome().to_string()
    }

    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> String {
        self.session.current_player().to_string()
    }

    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.session.is_game_over()
    }
}
