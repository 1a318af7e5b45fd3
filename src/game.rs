use tracing::{debug, info};

use crate::board::Board;
use crate::config::{GameConfig, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::error::{ConfigError, MoveError};
use crate::lines::{Line, lines_for};
use crate::rules;
use crate::types::{GameState, Marker, Outcome};

/// One game session: configuration, current board snapshot, turn and outcome.
///
/// Every configuration change goes through `configure`, which clears the
/// board and re-fetches the line set for the new grid size / streak pair.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    board: Board,
    lines: &'static [Line],
    current_player: Marker,
    outcome: Outcome,
    move_count: u8,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        info!(
            grid_size = config.grid_size(),
            win_streak = config.win_streak(),
            "new session"
        );
        Self {
            config,
            board: Board::new(config.grid_size()),
            lines: lines_for(config),
            current_player: Marker::X,
            outcome: Outcome::InProgress,
            move_count: 0,
        }
    }

    /// Validates and applies a new configuration, starting a fresh game.
    /// On error the current session is left as it was.
    pub fn configure(&mut self, grid_size: u8, win_streak: u8) -> Result<(), ConfigError> {
        let config = GameConfig::new(grid_size, win_streak)?;
        *self = Self::new(config);
        Ok(())
    }

    /// Changes the grid size, lowering the win streak to fit if needed.
    pub fn set_grid_size(&mut self, grid_size: u8) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(ConfigError::GridSizeOutOfRange(u32::from(grid_size)));
        }
        let win_streak = self.config.win_streak().min(grid_size);
        self.configure(grid_size, win_streak)
    }

    pub fn set_win_streak(&mut self, win_streak: u8) -> Result<(), ConfigError> {
        self.configure(self.config.grid_size(), win_streak)
    }

    /// Starts a new game with the same configuration.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    /// Places the current player's marker at `index`.
    pub fn play(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let player = self.current_player;
        let board = rules::apply_move(&self.board, self.outcome, index, player)
            .inspect_err(|err| debug!(index, player = %player, error = %err, "move rejected"))?;

        self.board = board;
        self.move_count += 1;
        self.outcome = rules::evaluate(&self.board, self.lines, player);
        self.current_player = player.opponent();
        debug!(index, player = %player, moves = self.move_count, "move accepted");

        if self.outcome.is_terminal() {
            info!(outcome = %self.outcome, moves = self.move_count, "game over");
        }

        Ok(self.outcome)
    }

    /// Places the current player's marker at `(row, col)`.
    pub fn play_at(&mut self, row: u8, col: u8) -> Result<Outcome, MoveError> {
        let index = self.board.index_of(row, col)?;
        self.play(index)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lines(&self) -> &'static [Line] {
        self.lines
    }

    pub fn current_player(&self) -> Marker {
        self.current_player
    }

    /// Terminal once set; only `configure` and `reset` start over.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn winning_line(&self) -> Option<&'static Line> {
        let winner = self.outcome.winner()?;
        rules::winning_line(&self.board, self.lines, winner)
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            grid_size: self.config.grid_size(),
            win_streak: self.config.win_streak(),
            cells: self.board.to_array(),
            current_player: self.current_player,
            outcome: self.outcome,
            status: self.outcome.to_string(),
            is_game_over: self.is_game_over(),
            winning_line: self
                .winning_line()
                .map(|line| line.cells.iter().map(|&index| index as u8).collect())
                .unwrap_or_default(),
            move_count: self.move_count,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
