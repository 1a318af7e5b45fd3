use crate::config::{MAX_GRID_SIZE, MIN_GRID_SIZE, MIN_WIN_STREAK};

/// Rejected grid size / win streak combination.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid size {0} out of range ({min}-{max})", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    GridSizeOutOfRange(u32),

    #[error("win streak {win_streak} out of range ({min}-{grid_size})", min = MIN_WIN_STREAK)]
    WinStreakOutOfRange { win_streak: u32, grid_size: u32 },
}

/// Rejected move. The browser ignores these clicks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,

    #[error("cell {index} out of range (board has {cells} cells)")]
    OutOfRange { index: usize, cells: usize },

    #[error("cell {0} is already occupied")]
    CellOccupied(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::WinStreakOutOfRange {
            win_streak: 5,
            grid_size: 4,
        };
        assert_eq!(err.to_string(), "win streak 5 out of range (3-4)");
        assert_eq!(
            ConfigError::GridSizeOutOfRange(11).to_string(),
            "grid size 11 out of range (3-10)"
        );
    }

    #[test]
    fn game_error_wraps_both_kinds() {
        let err: GameError = MoveError::CellOccupied(4).into();
        assert_eq!(err.to_string(), "illegal move: cell 4 is already occupied");

        let err: GameError = ConfigError::GridSizeOutOfRange(2).into();
        assert_eq!(
            err.to_string(),
            "invalid configuration: grid size 2 out of range (3-10)"
        );
    }
}
