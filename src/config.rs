use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const MIN_GRID_SIZE: u8 = 3;
pub const MAX_GRID_SIZE: u8 = 10;
pub const MIN_WIN_STREAK: u8 = 3;

/// Board dimension and required streak length.
///
/// Invariant: `MIN_WIN_STREAK <= win_streak <= grid_size` and
/// `MIN_GRID_SIZE <= grid_size <= MAX_GRID_SIZE`. Fields are private so every
/// value in circulation went through `new` or `clamped`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct GameConfig {
    grid_size: u8,
    win_streak: u8,
}

#[derive(Deserialize)]
struct RawConfig {
    grid_size: u8,
    win_streak: u8,
}

impl TryFrom<RawConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.grid_size, raw.win_streak)
    }
}

impl GameConfig {
    pub fn new(grid_size: u8, win_streak: u8) -> Result<Self, ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(ConfigError::GridSizeOutOfRange(u32::from(grid_size)));
        }
        if !(MIN_WIN_STREAK..=grid_size).contains(&win_streak) {
            return Err(ConfigError::WinStreakOutOfRange {
                win_streak: u32::from(win_streak),
                grid_size: u32::from(grid_size),
            });
        }
        Ok(Self {
            grid_size,
            win_streak,
        })
    }

    /// Same as `new` for values arriving as full-width integers (JS numbers).
    /// Values that do not fit a `u8` are rejected, never truncated.
    pub fn from_wide(grid_size: u32, win_streak: u32) -> Result<Self, ConfigError> {
        let grid = narrow_grid_size(grid_size)?;
        let streak = narrow_win_streak(win_streak, grid)?;
        Self::new(grid, streak)
    }

    /// Forces both values into range: grid size first, then the streak
    /// against the clamped grid size.
    pub fn clamped(grid_size: u8, win_streak: u8) -> Self {
        let grid_size = grid_size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
        Self {
            grid_size,
            win_streak: win_streak.clamp(MIN_WIN_STREAK, grid_size),
        }
    }

    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    pub fn win_streak(&self) -> u8 {
        self.win_streak
    }

    pub fn cell_count(&self) -> usize {
        usize::from(self.grid_size) * usize::from(self.grid_size)
    }

    /// Every valid configuration, ordered by grid size then streak.
    pub fn all() -> impl Iterator<Item = Self> {
        (MIN_GRID_SIZE..=MAX_GRID_SIZE).flat_map(|grid_size| {
            (MIN_WIN_STREAK..=grid_size).map(move |win_streak| Self {
                grid_size,
                win_streak,
            })
        })
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: MIN_GRID_SIZE,
            win_streak: MIN_WIN_STREAK,
        }
    }
}

/// Converts a full-width grid size, rejecting values past `u8`.
pub fn narrow_grid_size(grid_size: u32) -> Result<u8, ConfigError> {
    u8::try_from(grid_size).map_err(|_| ConfigError::GridSizeOutOfRange(grid_size))
}

/// Converts a full-width win streak for a board of `grid_size`.
pub fn narrow_win_streak(win_streak: u32, grid_size: u8) -> Result<u8, ConfigError> {
    u8::try_from(win_streak).map_err(|_| ConfigError::WinStreakOutOfRange {
        win_streak,
        grid_size: u32::from(grid_size),
    })
}
