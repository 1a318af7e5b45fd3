use std::fmt;

use serde::{Deserialize, Serialize};

/// Symbol a player places on the board. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Wire code used in `GameState::cells`: 1=X, 2=O.
    pub fn code(self) -> u8 {
        match self {
            Self::X => 1,
            Self::O => 2,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::O => f.write_str("O"),
        }
    }
}

/// One board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Marker),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    pub fn marker(self) -> Option<Marker> {
        match self {
            Self::Empty => None,
            Self::Occupied(marker) => Some(marker),
        }
    }

    /// 0=empty, 1=X, 2=O.
    pub fn code(self) -> u8 {
        self.marker().map_or(0, Marker::code)
    }
}

/// Resolved state of a session.
///
/// `InProgress` is the only non-terminal state. Once a session reaches
/// `Winner` or `Draw` it accepts no further moves until it is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    #[default]
    InProgress,
    Winner(Marker),
    Draw,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub fn winner(self) -> Option<Marker> {
        match self {
            Self::Winner(marker) => Some(marker),
            Self::InProgress | Self::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => f.write_str("In progress"),
            Self::Winner(marker) => write!(f, "{marker} wins!"),
            Self::Draw => f.write_str("It's a draw!"),
        }
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub grid_size: u8,
    pub win_streak: u8,
    /// Row-major cells, `grid_size * grid_size` long: 0=empty, 1=X, 2=O.
    pub cells: Vec<u8>,
    pub current_player: Marker,
    pub outcome: Outcome,
    /// Contract:
    /// - `outcome` rendered for the status line ("X wins!", "It's a draw!").
    pub status: String,
    pub is_game_over: bool,
    /// Contract:
    /// - Winner: indices of the first completed line, in line order.
    /// - In progress or draw: must be an empty list.
    pub winning_line: Vec<u8>,
    pub move_count: u8,
}
