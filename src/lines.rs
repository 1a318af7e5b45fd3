use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::config::GameConfig;

/// Direction of a winning line as a `(row_step, col_step)` vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    pub fn step(self) -> (i32, i32) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::Diagonal => (1, 1),
            Self::AntiDiagonal => (1, -1),
        }
    }
}

/// One candidate winning run of exactly `win_streak` cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    pub direction: Direction,
    pub cells: Vec<usize>,
}

/// Every valid configuration's lines, built on first use.
static LINE_TABLE: Lazy<HashMap<GameConfig, Vec<Line>>> = Lazy::new(|| {
    GameConfig::all()
        .map(|config| (config, generate_lines(config)))
        .collect()
});

/// Enumerates every run of `win_streak` cells in the four directions.
///
/// Lines come grouped by direction (horizontal, vertical, diagonal,
/// anti-diagonal) with start cells in row-major order. For grid size N and
/// streak K the result holds `2*(N-K+1)*N + 2*(N-K+1)^2` lines.
pub fn generate_lines(config: GameConfig) -> Vec<Line> {
    let n = i32::from(config.grid_size());
    let k = i32::from(config.win_streak());
    let mut lines = Vec::new();

    for direction in Direction::ALL {
        let (dr, dc) = direction.step();
        let rows = start_range(n, k, dr);
        let cols = start_range(n, k, dc);

        for row in rows {
            for col in cols.clone() {
                let cells = (0..k)
                    .map(|i| ((row + i * dr) * n + (col + i * dc)) as usize)
                    .collect();
                lines.push(Line { direction, cells });
            }
        }
    }

    lines
}

/// Returns the memoized lines for `config`.
pub fn lines_for(config: GameConfig) -> &'static [Line] {
    LINE_TABLE
        .get(&config)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Valid start coordinates along one axis so that `k` steps of `step`
/// stay inside `0..n`.
fn start_range(n: i32, k: i32, step: i32) -> std::ops::Range<i32> {
    match step {
        0 => 0..n,
        s if s > 0 => 0..n - k + 1,
        _ => k - 1..n,
    }
}
