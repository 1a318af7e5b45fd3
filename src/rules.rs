//! Pure move application and outcome evaluation.
//!
//! Nothing here holds state: callers pass the board snapshot, the current
//! outcome and the line set, and get new values back.

use tracing::instrument;

use crate::board::Board;
use crate::error::MoveError;
use crate::lines::Line;
use crate::types::{Cell, Marker, Outcome};

/// Places `player` at `index` on a copy of `board`.
///
/// Fails when `outcome` is already terminal, when `index` is off the board,
/// or when the target cell is occupied.
#[instrument(level = "trace", skip(board))]
pub fn apply_move(
    board: &Board,
    outcome: Outcome,
    index: usize,
    player: Marker,
) -> Result<Board, MoveError> {
    if outcome.is_terminal() {
        return Err(MoveError::GameOver);
    }
    board.with_move(index, player)
}

/// Returns the first line whose every cell holds `player`.
pub fn winning_line<'a>(board: &Board, lines: &'a [Line], player: Marker) -> Option<&'a Line> {
    let target = Cell::Occupied(player);
    lines
        .iter()
        .find(|line| line.cells.iter().all(|&index| board.get(index) == Some(target)))
}

/// Resolves the outcome after `last_player` moved.
///
/// Only `last_player` can have completed a line on this move, so only their
/// lines are checked. A full board without such a line is a draw.
#[instrument(level = "trace", skip(board, lines), fields(lines = lines.len()))]
pub fn evaluate(board: &Board, lines: &[Line], last_player: Marker) -> Outcome {
    if winning_line(board, lines, last_player).is_some() {
        Outcome::Winner(last_player)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
