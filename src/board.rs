use crate::error::MoveError;
use crate::types::{Cell, Marker};

/// Square board of `grid_size * grid_size` cells in row-major order.
///
/// Boards are snapshots: `with_move` returns a new board and leaves `self`
/// untouched, so older snapshots stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    grid_size: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all-empty board.
    pub fn new(grid_size: u8) -> Self {
        let side = usize::from(grid_size);
        Self {
            grid_size,
            cells: vec![Cell::Empty; side * side],
        }
    }

    /// Builds a board from `(index, marker)` placements, applied in order
    /// with the same checks as `with_move`.
    pub fn from_placements(
        grid_size: u8,
        placements: &[(usize, Marker)],
    ) -> Result<Self, MoveError> {
        placements
            .iter()
            .try_fold(Self::new(grid_size), |board, &(index, marker)| {
                board.with_move(index, marker)
            })
    }

    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns a copy of this board with `marker` at `index`.
    pub fn with_move(&self, index: usize, marker: Marker) -> Result<Self, MoveError> {
        match self.get(index) {
            None => Err(MoveError::OutOfRange {
                index,
                cells: self.len(),
            }),
            Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied(index)),
            Some(Cell::Empty) => {
                let mut next = self.clone();
                next.cells[index] = Cell::Occupied(marker);
                Ok(next)
            }
        }
    }

    /// Returns the number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Converts board to wire codes where 0=empty, 1=X, 2=O.
    pub fn to_array(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.code()).collect()
    }

    /// Swaps every X with O and vice versa.
    pub fn relabeled(&self) -> Self {
        Self {
            grid_size: self.grid_size,
            cells: self
                .cells
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => Cell::Empty,
                    Cell::Occupied(marker) => Cell::Occupied(marker.opponent()),
                })
                .collect(),
        }
    }

    pub fn index_of(&self, row: u8, col: u8) -> Result<usize, MoveError> {
        if row >= self.grid_size || col >= self.grid_size {
            return Err(MoveError::OutOfRange {
                index: usize::from(row) * usize::from(self.grid_size) + usize::from(col),
                cells: self.len(),
            });
        }
        Ok(usize::from(row) * usize::from(self.grid_size) + usize::from(col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty_with_grid_squared_cells() {
        for grid_size in 3..=10u8 {
            let board = Board::new(grid_size);
            assert_eq!(board.len(), usize::from(grid_size).pow(2));
            assert_eq!(board.empty_count(), board.len());
            assert!(!board.is_full());
        }
    }

    #[test]
    fn with_move_copies_and_leaves_input_unchanged() {
        let board = Board::new(3);
        let before = board.clone();

        let next = board.with_move(4, Marker::X).unwrap();

        assert_eq!(board, before);
        assert_eq!(next.get(4), Some(Cell::Occupied(Marker::X)));
        assert_eq!(next.empty_count(), 8);
    }

    #[test]
    fn with_move_rejects_occupied_and_out_of_range() {
        let board = Board::from_placements(3, &[(0, Marker::O)]).unwrap();

        assert_eq!(
            board.with_move(0, Marker::X),
            Err(MoveError::CellOccupied(0))
        );
        assert_eq!(
            board.with_move(9, Marker::X),
            Err(MoveError::OutOfRange { index: 9, cells: 9 })
        );
    }

    #[test]
    fn to_array_uses_wire_codes() {
        let board = Board::from_placements(3, &[(0, Marker::X), (8, Marker::O)]).unwrap();
        assert_eq!(board.to_array(), vec![1, 0, 0, 0, 0, 0, 0, 0, 2]);
    }

    #[test]
    fn index_of_is_row_major() {
        let board = Board::new(5);

        assert_eq!(board.index_of(3, 1), Ok(16));
        assert!(board.index_of(5, 0).is_err());
    }

    #[test]
    fn relabeled_swaps_markers() {
        let board = Board::from_placements(3, &[(0, Marker::X), (1, Marker::O)]).unwrap();
        let swapped = board.relabeled();

        assert_eq!(swapped.get(0), Some(Cell::Occupied(Marker::O)));
        assert_eq!(swapped.get(1), Some(Cell::Occupied(Marker::X)));
        assert_eq!(swapped.get(2), Some(Cell::Empty));
    }

    #[test]
    fn from_placements_rejects_bad_and_repeated_indices() {
        assert_eq!(
            Board::from_placements(3, &[(0, Marker::X), (9, Marker::O)]),
            Err(MoveError::OutOfRange { index: 9, cells: 9 })
        );
        assert_eq!(
            Board::from_placements(3, &[(4, Marker::X), (4, Marker::O)]),
            Err(MoveError::CellOccupied(4))
        );
    }
}
