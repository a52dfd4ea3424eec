//! 3x3 board state with occupancy checks

use super::{Mark, CELL_COUNT};

/// Rejected board mutation.
///
/// Both variants leave the board untouched. The session treats these as
/// expected noise from a pointing-device interface and swallows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMove {
    #[error("cell index {0} is out of range (expected 0..=8)")]
    OutOfRange(usize),
    #[error("cell {0} is already occupied")]
    Occupied(usize),
}

/// Game board: nine cells in row-major order.
///
/// Indices 0-2 form the top row, 3-5 the middle row, 6-8 the bottom row.
/// An empty cell is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Get the mark at a cell, `None` if empty or out of range
    #[inline]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_cell_empty(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Total marks on the board
    #[inline]
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterate over the indices of empty cells in ascending order.
    ///
    /// The ascending order is relied on by the search: ties between
    /// equally scored moves go to the lowest index.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
    }

    /// Place a mark on an empty cell.
    ///
    /// Fails with [`InvalidMove`] if the index is out of range or the
    /// cell is occupied; the board is unchanged on failure.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), InvalidMove> {
        if index >= CELL_COUNT {
            return Err(InvalidMove::OutOfRange(index));
        }
        if self.cells[index].is_some() {
            return Err(InvalidMove::Occupied(index));
        }
        self.cells[index] = Some(mark);
        Ok(())
    }

    /// Remove a mark from a cell.
    ///
    /// Used by the search for make/unmake during tree walks.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        if index < CELL_COUNT {
            self.cells[index] = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_empty() {
        let board = Board::new();
        assert!(!board.is_full());
        assert_eq!(board.mark_count(), 0);
        for i in 0..CELL_COUNT {
            assert!(board.is_cell_empty(i));
            assert_eq!(board.get(i), None);
        }
    }

    #[test]
    fn test_place_then_get() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert_eq!(board.get(4), Some(Mark::X));
        assert!(!board.is_cell_empty(4));
        assert_eq!(board.mark_count(), 1);
    }

    #[test]
    fn test_place_occupied_fails_unchanged() {
        let mut board = Board::new();
        board.place(0, Mark::O).unwrap();
        let before = board.clone();

        let err = board.place(0, Mark::X).unwrap_err();
        assert_eq!(err, InvalidMove::Occupied(0));
        assert_eq!(board, before);
        assert_eq!(board.get(0), Some(Mark::O));
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();
        let before = board.clone();

        let err = board.place(9, Mark::X).unwrap_err();
        assert_eq!(err, InvalidMove::OutOfRange(9));
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_cells_ascending() {
        let mut board = Board::new();
        board.place(0, Mark::X).unwrap();
        board.place(4, Mark::O).unwrap();
        board.place(8, Mark::X).unwrap();

        let empties: Vec<usize> = board.empty_cells().collect();
        assert_eq!(empties, vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        let mut mark = Mark::X;
        for i in 0..CELL_COUNT {
            board.place(i, mark).unwrap();
            mark = mark.other();
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut board = Board::new();
        board.place(3, Mark::X).unwrap();
        board.clear(3);
        assert!(board.is_cell_empty(3));
        assert_eq!(board.mark_count(), 0);
    }

    #[test]
    fn test_mark_other() {
        assert_eq!(Mark::X.other(), Mark::O);
        assert_eq!(Mark::O.other(), Mark::X);
    }
}
