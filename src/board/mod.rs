//! Board representation for Tic-Tac-Toe

pub mod board;

// Re-exports
pub use board::{Board, InvalidMove};

/// Number of cells on the 3x3 board
pub const CELL_COUNT: usize = 9;

/// The two symbols that can occupy a cell.
///
/// The human and the computer always hold different marks; which side
/// holds which is decided per round by the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    #[inline]
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol for display and logging
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
