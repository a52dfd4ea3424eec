//! Win and draw detection
//!
//! A round is won by filling one of the 8 fixed lines (3 rows, 3 columns,
//! 2 diagonals) with the same mark, and drawn when all 9 cells are filled
//! without a winning line.

use crate::board::Board;
use crate::Mark;

/// The 8 index triples that constitute a win.
///
/// Scan order is rows, then columns, then diagonals. On constructed boards
/// where several lines are complete at once (the search probes such
/// positions), the first line in this order is reported.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Result of evaluating a board position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A line is complete for `mark`
    Win { mark: Mark, line: [usize; 3] },
    /// All cells filled, no winning line
    Draw,
    /// The round continues
    InProgress,
}

impl Outcome {
    /// True for `Win` and `Draw`
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Evaluate a board position.
///
/// Pure and idempotent: the same board always yields the same outcome.
pub fn detect_outcome(board: &Board) -> Outcome {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Some(mark) = board.get(a) {
            if board.get(b) == Some(mark) && board.get(c) == Some(mark) {
                return Outcome::Win { mark, line };
            }
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
