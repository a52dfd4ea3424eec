//! Exhaustive minimax search over the 3x3 game tree
//!
//! The searched side is the maximizer, the opponent the minimizer, and
//! every legal continuation is walked down to a terminal position. The
//! state space is bounded by 9 cells, so there is no pruning, no result
//! caching and no depth limit; a full top-level search visits well under
//! 9! nodes thanks to the early terminal cutoff at each ply.
//!
//! Terminal scores are depth-adjusted: a win for the searched mark at
//! depth `d` scores `10 - d`, a loss scores `d - 10`, a draw scores `0`.
//! The adjustment makes the searcher prefer faster wins and slower losses
//! among otherwise equal lines.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark};
//! use tictactoe::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place(0, Mark::X).unwrap();
//!
//! let mut searcher = Searcher::new();
//! let result = searcher.best_move(&board, Mark::O);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Mark};
use crate::rules::{detect_outcome, Outcome};

/// Base score of a win before depth adjustment
const WIN_SCORE: i32 = 10;

/// Result of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` only when the board is already full
    pub best_move: Option<usize>,
    /// Minimax score of the best move from the searched side's view
    pub score: i32,
    /// Number of positions evaluated
    pub nodes: u64,
}

/// Exhaustive minimax searcher.
///
/// Stateless apart from a node counter; safe to reuse across calls.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes evaluated by the most recent `best_move` call
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Find the provably best cell for `mark` on the given board.
    ///
    /// Every empty cell is tried in ascending index order and scored by
    /// minimax with the opponent to move. The first cell achieving the
    /// strictly greatest score is kept, so ties between equally good
    /// moves resolve to the lowest index. Returns `best_move: None` when
    /// no empty cell exists; callers must treat that as "no move
    /// available" rather than an error.
    #[must_use]
    pub fn best_move(&mut self, board: &Board, mark: Mark) -> SearchResult {
        self.nodes = 0;
        let mut scratch = board.clone();
        let mut best_score = i32::MIN;
        let mut best_move = None;

        let candidates: Vec<usize> = scratch.empty_cells().collect();
        for index in candidates {
            scratch
                .place(index, mark)
                .expect("candidate cell must be empty");
            let score = self.minimax(&mut scratch, mark, 1, false);
            scratch.clear(index);

            if score > best_score {
                best_score = score;
                best_move = Some(index);
            }
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            nodes: self.nodes,
        }
    }

    /// Recursive tree walk. `maximizing` is true when `mark` is to move.
    fn minimax(&mut self, board: &mut Board, mark: Mark, depth: i32, maximizing: bool) -> i32 {
        self.nodes += 1;

        match detect_outcome(board) {
            Outcome::Win { mark: winner, .. } => {
                return if winner == mark {
                    WIN_SCORE - depth
                } else {
                    depth - WIN_SCORE
                };
            }
            Outcome::Draw => return 0,
            Outcome::InProgress => {}
        }

        let to_move = if maximizing { mark } else { mark.other() };
        let candidates: Vec<usize> = board.empty_cells().collect();

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for index in candidates {
            board
                .place(index, to_move)
                .expect("candidate cell must be empty");
            let score = self.minimax(board, mark, depth + 1, !maximizing);
            board.clear(index);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: [Option<Mark>; 9]) -> Board {
        let mut board = Board::new();
        for (i, mark) in marks.into_iter().enumerate() {
            if let Some(m) = mark {
                board.place(i, m).unwrap();
            }
        }
        board
    }

    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);
    const E: Option<Mark> = None;

    #[test]
    fn test_completes_winning_row() {
        // X X . / O O . / . . . with X to move: index 2 wins on the spot.
        let board = board_from([X, X, E, O, O, E, E, E, E]);
        let mut searcher = Searcher::new();
        let result = searcher.best_move(&board, Mark::X);
        assert_eq!(result.best_move, Some(2));
    }

    #[test]
    fn test_blocks_double_corner_threat() {
        // O . . / . X . / . . O with O to move. X in the center threatens
        // the 2-4-6 diagonal; optimal play answers at 2 or 6.
        let board = board_from([O, E, E, E, X, E, E, E, O]);
        let mut searcher = Searcher::new();
        let result = searcher.best_move(&board, Mark::O);
        let best = result.best_move.unwrap();
        assert!(best == 2 || best == 6, "expected 2 or 6, got {best}");
    }

    #[test]
    fn test_prefers_faster_win() {
        // X can win immediately at 2 (row 0) or set up slower wins; the
        // depth bias must pick the immediate one.
        let board = board_from([X, X, E, E, X, O, O, E, O]);
        let mut searcher = Searcher::new();
        let result = searcher.best_move(&board, Mark::X);
        assert_eq!(result.best_move, Some(2));
        // Win on the very next ply scores WIN_SCORE - 1.
        assert_eq!(result.score, 9);
    }

    #[test]
    fn test_full_board_no_move() {
        let board = board_from([X, O, X, X, O, O, O, X, X]);
        let mut searcher = Searcher::new();
        let result = searcher.best_move(&board, Mark::X);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_tie_break_lowest_index() {
        // Symmetric position: several opening replies score equally and
        // the scan must settle on the first empty index achieving the max.
        let board = Board::new();
        let mut searcher = Searcher::new();
        let first = searcher.best_move(&board, Mark::X);
        let second = searcher.best_move(&board, Mark::X);
        assert_eq!(first, second);
        // On an empty board every cell scores a draw under optimal reply,
        // so the opening pick is index 0.
        assert_eq!(first.best_move, Some(0));
        assert_eq!(first.score, 0);
    }

    #[test]
    fn test_optimal_self_play_draws() {
        // Classic result: two optimal players always draw.
        let mut board = Board::new();
        let mut searcher = Searcher::new();
        let mut to_move = Mark::X;

        while detect_outcome(&board) == Outcome::InProgress {
            let best = searcher
                .best_move(&board, to_move)
                .best_move
                .expect("in-progress board must have a move");
            board.place(best, to_move).unwrap();
            to_move = to_move.other();
        }

        assert_eq!(detect_outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_never_loses_against_any_opponent() {
        // Exhaustively enumerate every opponent strategy: X (the human
        // stand-in) tries every legal move at each of its turns, O always
        // answers with the searcher. O must never lose.
        fn explore(board: &mut Board, searcher: &mut Searcher) {
            match detect_outcome(board) {
                Outcome::Win { mark, .. } => {
                    assert_ne!(mark, Mark::X, "searcher lost: {board:?}");
                    return;
                }
                Outcome::Draw => return,
                Outcome::InProgress => {}
            }

            let replies: Vec<usize> = board.empty_cells().collect();
            for index in replies {
                board.place(index, Mark::X).unwrap();

                match detect_outcome(board) {
                    Outcome::Win { mark, .. } => {
                        assert_ne!(mark, Mark::X, "searcher lost: {board:?}");
                    }
                    Outcome::Draw => {}
                    Outcome::InProgress => {
                        let reply = searcher
                            .best_move(board, Mark::O)
                            .best_move
                            .expect("in-progress board must have a move");
                        board.place(reply, Mark::O).unwrap();
                        explore(board, searcher);
                        board.clear(reply);
                    }
                }

                board.clear(index);
            }
        }

        let mut board = Board::new();
        let mut searcher = Searcher::new();
        explore(&mut board, &mut searcher);
    }

    #[test]
    fn test_nodes_counted() {
        let board = Board::new();
        let mut searcher = Searcher::new();
        let result = searcher.best_move(&board, Mark::X);
        assert!(result.nodes > 0);
        assert_eq!(result.nodes, searcher.nodes());
    }
}
