//! Tic-Tac-Toe with a configurable computer opponent
//!
//! A single-session, human-vs-computer Tic-Tac-Toe game. The computer
//! picks its moves with an exhaustive minimax search over the 3x3 game
//! tree, blended with randomness to produce three difficulty grades.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: 9-cell board state and move validation
//! - [`rules`]: win/draw detection over the 8 fixed lines
//! - [`search`]: exhaustive minimax evaluator
//! - [`policy`]: difficulty-driven move selection
//! - [`session`]: round state machine, scoring, adapter events
//! - [`ui`]: egui presentation adapter
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Difficulty, GameSession, RoundPhase};
//! use std::time::Duration;
//!
//! let mut session = GameSession::new();
//! session.set_difficulty(Difficulty::Hard);
//! session.set_think_delay(Duration::ZERO);
//!
//! // The human (X) takes the center; the computer answers.
//! session.submit_player_move(4);
//! session.poll();
//! assert_eq!(session.phase(), RoundPhase::AwaitingPlayerMove);
//! assert_eq!(session.board().mark_count(), 2);
//! ```
//!
//! # Difficulty grades
//!
//! - **Easy**: uniform-random moves
//! - **Medium**: a fair coin per move between random and optimal
//! - **Hard**: always the minimax move; never loses

pub mod board;
pub mod policy;
pub mod rules;
pub mod search;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, InvalidMove, Mark, CELL_COUNT};
pub use policy::{Difficulty, MovePolicy};
pub use rules::{detect_outcome, Outcome, WINNING_LINES};
pub use search::{SearchResult, Searcher};
pub use session::{
    GameEvent, GameSession, RoundOutcome, RoundPhase, RoundResult, ScoreTally, THINK_DELAY,
};
