//! Game rules: outcome detection over the 3x3 board

pub mod win;

pub use win::{detect_outcome, Outcome, WINNING_LINES};
