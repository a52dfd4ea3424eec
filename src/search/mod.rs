//! Search algorithms for the computer opponent

pub mod minimax;

pub use minimax::{SearchResult, Searcher};
