//! GUI module for the Tic-Tac-Toe game
//!
//! This module provides a native Rust GUI using egui/eframe. It is the
//! presentation adapter: all game logic lives in the core modules and is
//! driven through [`crate::session::GameSession`].

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
