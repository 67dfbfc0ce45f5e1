//! Test game implementations for MCTS validation.
//!
//! These games are used to verify MCTS correctness; real games plug in
//! through the same `playout_core::Game` trait.

pub mod tictactoe;

pub use tictactoe::{Player, TicTacToe, TicTacToeAction, TicTacToeState};
