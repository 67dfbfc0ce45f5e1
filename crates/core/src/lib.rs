//! Playout Core - game adapter contract and common types
//!
//! This crate provides the [`Game`] trait that a game must implement to be
//! searched by `playout-mcts`, together with the types shared between the
//! search and the games.
//!
//! # Types
//!
//! - [`Game`] - Trait for game implementations
//! - [`Outcome`] - Per-player result of a finished game
//! - [`GameResult`] - Win, loss or draw
//! - [`PlayoutError`] - Errors surfaced to callers of the search

mod error;
mod game;
mod types;

pub use error::{PlayoutError, Result};
pub use game::Game;
pub use types::{GameResult, Outcome};
