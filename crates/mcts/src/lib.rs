//! Monte Carlo Tree Search with UCB1 selection.
//!
//! This crate provides a single-threaded MCTS that can be used with any
//! game implementing the `playout_core::Game` trait.
//!
//! # Features
//!
//! - **Generic**: Works with any `Game` implementation
//! - **UCB1 Selection**: Win rate plus `C * sqrt(ln N / n)` exploration
//! - **Rollout Abstraction**: Greedy-then-random or uniformly random playouts
//! - **Arena Tree**: Nodes live in one vector and link to parents by index
//! - **Deterministic**: Identical seeds give identical decisions
//!
//! # Example
//!
//! ```
//! use playout_core::Game;
//! use playout_mcts::{games::TicTacToe, GreedyRollout, Mcts, MctsConfig};
//!
//! let game = TicTacToe;
//! let state = game.initial_state();
//!
//! let config = MctsConfig::with_iterations(100);
//! let mut mcts = Mcts::new(config, GreedyRollout::seeded(42));
//!
//! let result = mcts.search(&game, &state).expect("the opening has moves");
//! println!("Best action: {}", result.best_action);
//! println!("Root visits: {}", result.root_visits);
//! ```

pub mod config;
pub mod games;
pub mod node;
pub mod rollout;
pub mod search;
pub mod tree;
pub mod ucb;

pub use config::MctsConfig;
pub use node::{Node, NodeId};
pub use rollout::{GreedyRollout, RandomRollout, RolloutPolicy};
pub use search::{choose_action, ChildStats, Mcts, SearchResult};
pub use tree::Tree;
