//! UCB1 child scoring.
//!
//! UCB(child) = W + C * sqrt(ln(N_parent) / N_child)
//!
//! where W is the child's win rate, flipped to `1 - W` when the opponent is
//! the one choosing among the children.

use crate::node::Node;
use std::hash::Hash;

/// UCB1 score of `child` among its siblings.
///
/// Unvisited children score `+inf`, so every existing child is visited once
/// before any of its siblings is visited again.
pub fn ucb1<A: Clone + Copy + Eq + Hash>(
    child: &Node<A>,
    parent_visits: u32,
    is_opponent_move: bool,
    exploration_constant: f64,
) -> f64 {
    if child.visits() == 0 {
        return f64::INFINITY;
    }

    let visits = f64::from(child.visits());
    let mut win_rate = child.win_rate();
    if is_opponent_move {
        win_rate = 1.0 - win_rate;
    }

    let exploration = exploration_constant * (f64::from(parent_visits).ln() / visits).sqrt();
    win_rate + exploration
}
