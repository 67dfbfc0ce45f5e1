//! Result types for finished games.
//!
//! A terminal state is scored per player: every participant gets a
//! [`GameResult`], and [`Outcome`] keeps those results together.

use std::fmt;

/// Result of a finished game for a single player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// Point value of the result: +1 win, -1 loss, 0 draw.
    pub fn points(self) -> i8 {
        match self {
            GameResult::Win => 1,
            GameResult::Loss => -1,
            GameResult::Draw => 0,
        }
    }

    /// Build a result from a point value; any positive value is a win and
    /// any negative value is a loss.
    pub fn from_points(points: i8) -> Self {
        match points.signum() {
            1 => GameResult::Win,
            -1 => GameResult::Loss,
            _ => GameResult::Draw,
        }
    }

    /// Check if this is a win.
    pub fn is_win(self) -> bool {
        self == GameResult::Win
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win => write!(f, "win"),
            GameResult::Loss => write!(f, "loss"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

/// Per-player results of a terminal state.
///
/// # Example
/// ```
/// use playout_core::{GameResult, Outcome};
///
/// let outcome = Outcome::win(1u8, 2u8);
/// assert_eq!(outcome.result_for(1), Some(GameResult::Win));
/// assert_eq!(outcome.result_for(2), Some(GameResult::Loss));
/// assert!(!outcome.is_win_for(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome<P> {
    results: Vec<(P, GameResult)>,
}

impl<P: Copy + Eq> Outcome<P> {
    /// Create an outcome from explicit per-player results.
    pub fn from_results(results: Vec<(P, GameResult)>) -> Self {
        Self { results }
    }

    /// `winner` won and `loser` lost.
    pub fn win(winner: P, loser: P) -> Self {
        Self::from_results(vec![(winner, GameResult::Win), (loser, GameResult::Loss)])
    }

    /// Both players drew.
    pub fn draw(first: P, second: P) -> Self {
        Self::from_results(vec![(first, GameResult::Draw), (second, GameResult::Draw)])
    }

    /// Result for the given player, or `None` if the player is unknown to
    /// this outcome.
    pub fn result_for(&self, player: P) -> Option<GameResult> {
        self.results
            .iter()
            .find(|(p, _)| *p == player)
            .map(|(_, result)| *result)
    }

    /// Check whether the given player won.
    pub fn is_win_for(&self, player: P) -> bool {
        self.result_for(player).is_some_and(GameResult::is_win)
    }

    /// The winning player, if there is one.
    pub fn winner(&self) -> Option<P> {
        self.results
            .iter()
            .find(|(_, result)| result.is_win())
            .map(|(p, _)| *p)
    }

    /// Iterate over all (player, result) pairs.
    pub fn iter(&self) -> impl Iterator<Item = &(P, GameResult)> {
        self.results.iter()
    }
}
