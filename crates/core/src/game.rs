use std::fmt::Debug;
use std::hash::Hash;

use crate::Outcome;

/// A game abstraction for tree search.
///
/// This trait is the whole contract between the search and a concrete game:
/// the search never looks inside a state, it only asks the game about it.
/// Any deterministic, perfect-information, alternating two-player game can
/// implement it.
pub trait Game {
    /// The game state (e.g. a board position plus the side to move).
    type State: Clone;

    /// A game action (e.g. a cell index).
    type Action: Clone + Copy + Eq + Hash + Debug;

    /// Identity of a player.
    type Player: Clone + Copy + Eq + Debug;

    /// Snapshot of whatever a move can claim for scoring (captured pieces,
    /// completed lines, owned boxes). Only compared for equality.
    ///
    /// Games without such a notion use `()`, which never changes.
    type Footprint: PartialEq;

    /// Returns the initial game state.
    fn initial_state(&self) -> Self::State;

    /// Returns true if no further moves are possible.
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Returns the player to move. Unspecified on terminal states.
    fn current_player(&self, state: &Self::State) -> Self::Player;

    /// Returns all legal actions from the given state, in a stable order.
    ///
    /// Empty only at terminal states.
    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Applies an action, returning a new state (immutable operation).
    fn apply(&self, state: &Self::State, action: Self::Action) -> Self::State;

    /// Returns the scoring snapshot of the given state.
    fn score_footprint(&self, state: &Self::State) -> Self::Footprint;

    /// Returns the per-player result, or `None` if the game is not terminal.
    fn outcome(&self, state: &Self::State) -> Option<Outcome<Self::Player>>;
}
