//! Rollout policies for the simulation phase.
//!
//! A rollout plays a game from a given state to the end with a cheap policy.
//! The `RolloutPolicy` trait allows swapping between strategies:
//! - `GreedyRollout` takes any move that changes the score footprint, and a
//!   uniformly random move otherwise
//! - `RandomRollout` always plays a uniformly random move

use playout_core::Game;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Trait for playing a game to completion from a given state.
pub trait RolloutPolicy<G: Game> {
    /// Play from `state` until the game is terminal and return the final
    /// state.
    ///
    /// If the game reports no legal actions at a non-terminal state the
    /// rollout stops there and returns that state unchanged.
    fn rollout(&mut self, game: &G, state: G::State) -> G::State;
}

/// Greedy-then-random rollout.
///
/// At each step the legal actions are scanned in the order the game
/// produced them; the first one whose resulting state has a different
/// [`Game::score_footprint`] is played. When no action changes the
/// footprint, an action is drawn uniformly at random. Games whose footprint
/// is `()` therefore get a plain random rollout.
#[derive(Clone, Debug)]
pub struct GreedyRollout<R: Rng> {
    rng: R,
}

impl<R: Rng> GreedyRollout<R> {
    /// Create a new greedy rollout drawing random moves from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl GreedyRollout<ChaCha8Rng> {
    /// Create a reproducible greedy rollout from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<G: Game, R: Rng> RolloutPolicy<G> for GreedyRollout<R> {
    fn rollout(&mut self, game: &G, mut state: G::State) -> G::State {
        while !game.is_terminal(&state) {
            let actions = game.legal_actions(&state);
            if actions.is_empty() {
                break;
            }

            let footprint = game.score_footprint(&state);
            let scoring = actions
                .iter()
                .map(|&action| game.apply(&state, action))
                .find(|next| game.score_footprint(next) != footprint);

            state = match scoring {
                Some(next) => next,
                None => {
                    let idx = self.rng.gen_range(0..actions.len());
                    game.apply(&state, actions[idx])
                }
            };
        }

        state
    }
}

/// Uniformly random rollout.
#[derive(Clone, Debug)]
pub struct RandomRollout<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomRollout<R> {
    /// Create a new random rollout drawing moves from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomRollout<ChaCha8Rng> {
    /// Create a reproducible random rollout from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<G: Game, R: Rng> RolloutPolicy<G> for RandomRollout<R> {
    fn rollout(&mut self, game: &G, mut state: G::State) -> G::State {
        while !game.is_terminal(&state) {
            let actions = game.legal_actions(&state);
            if actions.is_empty() {
                break;
            }

            let idx = self.rng.gen_range(0..actions.len());
            state = game.apply(&state, actions[idx]);
        }

        state
    }
}
