//! Monte Carlo Tree Search implementation.
//!
//! Every iteration runs the four classic phases:
//! 1. Selection: descend from the root with UCB1 until a node with an
//!    untried action (or a terminal state) is reached
//! 2. Expansion: turn one untried action into a new child
//! 3. Simulation: play the game out with a rollout policy
//! 4. Backpropagation: record the result from the new node up to the root
//!
//! The phases are exposed as free functions so they can be driven and
//! inspected one at a time; [`Mcts`] strings them together.

use crate::{
    config::MctsConfig,
    node::NodeId,
    rollout::{GreedyRollout, RolloutPolicy},
    tree::Tree,
    ucb::ucb1,
};
use playout_core::{Game, PlayoutError, Result};
use rand::Rng;
use std::hash::Hash;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Statistics of one root child after a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChildStats<A> {
    /// Action leading to the child.
    pub action: A,

    /// Simulations that went through the child.
    pub visits: u32,

    /// Those simulations won by the searching agent.
    pub wins: u32,
}

impl<A> ChildStats<A> {
    /// Fraction of the child's simulations won by the searching agent.
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.visits)
        }
    }
}

/// Result of an MCTS search.
#[derive(Clone, Debug)]
pub struct SearchResult<A: Clone + Copy + Eq + Hash> {
    /// Most visited root child's action; first in child order on ties.
    pub best_action: A,

    /// Statistics for each root child, in the order the children were created.
    pub children: Vec<ChildStats<A>>,

    /// Visits recorded at the root (equals the iteration budget).
    pub root_visits: u32,

    /// Number of nodes in the finished tree.
    pub tree_size: usize,
}

impl<A: Clone + Copy + Eq + Hash> SearchResult<A> {
    /// Visit count for each root action, in child order.
    pub fn visit_counts(&self) -> Vec<(A, u32)> {
        self.children.iter().map(|c| (c.action, c.visits)).collect()
    }

    /// Statistics of the chosen child.
    pub fn best(&self) -> Option<&ChildStats<A>> {
        self.children.iter().find(|c| c.action == self.best_action)
    }
}

/// Score every child of `node` with UCB1 and return the best one.
///
/// The child with the strictly greatest score wins, so among equal scores
/// the earliest created child is chosen. Returns `None` if `node` has no
/// children.
pub fn select_child<A: Clone + Copy + Eq + Hash>(
    tree: &Tree<A>,
    node: NodeId,
    is_opponent_move: bool,
    exploration_constant: f64,
) -> Option<(A, NodeId)> {
    let parent = tree.get(node);
    let mut best = None;
    let mut best_score = f64::NEG_INFINITY;

    for &(action, child_id) in parent.children() {
        let score = ucb1(
            tree.get(child_id),
            parent.visits(),
            is_opponent_move,
            exploration_constant,
        );
        if score > best_score {
            best_score = score;
            best = Some((action, child_id));
        }
    }

    best
}

/// Walk from the root to the node the next expansion should start from.
///
/// `state` must be the state at the root. The walk stops at the first node
/// that still has untried actions, at a terminal state, or at a node without
/// children. Win rates are flipped whenever the player choosing among the
/// children is not `agent`.
pub fn traverse<G: Game>(
    tree: &Tree<G::Action>,
    game: &G,
    mut state: G::State,
    agent: G::Player,
    exploration_constant: f64,
) -> (NodeId, G::State) {
    let mut current = NodeId::ROOT;

    while !game.is_terminal(&state) {
        // Expansion takes priority over descending further.
        if tree.get(current).is_expandable() {
            break;
        }

        let is_opponent_move = game.current_player(&state) != agent;
        match select_child(tree, current, is_opponent_move, exploration_constant) {
            Some((action, child)) => {
                state = game.apply(&state, action);
                current = child;
            }
            None => break,
        }
    }

    (current, state)
}

/// Expand one untried action of `node`.
///
/// The action is taken from the end of the node's untried list (see
/// [`Node::untried_actions`](crate::node::Node::untried_actions)), so a
/// node's children appear in the reverse of the game's legal-action order.
/// Returns the new child and its state, or `node` and `state` unchanged if
/// nothing is left to expand.
pub fn expand<G: Game>(
    tree: &mut Tree<G::Action>,
    game: &G,
    node: NodeId,
    state: G::State,
) -> (NodeId, G::State) {
    let Some(action) = tree.get_mut(node).take_untried() else {
        return (node, state);
    };

    let next_state = game.apply(&state, action);
    let child = tree.add_child(node, action, game.legal_actions(&next_state));
    (child, next_state)
}

/// The action of the most visited root child.
///
/// The first child with the strictly greatest visit count wins ties.
/// Returns `None` if the root has no children.
pub fn most_visited_action<A: Clone + Copy + Eq + Hash>(tree: &Tree<A>) -> Option<A> {
    let mut best = None;
    let mut best_visits = None;

    for &(action, child_id) in tree.root().children() {
        let visits = tree.get(child_id).visits();
        if best_visits.map_or(true, |b| visits > b) {
            best_visits = Some(visits);
            best = Some(action);
        }
    }

    best
}

/// Whether `agent` won the finished game in `state`.
///
/// # Panics
/// Panics if `state` is not terminal: an outcome only exists for finished
/// games, so reaching this with a live state means the game broke its
/// contract (e.g. no legal actions at a non-terminal state).
fn agent_won<G: Game>(game: &G, state: &G::State, agent: G::Player) -> bool {
    game.outcome(state)
        .expect("contract violation: outcome requested for a non-terminal state")
        .is_win_for(agent)
}

/// Monte Carlo Tree Search with UCB1 selection.
///
/// Generic over:
/// - `G`: The game being played
/// - `P`: The rollout policy used for simulations
pub struct Mcts<G: Game, P: RolloutPolicy<G>> {
    config: MctsConfig,
    rollout: P,
    _game: PhantomData<G>,
}

impl<G, P> Mcts<G, P>
where
    G: Game,
    P: RolloutPolicy<G>,
{
    /// Create a new MCTS instance.
    pub fn new(config: MctsConfig, rollout: P) -> Self {
        Self {
            config,
            rollout,
            _game: PhantomData,
        }
    }

    /// The configuration this search runs with.
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Pick a move for the player to move in `state`.
    ///
    /// # Errors
    /// Returns `PlayoutError::InvalidConfig` for an unusable configuration
    /// and `PlayoutError::NoLegalActions` if there is nothing to play.
    pub fn choose_action(&mut self, game: &G, state: &G::State) -> Result<G::Action> {
        self.search(game, state).map(|result| result.best_action)
    }

    /// Run a full search from `state` and summarize the root children.
    ///
    /// # Errors
    /// Same as [`Mcts::choose_action`].
    pub fn search(&mut self, game: &G, state: &G::State) -> Result<SearchResult<G::Action>> {
        let tree = self.build_tree(game, state)?;

        let best_action = most_visited_action(&tree).ok_or(PlayoutError::NoLegalActions)?;
        let children = tree
            .root()
            .children()
            .iter()
            .map(|&(action, id)| {
                let child = tree.get(id);
                ChildStats {
                    action,
                    visits: child.visits(),
                    wins: child.wins(),
                }
            })
            .collect::<Vec<_>>();

        let result = SearchResult {
            best_action,
            children,
            root_visits: tree.root().visits(),
            tree_size: tree.len(),
        };

        debug!(
            iterations = self.config.iteration_budget,
            tree_size = result.tree_size,
            best_action = ?result.best_action,
            best_visits = result.best().map_or(0, |c| c.visits),
            "MCTS search complete"
        );

        Ok(result)
    }

    /// Run the configured number of iterations from `state` and return the
    /// resulting tree.
    ///
    /// The searching agent is the player to move in `state`.
    ///
    /// # Errors
    /// Same as [`Mcts::choose_action`].
    pub fn build_tree(&mut self, game: &G, state: &G::State) -> Result<Tree<G::Action>> {
        self.config.validate()?;

        let root_actions = game.legal_actions(state);
        if root_actions.is_empty() {
            return Err(PlayoutError::NoLegalActions);
        }

        let agent = game.current_player(state);
        let mut tree = Tree::new(root_actions);

        for _ in 0..self.config.iteration_budget {
            self.iterate(&mut tree, game, state, agent);
        }

        Ok(tree)
    }

    /// Run a single iteration: select -> expand -> rollout -> backpropagate.
    fn iterate(
        &mut self,
        tree: &mut Tree<G::Action>,
        game: &G,
        root_state: &G::State,
        agent: G::Player,
    ) {
        let (leaf, state) = traverse(
            tree,
            game,
            root_state.clone(),
            agent,
            self.config.exploration_constant,
        );
        let (node, state) = expand(tree, game, leaf, state);
        let final_state = self.rollout.rollout(game, state);
        let won = agent_won(game, &final_state, agent);

        tree.backpropagate(node, won);

        trace!(
            node = node.index(),
            depth = tree.depth(node),
            won,
            "MCTS iteration complete"
        );
    }
}

/// Pick a move for the player to move in `state` using a greedy rollout
/// driven by `rng`.
///
/// # Errors
/// Same as [`Mcts::choose_action`].
pub fn choose_action<G: Game, R: Rng>(
    game: &G,
    state: &G::State,
    config: MctsConfig,
    rng: R,
) -> Result<G::Action> {
    Mcts::new(config, GreedyRollout::new(rng)).choose_action(game, state)
}
