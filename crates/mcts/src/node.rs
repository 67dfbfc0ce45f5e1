//! MCTS node types for tree storage.
//!
//! Nodes live in the arena owned by [`Tree`](crate::tree::Tree) and refer to
//! each other by index, so the parent link never owns anything.

use std::hash::Hash;

/// Index into the node arena.
///
/// This is a lightweight handle that references a node in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node is always at index 0.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A node in the MCTS tree.
///
/// Statistics are always recorded from the searching agent's perspective:
/// `wins` counts simulations through this node that the agent won.
#[derive(Clone, Debug)]
pub struct Node<A: Clone + Copy + Eq + Hash> {
    parent: Option<NodeId>,
    parent_action: Option<A>,
    pub(crate) children: Vec<(A, NodeId)>,
    pub(crate) untried_actions: Vec<A>,
    pub(crate) visits: u32,
    pub(crate) wins: u32,
}

impl<A: Clone + Copy + Eq + Hash> Node<A> {
    /// Create a new node whose untried actions are the given legal actions.
    pub fn new(parent: Option<NodeId>, parent_action: Option<A>, legal_actions: Vec<A>) -> Self {
        Self {
            parent,
            parent_action,
            children: Vec::new(),
            untried_actions: legal_actions,
            visits: 0,
            wins: 0,
        }
    }

    /// Create a root node.
    pub fn root(legal_actions: Vec<A>) -> Self {
        Self::new(None, None, legal_actions)
    }

    /// Parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Action that led here from the parent, `None` for the root.
    pub fn parent_action(&self) -> Option<A> {
        self.parent_action
    }

    /// Expanded children in the order they were created.
    pub fn children(&self) -> &[(A, NodeId)] {
        &self.children
    }

    /// Child reached by `action`, if it has been expanded.
    pub fn child(&self, action: A) -> Option<NodeId> {
        self.children
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, id)| *id)
    }

    /// Legal actions that have not been expanded yet.
    pub fn untried_actions(&self) -> &[A] {
        &self.untried_actions
    }

    /// Whether at least one legal action is still unexpanded.
    pub fn is_expandable(&self) -> bool {
        !self.untried_actions.is_empty()
    }

    /// Number of simulations that passed through this node.
    pub fn visits(&self) -> u32 {
        self.visits
    }

    /// Number of those simulations won by the searching agent.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Fraction of simulations won; 0.0 if never visited.
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.visits)
        }
    }

    /// Record one simulation result.
    pub(crate) fn record(&mut self, won: bool) {
        self.visits += 1;
        self.wins += u32::from(won);
    }

    /// Take the next action to expand.
    ///
    /// Actions come off the end of the list, so children are created in the
    /// reverse of the order the game generated the legal actions.
    pub(crate) fn take_untried(&mut self) -> Option<A> {
        self.untried_actions.pop()
    }
}
