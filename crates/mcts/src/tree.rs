//! Arena-allocated MCTS tree.
//!
//! Using a Vec<Node> with indices provides better cache locality
//! and simpler ownership compared to Rc<RefCell<Node>>.

use crate::node::{Node, NodeId};
use std::hash::Hash;

/// Arena-allocated MCTS tree.
///
/// Nodes are stored in a contiguous vector and referenced by index. A tree
/// is built for a single decision and dropped afterwards; nodes are only
/// ever added, never removed.
#[derive(Debug)]
pub struct Tree<A: Clone + Copy + Eq + Hash> {
    nodes: Vec<Node<A>>,
}

impl<A: Clone + Copy + Eq + Hash> Tree<A> {
    /// Create a new tree holding only a root with the given legal actions.
    pub fn new(root_actions: Vec<A>) -> Self {
        Self {
            nodes: vec![Node::root(root_actions)],
        }
    }

    /// Get a reference to a node by ID.
    ///
    /// # Panics
    /// Panics if the NodeId is invalid.
    pub fn get(&self, id: NodeId) -> &Node<A> {
        &self.nodes[id.0]
    }

    /// Get a mutable reference to a node by ID.
    ///
    /// # Panics
    /// Panics if the NodeId is invalid.
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<A> {
        &mut self.nodes[id.0]
    }

    /// Get the root node.
    pub fn root(&self) -> &Node<A> {
        self.get(NodeId::ROOT)
    }

    /// Create a child of `parent` reached by `action` and register it under
    /// that action, returning its ID.
    pub(crate) fn add_child(&mut self, parent: NodeId, action: A, legal_actions: Vec<A>) -> NodeId {
        debug_assert!(
            self.get(parent).child(action).is_none(),
            "action expanded twice from the same node"
        );

        let id = NodeId(self.nodes.len());
        self.nodes
            .push(Node::new(Some(parent), Some(action), legal_actions));
        self.get_mut(parent).children.push((action, id));
        id
    }

    /// Record a simulation result on `node` and every ancestor up to and
    /// including the root.
    ///
    /// The same `won` flag is applied at every level; the statistics stay in
    /// the searching agent's perspective and are only reinterpreted when
    /// scored.
    pub fn backpropagate(&mut self, node: NodeId, won: bool) {
        let mut current = Some(node);
        while let Some(id) = current {
            let node = self.get_mut(id);
            node.record(won);
            current = node.parent();
        }
    }

    /// Number of edges between the root and `node`.
    pub fn depth(&self, node: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.get(node).parent();
        while let Some(id) = current {
            depth += 1;
            current = self.get(id).parent();
        }
        depth
    }

    /// Iterate over all nodes with their IDs, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<A>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId(i), node))
    }

    /// Get the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (never true, the root always exists).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
