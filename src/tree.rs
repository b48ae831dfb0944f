//! The `Tree` arena: every node keyed by dense arena index, plus a lookup
//! table back to the caller's own node ids.

use crate::node::Node;
use crate::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A rooted tree, laid out in hyperbolic hemispheres and resolved into a
/// global Cartesian frame.
///
/// Nodes are stored in a flat arena; all internal links (parent, children)
/// are arena indices, never live references, so the whole structure stays
/// `Vec`-backed and cache-friendly even at large node counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: usize,
    pub(crate) height: u32,
    pub(crate) id_to_index: HashMap<NodeId, usize>,
}

impl Tree {
    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Is this tree empty? (Never true for a successfully built tree — the
    /// root always exists.)
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The maximum depth observed in the tree (root = depth 0).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The id of the root node.
    pub fn root_id(&self) -> NodeId {
        self.nodes[self.root].id()
    }

    /// Look up a node by its externally supplied id.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.id_to_index.get(&id).map(|&i| &self.nodes[i])
    }

    pub(crate) fn root_index(&self) -> usize {
        self.root
    }

    pub(crate) fn node_at(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    pub(crate) fn node_at_mut(&mut self, index: usize) -> &mut Node {
        &mut self.nodes[index]
    }

    /// Iterate over every node, in arena order (not guaranteed to be any
    /// particular traversal order — use [`crate::readout::coordinates`] for
    /// a level-order walk).
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}
