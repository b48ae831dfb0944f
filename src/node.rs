//! The `Node` type — one vertex of a laid-out tree.
//!
//! Private fields reached through small accessor methods, arena-index
//! based rather than holding live references.

use crate::hypmath::Point4;
use crate::NodeId;
use serde::{Deserialize, Serialize};

/// A node placed somewhere on its parent's hemisphere (or, for the root,
/// at the origin of the global frame).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) parent: Option<usize>,
    pub(crate) children: Vec<usize>,
    pub(crate) depth: u32,
    pub(crate) tree_size: u32,
    pub(crate) radius: f64,
    pub(crate) area: f64,
    pub(crate) band: u32,
    pub(crate) theta: f64,
    pub(crate) phi: f64,
    pub(crate) coord: Point4,
}

impl Node {
    pub(crate) fn new(id: NodeId) -> Self {
        Self {
            id,
            parent: None,
            children: Vec::new(),
            depth: 0,
            tree_size: 1,
            radius: 0.0,
            area: 0.0,
            band: 0,
            theta: 0.0,
            phi: 0.0,
            coord: Point4::ORIGIN,
        }
    }

    /// The externally supplied id of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Arena index of this node's parent, or `None` for the root.
    pub(crate) fn parent_index(&self) -> Option<usize> {
        self.parent
    }

    /// Arena indices of this node's children, in placement order.
    pub(crate) fn children_indices(&self) -> &[usize] {
        &self.children
    }

    /// Number of children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Is this node a leaf (no children)?
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Is this node the root (no parent)?
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Depth from the root (root = 0).
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of nodes in the subtree rooted here, self included.
    pub fn tree_size(&self) -> u32 {
        self.tree_size
    }

    /// Radius of this node's hemisphere, in hyperbolic units.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Total area reserved on this node's hemisphere for its children.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Latitude band index on the parent's hemisphere.
    pub fn band(&self) -> u32 {
        self.band
    }

    /// Azimuthal angle on the parent's hemisphere, in `[0, 2*pi)`.
    pub fn theta(&self) -> f64 {
        self.theta
    }

    /// Polar angle from the parent's pole, in `[0, pi/2]`.
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// This node's position in the global Cartesian frame.
    pub fn coord(&self) -> Point4 {
        self.coord
    }
}
