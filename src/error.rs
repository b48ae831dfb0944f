//! Error taxonomy for the layout pipeline.
//!
//! Builder failures are fatal and abort the layout (see [`LayoutError`]).
//! Numerical failures discovered while packing a hemisphere are not fatal —
//! they are collected as [`PlacementWarning`]s and also logged, but never
//! stop the pipeline.

use crate::NodeId;
use thiserror::Error;

/// Fatal errors raised while assembling the tree from an edge list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// A second edge tried to declare a root, after one was already set.
    #[error("duplicate root: node {attempted} declared as root but root {root} is already set")]
    DuplicateRoot {
        /// The node the offending edge tried to install as root.
        attempted: NodeId,
        /// The root already recorded on the tree.
        root: NodeId,
    },

    /// An edge tried to give the declared root a parent.
    #[error("cycle to root: edge ({child}, {parent}) would give the root a parent")]
    CycleToRoot {
        /// Always equal to the tree's root id.
        child: NodeId,
        /// The parent the offending edge tried to attach to the root.
        parent: NodeId,
    },

    /// The edge list is inconsistent in a way the builder refuses to guess
    /// its way through (currently: conflicting re-parenting of a node).
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// A non-fatal numerical failure encountered while packing children onto a
/// parent hemisphere.
///
/// The node that triggered this keeps whatever placement it already had —
/// layout continues without it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementWarning {
    /// The child node whose placement could not be computed this step.
    pub node: NodeId,
    /// Its parent.
    pub parent: NodeId,
    /// The child hemisphere's radius at the time of the failure.
    pub child_radius: f64,
    /// The parent hemisphere's radius at the time of the failure.
    pub parent_radius: f64,
    /// The polar angle in effect at the time of the failure.
    pub phi: f64,
}

impl std::fmt::Display for PlacementWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "non-fatal placement failure: node {} (parent {}), child_radius={}, parent_radius={}, phi={}",
            self.node, self.parent, self.child_radius, self.parent_radius, self.phi
        )
    }
}
