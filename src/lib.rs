//! Lay out a rooted tree on nested hyperbolic hemispheres and resolve each
//! node's position in a global Cartesian frame.
//!
//! Every node is given a hemisphere sized to hold its children (largest
//! subtrees first), and every child is packed onto its parent's hemisphere
//! band by band, walking outward in polar angle until a band fills up and
//! the next one starts. The result is a 3D embedding where subtree size
//! and depth both read out as radial structure: deep, bushy trees spread
//! wide near the root and taper outward, the way hyperbolic space tends to
//! want them to.
//!
//! ### Pipeline
//!
//! [`layout`] runs the following stages in sequence, each reading only
//! fields the previous stage has already filled in:
//!
//! 1. [`builder::build`] — assemble a [`Tree`] from an edge list.
//! 2. [`depth::annotate`] — breadth-first depth and tree height.
//! 3. [`size::annotate`] — subtree size, leaves to root.
//! 4. [`hemisphere::size`] — hemisphere radius and area, leaves to root.
//! 5. [`ordering::sort`] — order each node's children for packing.
//! 6. [`placement::place`] — pack children onto hemispheres and resolve
//!    global coordinates.
//!
//! [`readout::coordinates`] is the read-only accessor consumers reach for
//! once a [`Tree`] has been laid out.

mod builder;
mod config;
mod depth;
mod error;
mod hemisphere;
mod hypmath;
mod node;
mod ordering;
mod placement;
mod readout;
mod size;
mod tree;

pub use config::{ChildOrder, LayoutConfig};
pub use error::{LayoutError, PlacementWarning};
pub use hypmath::Point4;
pub use node::Node;
pub use readout::coordinates;
pub use tree::Tree;

/// Externally supplied node identifier. Need not be dense or contiguous —
/// the tree keeps its own arena indices internally and maps between the
/// two with a lookup table (see [`Tree::get`]).
pub type NodeId = i64;

/// Everything a completed layout hands back: the laid-out tree, plus every
/// non-fatal numerical failure collected along the way.
#[derive(Debug, Clone)]
pub struct LayoutReport {
    /// The laid-out tree. Every node has `radius`, `area`, `band`, `theta`,
    /// `phi`, and `coord` populated.
    pub tree: Tree,
    /// Non-fatal placement failures, in the order they occurred. Empty on
    /// a clean run. A node named here kept whatever placement it already
    /// had when its step failed.
    pub warnings: Vec<PlacementWarning>,
}

/// Run the full layout pipeline: build a tree from `root` and `edges`,
/// size its hemispheres, order its children, and place everything in a
/// global Cartesian frame.
///
/// # Errors
/// Returns [`LayoutError`] if the edge list is inconsistent with `root`
/// (see [`builder::build`]). Numerical failures during placement are not
/// fatal — they come back in [`LayoutReport::warnings`] instead.
pub fn layout(
    root: NodeId,
    edges: &[(NodeId, Option<NodeId>)],
    config: LayoutConfig,
) -> Result<LayoutReport, LayoutError> {
    let mut tree = builder::build(root, edges)?;
    depth::annotate(&mut tree);
    size::annotate(&mut tree);
    hemisphere::size(&mut tree, &config);
    ordering::sort(&mut tree, config.child_order);
    let warnings = placement::place(&mut tree, &config);
    Ok(LayoutReport { tree, warnings })
}
