//! Subtree size propagation: `tree_size(n) = 1 + sum tree_size(c)`.

use crate::tree::Tree;

/// Recompute `tree_size` for every node, from the leaves up.
///
/// Requires `depth` to already be set ([`crate::depth::annotate`]):
/// nodes are processed in decreasing depth order, which guarantees every
/// child is folded into its parent before the parent itself contributes
/// to its own parent.
pub fn annotate(tree: &mut Tree) {
    for node in &mut tree.nodes {
        node.tree_size = 1;
    }

    let mut indices: Vec<usize> = (0..tree.nodes.len()).collect();
    indices.sort_by(|&a, &b| tree.nodes[b].depth().cmp(&tree.nodes[a].depth()));

    for index in indices {
        if let Some(parent_index) = tree.nodes[index].parent_index() {
            let size = tree.nodes[index].tree_size;
            tree.nodes[parent_index].tree_size += size;
        }
    }
}
