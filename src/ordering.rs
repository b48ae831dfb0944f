//! Child ordering: children are sorted in place, descending, by a single
//! key chosen once for the whole layout.

use crate::config::ChildOrder;
use crate::tree::Tree;

/// Sort every node's children in place, descending by `radius` or
/// `tree_size` depending on `order`. Ties keep their original relative
/// order (Rust's `sort_by` is stable).
pub fn sort(tree: &mut Tree, order: ChildOrder) {
    for i in 0..tree.nodes.len() {
        let mut children = tree.nodes[i].children.clone();
        match order {
            ChildOrder::ByRadius => {
                children.sort_by(|&a, &b| {
                    tree.nodes[b].radius.partial_cmp(&tree.nodes[a].radius).unwrap()
                });
            }
            ChildOrder::ByTreeSize => {
                children.sort_by(|&a, &b| tree.nodes[b].tree_size.cmp(&tree.nodes[a].tree_size));
            }
        }
        tree.nodes[i].children = children;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;
    use crate::config::LayoutConfig;
    use crate::{depth, hemisphere, size};

    fn laid_out(edges: &[(i64, Option<i64>)]) -> Tree {
        let mut tree = build(0, edges).unwrap();
        depth::annotate(&mut tree);
        size::annotate(&mut tree);
        hemisphere::size(&mut tree, &LayoutConfig::default());
        tree
    }

    #[test]
    fn sort_by_radius_is_non_increasing() {
        // Different subtree shapes under each child of the root give them
        // different hemisphere radii.
        let edges = [
            (1, Some(0)),
            (2, Some(0)),
            (3, Some(0)),
            (4, Some(1)),
            (5, Some(1)),
            (6, Some(2)),
        ];
        let mut tree = laid_out(&edges);
        sort(&mut tree, ChildOrder::ByRadius);

        for index in 0..tree.len() {
            let radii: Vec<f64> =
                tree.node_at(index).children_indices().iter().map(|&c| tree.node_at(c).radius()).collect();
            for pair in radii.windows(2) {
                assert!(pair[0] >= pair[1]);
            }
        }
    }

    #[test]
    fn sort_by_tree_size_is_non_increasing() {
        let edges = [
            (1, Some(0)),
            (2, Some(0)),
            (3, Some(0)),
            (4, Some(1)),
            (5, Some(1)),
            (6, Some(2)),
        ];
        let mut tree = laid_out(&edges);
        sort(&mut tree, ChildOrder::ByTreeSize);

        for index in 0..tree.len() {
            let sizes: Vec<u32> =
                tree.node_at(index).children_indices().iter().map(|&c| tree.node_at(c).tree_size()).collect();
            for pair in sizes.windows(2) {
                assert!(pair[0] >= pair[1]);
            }
        }
    }
}
