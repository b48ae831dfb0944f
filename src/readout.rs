//! Level-order coordinate readout: the pure function consumers reach for
//! once a tree is laid out.

use crate::tree::Tree;
use crate::NodeId;
use std::collections::VecDeque;

/// Walk a laid-out tree breadth-first and emit `(id, x, y, z)` for every
/// node, root first.
///
/// Read-only and idempotent — calling it twice on the same tree yields the
/// same sequence.
pub fn coordinates(tree: &Tree) -> Vec<(NodeId, f64, f64, f64)> {
    let mut out = Vec::with_capacity(tree.len());
    let mut queue: VecDeque<usize> = VecDeque::from([tree.root_index()]);

    while let Some(index) = queue.pop_front() {
        let node = tree.node_at(index);
        let coord = node.coord();
        out.push((node.id(), coord.x, coord.y, coord.z));
        queue.extend(node.children_indices().iter().copied());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;
    use crate::config::LayoutConfig;
    use crate::{depth, hemisphere, ordering, placement, size};

    fn laid_out(edges: &[(i64, Option<i64>)]) -> Tree {
        let mut tree = build(0, edges).unwrap();
        let config = LayoutConfig::default();
        depth::annotate(&mut tree);
        size::annotate(&mut tree);
        hemisphere::size(&mut tree, &config);
        ordering::sort(&mut tree, config.child_order);
        placement::place(&mut tree, &config);
        tree
    }

    #[test]
    fn root_is_first_and_at_origin() {
        let tree = laid_out(&[(1, Some(0)), (2, Some(0))]);
        let coords = coordinates(&tree);
        assert_eq!(coords[0], (0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn visits_every_node_exactly_once() {
        let edges = [(1, Some(0)), (2, Some(0)), (3, Some(1)), (4, Some(1)), (5, Some(2))];
        let tree = laid_out(&edges);
        let coords = coordinates(&tree);
        assert_eq!(coords.len(), tree.len());
        let mut ids: Vec<NodeId> = coords.iter().map(|c| c.0).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn breadth_first_order_is_level_by_level() {
        let tree = laid_out(&[(1, Some(0)), (2, Some(0)), (3, Some(1))]);
        let coords = coordinates(&tree);
        let order: Vec<NodeId> = coords.iter().map(|c| c.0).collect();
        // Root first, then both depth-1 nodes, then the depth-2 node.
        assert_eq!(order[0], 0);
        assert!(order[1..3].contains(&1) && order[1..3].contains(&2));
        assert_eq!(order[3], 3);
    }

    #[test]
    fn idempotent() {
        let tree = laid_out(&[(1, Some(0)), (2, Some(1))]);
        assert_eq!(coordinates(&tree), coordinates(&tree));
    }
}
