//! Assembles a [`Tree`] from an edge list and a declared root.
//!
//! Tolerant of edges arriving before their parent exists — placeholder
//! nodes are materialized on demand.

use crate::error::LayoutError;
use crate::node::Node;
use crate::tree::Tree;
use crate::NodeId;
use log::debug;
use std::collections::HashMap;

/// Build a tree from `root` and an ordered edge list of `(child, parent)`
/// pairs, where `parent = None` would declare `child` as a second root.
///
/// # Errors
/// - [`LayoutError::DuplicateRoot`] if any edge has `parent = None`
///   (the root is already established by the `root` argument).
/// - [`LayoutError::CycleToRoot`] if any edge tries to give the root a
///   parent.
/// - [`LayoutError::MalformedInput`] if an edge tries to re-parent a node
///   that already has a different recorded parent.
pub fn build(root: NodeId, edges: &[(NodeId, Option<NodeId>)]) -> Result<Tree, LayoutError> {
    let mut nodes = Vec::with_capacity(edges.len() + 1);
    let mut id_to_index = HashMap::with_capacity(edges.len() + 1);
    let root_index = get_or_create(&mut nodes, &mut id_to_index, root);

    for &(child, parent) in edges {
        let Some(parent) = parent else {
            return Err(LayoutError::DuplicateRoot { attempted: child, root });
        };
        if child == root {
            return Err(LayoutError::CycleToRoot { child, parent });
        }

        let parent_index = get_or_create(&mut nodes, &mut id_to_index, parent);
        let child_index = get_or_create(&mut nodes, &mut id_to_index, child);

        match nodes[child_index].parent_index() {
            Some(existing) if existing != parent_index => {
                return Err(LayoutError::MalformedInput(format!(
                    "node {child} already has parent {}, cannot reassign to {parent}",
                    nodes[existing].id()
                )));
            }
            Some(_) => {
                // Same (child, parent) pair re-inserted: a no-op.
            }
            None => {
                debug!("builder: attaching child {child} to parent {parent}");
                nodes[child_index].parent = Some(parent_index);
                nodes[parent_index].children.push(child_index);
            }
        }
    }

    Ok(Tree { nodes, root: root_index, height: 0, id_to_index })
}

fn get_or_create(nodes: &mut Vec<Node>, id_to_index: &mut HashMap<NodeId, usize>, id: NodeId) -> usize {
    if let Some(&index) = id_to_index.get(&id) {
        return index;
    }
    let index = nodes.len();
    nodes.push(Node::new(id));
    id_to_index.insert(id, index);
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_node() {
        let tree = build(0, &[]).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root_id(), 0);
        assert!(tree.get(0).unwrap().is_root());
        assert!(tree.get(0).unwrap().is_leaf());
    }

    #[test]
    fn root_with_one_child() {
        let tree = build(0, &[(1, Some(0))]).unwrap();
        assert_eq!(tree.len(), 2);
        let child = tree.get(1).unwrap();
        assert!(!child.is_root());
        assert_eq!(tree.get(0).unwrap().num_children(), 1);
    }

    #[test]
    fn placeholder_parent_materializes() {
        // Edge for node 2 (parent 1) arrives before any edge mentions 1's
        // own parent.
        let tree = build(0, &[(2, Some(1)), (1, Some(0))]).unwrap();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(1).unwrap().num_children(), 1);
    }

    #[test]
    fn duplicate_root_rejected() {
        let err = build(0, &[(1, None)]).unwrap_err();
        assert_eq!(err, LayoutError::DuplicateRoot { attempted: 1, root: 0 });
    }

    #[test]
    fn cycle_to_root_rejected() {
        let err = build(0, &[(0, Some(5))]).unwrap_err();
        assert_eq!(err, LayoutError::CycleToRoot { child: 0, parent: 5 });
    }

    #[test]
    fn reparenting_conflict_rejected() {
        let err = build(0, &[(1, Some(0)), (2, Some(0)), (1, Some(2))]).unwrap_err();
        assert!(matches!(err, LayoutError::MalformedInput(_)));
    }

    #[test]
    fn duplicate_identical_edge_is_noop() {
        let tree = build(0, &[(1, Some(0)), (1, Some(0))]).unwrap();
        assert_eq!(tree.get(0).unwrap().num_children(), 1);
    }

    #[test]
    fn star_of_three_leaves() {
        let tree = build(0, &[(1, Some(0)), (2, Some(0)), (3, Some(0))]).unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.get(0).unwrap().num_children(), 3);
    }

    #[test]
    fn linear_chain() {
        let tree = build(0, &[(1, Some(0)), (2, Some(1)), (3, Some(2))]).unwrap();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.get(3).unwrap().num_children(), 0);
    }
}
