//! Breadth-first depth annotation.

use crate::tree::Tree;
use std::collections::VecDeque;

/// Assign `depth` to every node starting from `0` at the root, and record
/// the tree's `height` as the maximum depth observed.
///
/// Iterative, generation-by-generation BFS — recursion is avoided so that
/// pathologically tall trees (height approaching node count) don't blow
/// the stack.
pub fn annotate(tree: &mut Tree) {
    let mut depth = 0u32;
    let mut current_generation: VecDeque<usize> = VecDeque::from([tree.root_index()]);

    loop {
        let mut next_generation = VecDeque::new();
        while let Some(index) = current_generation.pop_front() {
            tree.node_at_mut(index).depth = depth;
            next_generation.extend(tree.node_at(index).children_indices().iter().copied());
        }
        if next_generation.is_empty() {
            break;
        }
        depth += 1;
        current_generation = next_generation;
    }

    tree.height = depth;
}
