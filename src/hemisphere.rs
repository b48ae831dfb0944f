//! Hemisphere sizing: propagate `radius`/`area` from the leaves up to the
//! root using the hyperbolic area rule.

use crate::config::LayoutConfig;
use crate::hypmath::{hyperbolic_area, radius_for_area};
use crate::tree::Tree;
use log::debug;

/// Size every node's hemisphere, leaves first and then internal nodes from
/// the deepest level up to the root.
///
/// Requires `depth` to already be set ([`crate::depth::annotate`]).
pub fn size(tree: &mut Tree, config: &LayoutConfig) {
    for node in &mut tree.nodes {
        if node.is_leaf() {
            node.radius = radius_for_area(config.leaf_seed_area);
            debug!("hemisphere: leaf {} radius={}", node.id(), node.radius);
        }
    }

    let mut indices: Vec<usize> = (0..tree.nodes.len()).collect();
    indices.sort_by(|&a, &b| tree.nodes[b].depth().cmp(&tree.nodes[a].depth()));

    for index in indices {
        if tree.nodes[index].is_leaf() {
            continue;
        }
        let mut area = 0.0;
        for &child_index in &tree.nodes[index].children.clone() {
            area += config.loose_packing_factor * hyperbolic_area(tree.nodes[child_index].radius);
        }
        let radius = radius_for_area(area);
        debug!("hemisphere: node {} area={} radius={}", tree.nodes[index].id(), area, radius);
        tree.nodes[index].area = area;
        tree.nodes[index].radius = radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;
    use crate::depth;
    use float_cmp::approx_eq;

    #[test]
    fn leaf_radius_matches_seed_area() {
        let mut tree = build(0, &[]).unwrap();
        depth::annotate(&mut tree);
        let config = LayoutConfig::default();
        size(&mut tree, &config);
        assert_eq!(tree.get(0).unwrap().radius(), radius_for_area(config.leaf_seed_area));
    }

    #[test]
    fn internal_node_area_matches_hemisphere_rule() {
        let mut tree = build(0, &[(1, Some(0)), (2, Some(0))]).unwrap();
        depth::annotate(&mut tree);
        let config = LayoutConfig::default();
        size(&mut tree, &config);

        let root = tree.get(0).unwrap();
        let expected_area = config.loose_packing_factor
            * (hyperbolic_area(tree.get(1).unwrap().radius()) + hyperbolic_area(tree.get(2).unwrap().radius()));
        assert!(approx_eq!(f64, root.area(), expected_area, epsilon = 1e-9));
        assert!(approx_eq!(f64, hyperbolic_area(root.radius()), root.area(), epsilon = 1e-9));
    }

    #[test]
    fn chain_radii_grow_toward_root() {
        let mut tree = build(0, &[(1, Some(0)), (2, Some(1)), (3, Some(2))]).unwrap();
        depth::annotate(&mut tree);
        size(&mut tree, &LayoutConfig::default());
        assert!(tree.get(0).unwrap().radius() > tree.get(1).unwrap().radius());
        assert!(tree.get(1).unwrap().radius() > tree.get(2).unwrap().radius());
        assert!(tree.get(2).unwrap().radius() > tree.get(3).unwrap().radius());
    }
}
