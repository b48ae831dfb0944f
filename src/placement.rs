//! Top-down angular packing of children on their parent's hemisphere, then
//! conversion into the global Cartesian frame.
//!
//! Traversal is parent-by-parent in breadth-first order: an outer loop
//! walks parents level by level, an inner loop walks that parent's
//! children. This keeps each per-subtree packing state's scope explicit
//! instead of comparing the current child's parent against the previous
//! child's parent on every step.

use crate::config::LayoutConfig;
use crate::error::PlacementWarning;
use crate::hypmath::{cart_offset, coord_transform, delta_phi, delta_theta, sph_to_cart};
use crate::tree::Tree;
use log::{debug, warn};
use std::collections::VecDeque;
use std::f64::consts::PI;

/// Packing state scoped to one parent's hemisphere.
struct PackingState {
    phi: f64,
    theta: f64,
    delta_theta_current: f64,
    band: u32,
    last_max_phi: f64,
    first_child: bool,
}

impl PackingState {
    fn new(sentinel: f64) -> Self {
        Self {
            phi: sentinel,
            theta: 0.0,
            delta_theta_current: 0.0,
            band: 1,
            last_max_phi: 0.0,
            first_child: true,
        }
    }
}

/// Place every non-root node on its parent's hemisphere and resolve its
/// global Cartesian coordinate.
///
/// Requires `radius` to already be set on every node
/// ([`crate::hemisphere::size`]) and children to already be ordered
/// ([`crate::ordering::sort`]).
///
/// Numerical failures (division by zero in `delta_theta`, at the pole
/// singularity) are collected as [`PlacementWarning`]s and logged, never
/// propagated — the offending node simply keeps whatever placement it had
/// going into that step.
pub fn place(tree: &mut Tree, config: &LayoutConfig) -> Vec<PlacementWarning> {
    let mut warnings = Vec::new();
    let mut parents: VecDeque<usize> = VecDeque::from([tree.root_index()]);
    let root_index = tree.root_index();

    while let Some(parent_index) = parents.pop_front() {
        let children = tree.nodes[parent_index].children.clone();
        if children.is_empty() {
            continue;
        }

        let rp = tree.nodes[parent_index].radius;
        let mut state = PackingState::new(config.azimuthal_sentinel);

        for &child_index in &children {
            let rc = tree.nodes[child_index].radius;

            if state.first_child {
                state.phi += delta_phi(rc, rp);
                tree.nodes[child_index].band = 0;
                tree.nodes[child_index].theta = 0.0;
                tree.nodes[child_index].phi = state.phi;
                state.first_child = false;
            } else {
                match delta_theta(rc, rp, state.phi) {
                    Some(dtheta) => {
                        state.delta_theta_current = dtheta;
                        if state.theta + dtheta <= 2.0 * PI {
                            state.theta += dtheta;
                            if state.last_max_phi > 0.0 {
                                state.last_max_phi = delta_phi(rc, rp);
                                state.phi += delta_phi(rc, rp);
                            }
                        } else {
                            state.band += 1;
                            state.theta = dtheta;
                            state.phi += state.last_max_phi + delta_phi(rc, rp);
                            state.last_max_phi = 0.0;
                        }
                        tree.nodes[child_index].band = state.band;
                        tree.nodes[child_index].theta = state.theta;
                        tree.nodes[child_index].phi = state.phi;
                    }
                    None => {
                        let warning = PlacementWarning {
                            node: tree.nodes[child_index].id(),
                            parent: tree.nodes[parent_index].id(),
                            child_radius: rc,
                            parent_radius: rp,
                            phi: state.phi,
                        };
                        warn!("{warning}");
                        warnings.push(warning);
                        // The child keeps whatever band/theta/phi it already had.
                    }
                }
            }

            let local = sph_to_cart(tree.nodes[child_index].theta, tree.nodes[child_index].phi, rp);
            let coord = if parent_index == root_index {
                local
            } else {
                let parent_theta = tree.nodes[parent_index].theta;
                let parent_phi = tree.nodes[parent_index].phi;
                let rotated = coord_transform(local, parent_theta, parent_phi);
                cart_offset(rotated, tree.nodes[parent_index].coord)
            };
            tree.nodes[child_index].coord = coord;
            debug!(
                "placement: node {} band={} theta={} phi={} coord=({}, {}, {})",
                tree.nodes[child_index].id(),
                tree.nodes[child_index].band,
                tree.nodes[child_index].theta,
                tree.nodes[child_index].phi,
                coord.x,
                coord.y,
                coord.z
            );

            // Reserve space for the other half of the placed hemisphere.
            state.theta += state.delta_theta_current;

            parents.push_back(child_index);
        }
    }

    warnings
}
