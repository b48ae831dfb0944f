//! Tunable constants for the layout pipeline, bundled into one
//! `Default`-able struct.

use serde::{Deserialize, Serialize};

/// Which key child ordering sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChildOrder {
    /// Sort children by hemisphere radius, decreasing. The primary mode.
    ByRadius,
    /// Sort children by subtree size, decreasing.
    ByTreeSize,
}

impl Default for ChildOrder {
    fn default() -> Self {
        Self::ByRadius
    }
}

/// Parameters controlling hemisphere sizing and placement, in hyperbolic
/// units.
///
/// Bundles every knob the algorithm exposes into one `Default`-able
/// struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Which key to sort children by before placement.
    pub child_order: ChildOrder,

    /// Area seed fed to `radius_for_area` to obtain every leaf's hemisphere
    /// radius. Not a radius itself — see the area→radius inverse in
    /// [`crate::hypmath`].
    pub leaf_seed_area: f64,

    /// Factor by which summed child hyperbolic-disc areas are inflated to
    /// reserve spacing on the parent hemisphere.
    pub loose_packing_factor: f64,

    /// Small positive polar angle substituted for exactly zero to avoid the
    /// `delta_theta` singularity at the pole.
    pub azimuthal_sentinel: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            child_order: ChildOrder::ByRadius,
            leaf_seed_area: 0.0025,
            loose_packing_factor: 7.2,
            azimuthal_sentinel: 1e-6,
        }
    }
}
