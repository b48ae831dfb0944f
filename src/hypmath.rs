//! Pure hyperbolic/spherical geometry routines underlying the layout engine.
//!
//! Every function here is a free function over `f64` scalars or [`Point4`];
//! none of them touch the tree. `radius_for_area`, `delta_theta`, and
//! `delta_phi` all carry preconditions that are precondition violations
//! rather than recoverable errors — a caller passing a negative area or a
//! non-positive parent radius has a bug, not bad input, so these assert
//! rather than return `Result`.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A homogeneous 3D point `(x, y, z, w)`. `w` is always `1.0` for the
/// points this crate produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point4 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Point4 {
    /// The origin, `w = 1`.
    pub const ORIGIN: Point4 = Point4 { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Euclidean distance between two points, ignoring `w`.
    pub fn distance(&self, other: &Point4) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Area of a hyperbolic disc of radius `r`.
///
/// `hyperbolic_area(r) = 4*pi * sinh^2(r / 2)`
pub fn hyperbolic_area(r: f64) -> f64 {
    let s = (r / 2.0).sinh();
    4.0 * PI * s * s
}

/// Inverse of [`hyperbolic_area`]: the radius of a hyperbolic disc with the
/// given area. `a = 0` returns `0`.
///
/// # Panics
/// Panics if `a` is negative.
pub fn radius_for_area(a: f64) -> f64 {
    assert!(a >= 0.0, "radius_for_area requires a non-negative area, got {a}");
    if a == 0.0 {
        return 0.0;
    }
    2.0 * (a / (4.0 * PI)).sqrt().asinh()
}

/// Azimuthal half-width on a hemisphere of radius `rp` consumed by a child
/// hemisphere of radius `rc` placed at polar angle `phi`.
///
/// `delta_theta = asin( sinh(rc) / (sinh(rp) * sin(phi)) )`, clamped to
/// `[0, pi]`.
///
/// Returns `None` if the underlying ratio is not finite (division by zero
/// at `phi = 0`, or `sinh(rp) = 0`) — the caller is expected to collect
/// this as a recoverable placement warning rather than propagate a panic,
/// since it arises from accumulated placement state, not a programmer
/// error.
///
/// # Panics
/// Panics if `rp <= 0`.
pub fn delta_theta(rc: f64, rp: f64, phi: f64) -> Option<f64> {
    assert!(rp > 0.0, "delta_theta requires rp > 0, got {rp}");
    let ratio = rc.sinh() / (rp.sinh() * phi.sin());
    if !ratio.is_finite() {
        return None;
    }
    Some(ratio.clamp(-1.0, 1.0).asin().clamp(0.0, PI))
}

/// Polar-angle width consumed by a child hemisphere of radius `rc` on a
/// parent hemisphere of radius `rp`.
///
/// `delta_phi = asin( sinh(rc) / sinh(rp) )`, clamped to `[0, pi/2]`.
///
/// # Panics
/// Panics if `rp <= 0`.
pub fn delta_phi(rc: f64, rp: f64) -> f64 {
    assert!(rp > 0.0, "delta_phi requires rp > 0, got {rp}");
    let ratio = rc.sinh() / rp.sinh();
    ratio.clamp(-1.0, 1.0).asin().clamp(0.0, PI / 2.0)
}

/// Standard spherical-to-Cartesian mapping, at radius `r`.
pub fn sph_to_cart(theta: f64, phi: f64, r: f64) -> Point4 {
    Point4 {
        x: r * phi.sin() * theta.cos(),
        y: r * phi.sin() * theta.sin(),
        z: r * phi.cos(),
        w: 1.0,
    }
}

/// Rotate a local point so that its former `+z` axis aligns with the
/// direction `(theta_p, phi_p)` in the parent's frame.
///
/// Equivalent to applying `R_z(theta_p) * R_y(phi_p)` to `p`.
pub fn coord_transform(p: Point4, theta_p: f64, phi_p: f64) -> Point4 {
    // R_y(phi_p), then R_z(theta_p).
    let (sp, cp) = (phi_p.sin(), phi_p.cos());
    let (st, ct) = (theta_p.sin(), theta_p.cos());

    let xy = cp * p.x + sp * p.z;
    let y1 = p.y;
    let z1 = -sp * p.x + cp * p.z;

    Point4 {
        x: ct * xy - st * y1,
        y: st * xy + ct * y1,
        z: z1,
        w: 1.0,
    }
}

/// Translate `p` by `q`, component-wise on `x, y, z`. `w` is preserved as
/// `1.0`.
pub fn cart_offset(p: Point4, q: Point4) -> Point4 {
    Point4 {
        x: p.x + q.x,
        y: p.y + q.y,
        z: p.z + q.z,
        w: 1.0,
    }
}
