//! Yaw-only rotation and horizontal-plane vector helpers.
//!
//! Every creature in this framework moves on the ground plane: headings are
//! horizontal unit vectors and all rotation is about the +Y axis.  The
//! helpers here keep that invariant in one place so behaviors never
//! accidentally pitch or roll an agent.
//!
//! Conventions: +Y is up, +Z is the neutral forward direction, and a yaw of
//! `θ` maps forward to `(sin θ, 0, cos θ)`.

use glam::{Quat, Vec3};

/// Project `v` onto the XZ plane and normalize.
///
/// Returns `Vec3::ZERO` when the flattened vector is degenerate (pure
/// vertical input or zero) so callers can branch on "no usable heading".
#[inline]
pub fn flatten_dir(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

/// The yaw-only rotation that faces `dir` (flattened to the XZ plane).
///
/// Degenerate directions yield `Quat::IDENTITY` rather than NaN.
#[inline]
pub fn look_rotation_flat(dir: Vec3) -> Quat {
    let flat = flatten_dir(dir);
    if flat == Vec3::ZERO {
        return Quat::IDENTITY;
    }
    Quat::from_rotation_y(flat.x.atan2(flat.z))
}

/// Fraction-based slerp from `current` toward `target`.
///
/// `t` is clamped to `[0, 1]`; behaviors pass `rotation_speed * dt`, which
/// gives an exponential ease-in toward the target heading.
#[inline]
pub fn rotate_towards(current: Quat, target: Quat, t: f32) -> Quat {
    current.slerp(target, t.clamp(0.0, 1.0))
}

/// Angle in degrees between two headings after flattening to the XZ plane.
///
/// Returns `0.0` if either heading is degenerate, which suppresses jittery
/// near-zero corrections at the call sites.
pub fn angle_between_flat_deg(a: Vec3, b: Vec3) -> f32 {
    let fa = flatten_dir(a);
    let fb = flatten_dir(b);
    if fa == Vec3::ZERO || fb == Vec3::ZERO {
        return 0.0;
    }
    fa.dot(fb).clamp(-1.0, 1.0).acos().to_degrees()
}

/// The forward direction of a rotation (`rot * +Z`).
#[inline]
pub fn forward(rot: Quat) -> Vec3 {
    rot * Vec3::Z
}

/// Rotate a horizontal direction about +Y by `deg` degrees.
#[inline]
pub fn rotate_dir_y(dir: Vec3, deg: f32) -> Vec3 {
    Quat::from_rotation_y(deg.to_radians()) * dir
}
