//! Ground-plane geometry for the redirection graph.
//!
//! Positions are `glam::Vec3` with +Y up; people walk on the XZ plane.
//! Rotations "about the vertical axis by θ" are `Quat::from_rotation_y(θ)`,
//! so a positive angle turns +X towards -Z. Angles are in degrees unless
//! the function name says radians.

use glam::{Quat, Vec3};

/// Vectors shorter than this are treated as zero-length.
pub const DEGENERATE_LENGTH: f32 = 1e-6;

/// Project a vector onto the ground plane (drop the height component).
#[inline]
pub fn planar(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Normalize `v`, or return `fallback` when it is zero-length or not finite.
#[inline]
pub fn safe_unit(v: Vec3, fallback: Vec3) -> Vec3 {
    if v.is_finite() && v.length_squared() > DEGENERATE_LENGTH * DEGENERATE_LENGTH {
        v.normalize()
    } else {
        fallback
    }
}

/// Rotate `v` about the vertical axis by `degrees`.
///
/// # Example
/// ```
/// use glam::Vec3;
/// use pathika::core::math::rotate_about_y;
///
/// let v = rotate_about_y(Vec3::X, 90.0);
/// assert!((v - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
/// ```
#[inline]
pub fn rotate_about_y(v: Vec3, degrees: f32) -> Vec3 {
    Quat::from_rotation_y(degrees.to_radians()) * v
}

/// Unsigned angle between two vectors in radians, in `[0, π]`.
///
/// Returns 0 when either vector is degenerate instead of NaN.
#[inline]
pub fn angle_between_rad(a: Vec3, b: Vec3) -> f32 {
    let len_a = a.length();
    let len_b = b.length();
    if !(len_a > DEGENERATE_LENGTH && len_b > DEGENERATE_LENGTH) {
        return 0.0;
    }
    (a.dot(b) / (len_a * len_b)).clamp(-1.0, 1.0).acos()
}

/// Unsigned angle between two vectors in degrees, in `[0, 180]`.
#[inline]
pub fn angle_between_deg(a: Vec3, b: Vec3) -> f32 {
    angle_between_rad(a, b).to_degrees()
}

/// Angle in `[0, 360)` that rotates `from` onto `to` about the vertical axis.
///
/// Both vectors are projected onto the ground plane first. Satisfies
/// `rotate_about_y(from, angle360(from, to)) ∥ to`.
///
/// # Example
/// ```
/// use glam::Vec3;
/// use pathika::core::math::{angle360, rotate_about_y};
///
/// let to = rotate_about_y(Vec3::X, 250.0);
/// assert!((angle360(Vec3::X, to) - 250.0).abs() < 1e-3);
/// ```
pub fn angle360(from: Vec3, to: Vec3) -> f32 {
    let from = planar(from);
    let to = planar(to);
    if from.length() <= DEGENERATE_LENGTH || to.length() <= DEGENERATE_LENGTH {
        return 0.0;
    }
    // y-component of from × to is positive for a positive rotation about +Y
    let sin = from.cross(to).y;
    let cos = from.dot(to);
    let angle = sin.atan2(cos).to_degrees().rem_euclid(360.0);
    if angle >= 360.0 { 0.0 } else { angle }
}

/// A vertical half-space on the ground plane.
///
/// The boundary is the vertical plane through `point` with horizontal
/// `normal`. Points on the normal side have positive signed distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfSpace {
    /// A point on the boundary (height dropped).
    pub point: Vec3,
    /// Unit normal on the ground plane; zero for a degenerate plane.
    pub normal: Vec3,
}

impl HalfSpace {
    /// Create a half-space. A degenerate normal yields a plane that
    /// contains nothing.
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self {
            point: planar(point),
            normal: safe_unit(planar(normal), Vec3::ZERO),
        }
    }

    /// Signed ground-plane distance from the boundary to `p`.
    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(planar(p) - self.point)
    }

    /// Is `p` strictly on the normal side?
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        self.signed_distance(p) > 0.0
    }

    /// Same boundary, opposite side.
    #[inline]
    pub fn flipped(self) -> Self {
        Self {
            point: self.point,
            normal: -self.normal,
        }
    }
}
