//! Virtual-world paths.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::ids::{CurveId, IntersectionId, PathId};

/// A virtual arc between two intersections, scaled from a real curve.
///
/// The radius is `curve.radius * gain`; the angle is chosen so that the
/// virtual arc length equals the real walkable arc length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VirtualPath {
    /// Identifier (index into the layout's path list).
    pub id: PathId,
    /// Center of the circle the virtual arc lies on.
    pub circle_center: Vec3,
    /// Virtual radius in meters.
    pub radius: f32,
    /// Virtual angle in degrees.
    pub angle: f32,
    /// Radius scale from real to virtual.
    pub gain: f32,
    /// Underlying real curve.
    pub curve: CurveId,
    /// Start and end intersection, in creation order.
    pub end_points: [IntersectionId; 2],
}

impl VirtualPath {
    /// Virtual arc length in meters.
    #[inline]
    pub fn arc_length(&self) -> f32 {
        self.angle.to_radians() * self.radius
    }

    /// The intersection at the other end from `intersection`.
    pub fn other_end(&self, intersection: IntersectionId) -> Option<IntersectionId> {
        match self.end_points {
            [a, b] if a == intersection => Some(b),
            [a, b] if b == intersection => Some(a),
            _ => None,
        }
    }
}
