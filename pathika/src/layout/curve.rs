//! Real-world arcs between joint points.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::ids::{CurveId, JointId};
use super::topology::sign_of_curve;
use crate::core::math::{DEGENERATE_LENGTH, angle_between_deg, planar, rotate_about_y};

/// A circular arc in the tracking space connecting two joints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    /// Which curve this is.
    pub id: CurveId,
    /// Center of the circle the arc lies on.
    pub circle_center: Vec3,
    /// Circle radius in meters.
    pub radius: f32,
    /// Walkable angle in degrees, between the two walking-start positions.
    pub angle: f32,
    /// Connected joints.
    pub end_points: [JointId; 2],
}

/// Walking-start positions of a curve's two ends, in `end_points` order.
pub(crate) type CurveLanes = [Vec3; 2];

impl Curve {
    /// Derive a curve from the three joint positions (indexed by
    /// [`JointId::index`]).
    ///
    /// Each end's walking-start position is the joint rotated about the
    /// circle center, along the arc, by the angle that covers
    /// `walking_zone_radius` of arc length. That angle is capped at half
    /// the joint-to-joint angle so the two lanes never cross. A degenerate
    /// radius (coincident joints) leaves the lanes at the joints.
    pub(crate) fn derive(
        id: CurveId,
        joint_positions: &[Vec3; 3],
        walking_zone_radius: f32,
    ) -> (Curve, CurveLanes) {
        let end_points = id.end_points();
        let [from, to] = end_points;
        let p_from = joint_positions[from.index()];
        let p_to = joint_positions[to.index()];

        let (circle_center, radius) = if id.is_large() {
            let center = joint_positions[id.opposite_joint().index()];
            (center, planar(p_to - p_from).length())
        } else {
            ((p_from + p_to) * 0.5, planar(p_to - p_from).length() * 0.5)
        };

        let full_angle = angle_between_deg(planar(p_from - circle_center), planar(p_to - circle_center));
        let zone_angle = if radius > DEGENERATE_LENGTH {
            (walking_zone_radius / radius).to_degrees().min(full_angle * 0.5)
        } else {
            0.0
        };

        let start_from = circle_center
            + rotate_about_y(p_from - circle_center, sign_of_curve(from, to) as f32 * zone_angle);
        let start_to = circle_center
            + rotate_about_y(p_to - circle_center, sign_of_curve(to, from) as f32 * zone_angle);

        let angle = angle_between_deg(
            planar(start_from - circle_center),
            planar(start_to - circle_center),
        );

        let curve = Curve {
            id,
            circle_center,
            radius,
            angle,
            end_points,
        };
        (curve, [start_from, start_to])
    }

    /// Walkable arc length in meters.
    #[inline]
    pub fn arc_length(&self) -> f32 {
        self.angle.to_radians() * self.radius
    }

    /// The joint at the other end from `joint`, if the curve touches it.
    pub fn other_end(&self, joint: JointId) -> Option<JointId> {
        match self.end_points {
            [a, b] if a == joint => Some(b),
            [a, b] if b == joint => Some(a),
            _ => None,
        }
    }

    /// Tangent of travel at `point` on the circle when heading in
    /// rotation direction `sign` (see [`sign_of_curve`]).
    ///
    /// Zero when `point` sits on the circle center.
    pub fn tangent_at(&self, point: Vec3, sign: i32) -> Vec3 {
        rotate_about_y(planar(point - self.circle_center), 90.0 * sign as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_positions() -> [Vec3; 3] {
        [
            Vec3::new(0.55, 0.0, -1.25),
            Vec3::new(0.55, 0.0, 1.25),
            Vec3::new(-1.615, 0.0, 0.0),
        ]
    }

    #[test]
    fn test_small_curve_geometry() {
        let (curve, _) = Curve::derive(CurveId::AbSmall, &reference_positions(), 0.0);
        assert_relative_eq!(curve.radius, 1.25, epsilon = 1e-5);
        assert_relative_eq!((curve.circle_center - Vec3::new(0.55, 0.0, 0.0)).length(), 0.0);
        assert_relative_eq!(curve.angle, 180.0, epsilon = 1e-3);
    }

    #[test]
    fn test_large_curve_geometry() {
        let positions = reference_positions();
        let (curve, _) = Curve::derive(CurveId::AbLarge, &positions, 0.0);
        assert_relative_eq!(curve.radius, 2.5, epsilon = 1e-5);
        assert_eq!(curve.circle_center, positions[2]);
        assert_relative_eq!(curve.angle, 60.0, epsilon = 1e-2);
    }

    #[test]
    fn test_zero_walking_zone_keeps_joints() {
        let positions = reference_positions();
        let (_, [start_a, start_b]) = Curve::derive(CurveId::AbLarge, &positions, 0.0);
        assert_relative_eq!((start_a - positions[0]).length(), 0.0, epsilon = 1e-6);
        assert_relative_eq!((start_b - positions[1]).length(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_walking_zone_shrinks_angle() {
        let w = 0.25;
        let (curve, [start_a, start_b]) = Curve::derive(CurveId::AbSmall, &reference_positions(), w);
        let zone_angle = (w / 1.25_f32).to_degrees();
        assert_relative_eq!(curve.angle, 180.0 - 2.0 * zone_angle, epsilon = 1e-3);

        // Lanes stay on the circle and bulge away from joint C
        assert_relative_eq!((start_a - curve.circle_center).length(), 1.25, epsilon = 1e-5);
        assert_relative_eq!((start_b - curve.circle_center).length(), 1.25, epsilon = 1e-5);
        assert!(start_a.x > 0.55);
        assert!(start_b.x > 0.55);
    }

    #[test]
    fn test_oversized_walking_zone_is_capped() {
        let (curve, [start_a, start_b]) = Curve::derive(CurveId::AbLarge, &reference_positions(), 10.0);
        assert!(curve.angle < 0.1);
        assert!((start_a - start_b).length() < 1e-2);
    }

    #[test]
    fn test_coincident_joints_do_not_produce_nan() {
        let positions = [Vec3::ZERO, Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)];
        let (curve, lanes) = Curve::derive(CurveId::AbSmall, &positions, 0.25);
        assert_eq!(curve.radius, 0.0);
        assert!(curve.angle.is_finite());
        assert!(lanes.iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_tangent_points_along_travel() {
        let (curve, [start_a, _]) = Curve::derive(CurveId::AbSmall, &reference_positions(), 0.25);
        // A -> B on the small curve heads towards +X first
        let tangent = curve.tangent_at(start_a, sign_of_curve(JointId::A, JointId::B));
        assert!(tangent.x > 0.0);
    }
}
