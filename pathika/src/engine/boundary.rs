//! Lane boundary planes.
//!
//! A lane starts at a walking-start position `w` on a circle with center
//! `c`. Travel along the lane rotates about `c` with sign `s`, so the
//! direction of travel at `w` is the radial `w − c` turned by `90° · s`.
//! The vertical plane through `w` with that normal separates "on the arc"
//! from "still in the walking zone":
//!
//! ```text
//!   entry:   through w_near, normal  t_near   (head is on the arc)
//!   arrival: through w_far,  normal  t_far    (head walked off the far end)
//!   return:  through w_near, normal −t_near   (head walked back out)
//! ```

use glam::Vec3;

use crate::core::HalfSpace;
use crate::layout::Curve;

/// Boundary planes of one lane, for travel in one direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaneBoundaries {
    /// Crossed when the head enters the arc.
    pub entry: HalfSpace,
    /// Crossed when the head leaves the arc at the far end.
    pub arrival: HalfSpace,
    /// Crossed when the head leaves the arc back where it came from.
    pub retreat: HalfSpace,
}

impl LaneBoundaries {
    /// Boundaries for walking `curve` from `near_start` to `far_start`
    /// with rotation sign `direction`.
    pub fn new(curve: &Curve, near_start: Vec3, far_start: Vec3, direction: i32) -> Self {
        let entry = HalfSpace::new(near_start, curve.tangent_at(near_start, direction));
        let arrival = HalfSpace::new(far_start, curve.tangent_at(far_start, direction));
        Self {
            entry,
            arrival,
            retreat: entry.flipped(),
        }
    }

    /// How far past the entry plane the head is (negative before it).
    #[inline]
    pub fn entry_depth(&self, head: Vec3) -> f32 {
        self.entry.signed_distance(head)
    }

    /// Has the head walked off the far end?
    #[inline]
    pub fn arrived(&self, head: Vec3, margin: f32) -> bool {
        self.arrival.signed_distance(head) > margin
    }

    /// Has the head walked back out of the near end?
    #[inline]
    pub fn returned(&self, head: Vec3, margin: f32) -> bool {
        self.retreat.signed_distance(head) > margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{
        CurveId, JointId, JointPositions, RedirectionLayout, path_index, sign_of_curve,
    };

    fn layout() -> RedirectionLayout {
        RedirectionLayout::new(
            JointPositions::new(
                Vec3::new(0.55, 0.0, -1.25),
                Vec3::new(0.55, 0.0, 1.25),
                Vec3::new(-1.615, 0.0, 0.0),
            ),
            0.25,
        )
        .unwrap()
    }

    fn boundaries(layout: &RedirectionLayout, curve: CurveId, from: JointId) -> LaneBoundaries {
        let to = layout.curve(curve).other_end(from).unwrap();
        let near = layout.joint(from).walking_start(path_index(from, curve).unwrap());
        let far = layout.joint(to).walking_start(path_index(to, curve).unwrap());
        LaneBoundaries::new(layout.curve(curve), near, far, sign_of_curve(from, to))
    }

    #[test]
    fn test_joint_is_outside_every_lane() {
        let layout = layout();
        for curve in CurveId::ALL {
            for from in curve.end_points() {
                let planes = boundaries(&layout, curve, from);
                let joint = layout.joint(from).position;
                assert!(planes.entry_depth(joint) < 0.0, "{curve} from {from}");
                assert!(!planes.arrived(joint, 0.0), "{curve} from {from}");
            }
        }
    }

    #[test]
    fn test_arc_midpoint_is_inside_lane() {
        let layout = layout();
        for curve in CurveId::ALL {
            for from in curve.end_points() {
                let planes = boundaries(&layout, curve, from);
                let c = layout.curve(curve);
                let to = c.other_end(from).unwrap();
                let near = layout.joint(from).walking_start(path_index(from, curve).unwrap());
                let mid = c.circle_center
                    + crate::core::math::rotate_about_y(
                        near - c.circle_center,
                        sign_of_curve(from, to) as f32 * c.angle * 0.5,
                    );
                assert!(planes.entry_depth(mid) > 0.0, "{curve} from {from}");
                assert!(!planes.arrived(mid, 0.0), "{curve} from {from}");
                assert!(!planes.returned(mid, 0.0), "{curve} from {from}");
            }
        }
    }

    #[test]
    fn test_far_joint_counts_as_arrival() {
        let layout = layout();
        let planes = boundaries(&layout, CurveId::AbSmall, JointId::A);
        assert!(planes.arrived(layout.joint(JointId::B).position, 0.0));
    }

    #[test]
    fn test_entry_depth_is_distance_past_plane() {
        let layout = layout();
        let planes = boundaries(&layout, CurveId::AbSmall, JointId::A);
        let near = planes.entry.point;
        let just_inside = near + planes.entry.normal * 0.01;
        assert!((planes.entry_depth(just_inside) - 0.01).abs() < 1e-5);
        assert!(!planes.returned(just_inside, 0.0));
        assert!(planes.returned(near - planes.entry.normal * 0.01, 0.0));
    }
}
