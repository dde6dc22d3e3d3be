//! The redirection layout: fixed real geometry plus the growing virtual graph.

use glam::Vec3;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::curve::Curve;
use super::error::{LayoutError, Result};
use super::ids::{CurveId, IntersectionId, JointId, LaneSlot, PathId};
use super::intersection::VirtualIntersection;
use super::joint::{JointPoint, JointPositions};
use super::path::VirtualPath;
use super::topology::{corresponding_end_joint, curve_at, path_index, sign_of_curve};
use super::tracking_space::TrackingSpace;
use crate::core::math::{DEGENERATE_LENGTH, planar, rotate_about_y, safe_unit};

/// Aggregate root of a redirection layout.
///
/// Owns the three joints and six curves of the tracking space, and the
/// append-only arena of virtual intersections and paths. All references
/// between records are ids.
///
/// # Example
/// ```
/// use glam::Vec3;
/// use pathika::layout::{CurveId, JointId, JointPositions, RedirectionLayout};
///
/// let joints = JointPositions::new(
///     Vec3::new(0.55, 0.0, -1.25),
///     Vec3::new(0.55, 0.0, 1.25),
///     Vec3::new(-1.615, 0.0, 0.0),
/// );
/// let mut layout = RedirectionLayout::new(joints, 0.25).unwrap();
/// let root = layout.set_start_joint(JointId::A);
/// let (_path, end) = layout
///     .create_path_and_intersection(root, CurveId::AbSmall, 2.0)
///     .unwrap();
/// assert_eq!(layout.intersection(end).unwrap().joint, JointId::B);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RedirectionLayout {
    walking_zone_radius: f32,
    joints: [JointPoint; 3],
    curves: [Curve; 6],
    start_joint: Option<JointId>,
    intersections: Vec<VirtualIntersection>,
    paths: Vec<VirtualPath>,
}

impl RedirectionLayout {
    /// Build the joints and all six curves.
    ///
    /// Each curve writes its walking-start positions into the lane slots of
    /// its two joints. The virtual graph starts empty; call
    /// [`set_start_joint`](Self::set_start_joint) next.
    pub fn new(positions: JointPositions, walking_zone_radius: f32) -> Result<Self> {
        if !(walking_zone_radius.is_finite() && walking_zone_radius >= 0.0) {
            return Err(LayoutError::InvalidWalkingZoneRadius(walking_zone_radius));
        }
        for joint in JointId::ALL {
            if !positions.get(joint).is_finite() {
                return Err(LayoutError::InvalidJointPosition(joint));
            }
        }

        let joint_positions = positions.as_array();
        let mut joints =
            JointId::ALL.map(|id| JointPoint::new(id, positions.get(id), walking_zone_radius));

        let curves = CurveId::ALL.map(|id| {
            let (curve, lanes) = Curve::derive(id, &joint_positions, walking_zone_radius);
            for (end, lane) in curve.end_points.into_iter().zip(lanes) {
                if let Some(slot) = path_index(end, id) {
                    joints[end.index()].walking_start_positions[slot.index()] = lane;
                }
            }
            curve
        });

        for curve in &curves {
            debug!(
                "[Layout] {}: center=({:.3}, {:.3}), radius={:.3}, angle={:.2}°",
                curve.id, curve.circle_center.x, curve.circle_center.z, curve.radius, curve.angle
            );
        }

        Ok(Self {
            walking_zone_radius,
            joints,
            curves,
            start_joint: None,
            intersections: Vec::new(),
            paths: Vec::new(),
        })
    }

    /// Build a layout with joints derived from a square tracking space.
    pub fn from_tracking_space(
        side_length: f32,
        safety_distance: f32,
        walking_zone_radius: f32,
    ) -> Result<Self> {
        let space = TrackingSpace::new(side_length).with_safety_distance(safety_distance);
        Self::new(space.joint_positions()?, walking_zone_radius)
    }

    /// Discard the virtual graph and start over from `joint`.
    ///
    /// The new root intersection copies the joint's position and lanes.
    pub fn set_start_joint(&mut self, joint: JointId) -> IntersectionId {
        self.intersections.clear();
        self.paths.clear();

        let root = IntersectionId::new(0);
        self.intersections
            .push(VirtualIntersection::root(root, &self.joints[joint.index()]));
        self.start_joint = Some(joint);

        info!("[Layout] Start joint set to {}", joint);
        root
    }

    /// Grow the virtual graph by one path and one intersection.
    ///
    /// The path leaves `intersection` along `curve`, scaled by `gain`: its
    /// radius is `curve.radius * gain` and its angle keeps the real arc
    /// length. A new intersection, bound to the curve's other joint, sits one
    /// walking-zone radius further along the circle; its arrival lane ends
    /// the path and its other lanes keep that joint's lane angles.
    ///
    /// Fails without touching the layout if the intersection is unknown,
    /// the curve does not touch its joint, the slot is taken, or the gain is
    /// not a positive number.
    pub fn create_path_and_intersection(
        &mut self,
        intersection: IntersectionId,
        curve: CurveId,
        gain: f32,
    ) -> Result<(PathId, IntersectionId)> {
        if !(gain.is_finite() && gain > 0.0) {
            warn!("[Layout] Rejected gain {} for {}", gain, curve);
            return Err(LayoutError::InvalidGain(gain));
        }

        let start = self
            .intersections
            .get(intersection.index())
            .ok_or(LayoutError::UnknownIntersection(intersection))?;
        let joint_id = start.joint;
        let not_incident = LayoutError::CurveNotIncident {
            curve,
            joint: joint_id,
        };
        let slot = path_index(joint_id, curve).ok_or_else(|| not_incident.clone())?;
        let end_joint_id = corresponding_end_joint(joint_id, curve).ok_or(not_incident)?;
        if let Some(existing) = start.path(slot) {
            warn!(
                "[Layout] Slot {} of {} already holds {}",
                slot, intersection, existing
            );
            return Err(LayoutError::SlotOccupied {
                intersection,
                slot,
                existing,
            });
        }

        let end_slot = slot.complement();
        let sign = sign_of_curve(joint_id, end_joint_id) as f32;
        let real = &self.curves[curve.index()];
        let joint = &self.joints[joint_id.index()];

        let radius = real.radius * gain;
        let angle = if radius > DEGENERATE_LENGTH {
            (real.angle.to_radians() * real.radius / radius).to_degrees()
        } else {
            0.0
        };

        // Same bearing towards the center as on the real curve, turned into
        // the start intersection's frame
        let start_position = start.walking_start(slot);
        let toward_center = safe_unit(
            planar(real.circle_center - joint.walking_start(slot)),
            Vec3::ZERO,
        );
        let circle_center =
            start_position + rotate_about_y(toward_center, start.frame_rotation(joint)) * radius;
        let end_position =
            circle_center + rotate_about_y(start_position - circle_center, sign * angle);

        // The walking zone continues along the same circle
        let end_joint = &self.joints[end_joint_id.index()];
        let zone_angle = if radius > DEGENERATE_LENGTH {
            (end_joint.walking_zone_radius / radius).to_degrees()
        } else {
            0.0
        };
        let position = circle_center + rotate_about_y(end_position - circle_center, sign * zone_angle);

        // Yaw a walk accumulates on arrival grows by the angle difference of the arc
        let heading_offset =
            (start.heading_offset + sign * (angle - real.angle)).rem_euclid(360.0);

        let path_id = PathId::new(self.paths.len() as u32);
        let end_id = IntersectionId::new(self.intersections.len() as u32);

        let mut end = VirtualIntersection::around(
            end_id,
            end_joint,
            position,
            end_slot,
            end_position,
            heading_offset,
        );
        end.register_path(end_slot, path_id);

        let path = VirtualPath {
            id: path_id,
            circle_center,
            radius,
            angle,
            gain,
            curve,
            end_points: [intersection, end_id],
        };

        debug!(
            "[Layout] {} on {} from {} to {}: radius={:.3}, angle={:.2}°, heading={:.2}°",
            path_id, curve, intersection, end_id, radius, angle, heading_offset
        );

        self.intersections[intersection.index()].register_path(slot, path_id);
        self.paths.push(path);
        self.intersections.push(end);

        Ok((path_id, end_id))
    }

    /// Curves still free at an intersection, in slot order.
    ///
    /// Empty for an unknown intersection.
    pub fn available_curves(&self, intersection: IntersectionId) -> Vec<CurveId> {
        let Some(node) = self.intersection(intersection) else {
            return Vec::new();
        };
        LaneSlot::ALL
            .into_iter()
            .filter(|&slot| node.is_free(slot))
            .map(|slot| curve_at(node.joint, slot))
            .collect()
    }

    /// Drop the virtual graph and the start joint; joints and curves stay.
    pub fn reset(&mut self) {
        self.intersections.clear();
        self.paths.clear();
        self.start_joint = None;
        info!("[Layout] Reset");
    }

    /// Walking-zone radius shared by all joints.
    #[inline]
    pub fn walking_zone_radius(&self) -> f32 {
        self.walking_zone_radius
    }

    /// A joint.
    #[inline]
    pub fn joint(&self, id: JointId) -> &JointPoint {
        &self.joints[id.index()]
    }

    /// All joints, indexed by [`JointId::index`].
    #[inline]
    pub fn joints(&self) -> &[JointPoint; 3] {
        &self.joints
    }

    /// A curve.
    #[inline]
    pub fn curve(&self, id: CurveId) -> &Curve {
        &self.curves[id.index()]
    }

    /// All curves, indexed by [`CurveId::index`].
    #[inline]
    pub fn curves(&self) -> &[Curve; 6] {
        &self.curves
    }

    /// An intersection, if present.
    #[inline]
    pub fn intersection(&self, id: IntersectionId) -> Option<&VirtualIntersection> {
        self.intersections.get(id.index())
    }

    /// A path, if present.
    #[inline]
    pub fn path(&self, id: PathId) -> Option<&VirtualPath> {
        self.paths.get(id.index())
    }

    /// An intersection, or [`LayoutError::UnknownIntersection`].
    pub fn require_intersection(&self, id: IntersectionId) -> Result<&VirtualIntersection> {
        self.intersection(id)
            .ok_or(LayoutError::UnknownIntersection(id))
    }

    /// A path, or [`LayoutError::UnknownPath`].
    pub fn require_path(&self, id: PathId) -> Result<&VirtualPath> {
        self.path(id).ok_or(LayoutError::UnknownPath(id))
    }

    /// All intersections in creation order.
    #[inline]
    pub fn intersections(&self) -> &[VirtualIntersection] {
        &self.intersections
    }

    /// All paths in creation order.
    #[inline]
    pub fn paths(&self) -> &[VirtualPath] {
        &self.paths
    }

    /// The joint the graph was started from.
    #[inline]
    pub fn start_joint(&self) -> Option<JointId> {
        self.start_joint
    }

    /// The root intersection, once a start joint is set.
    #[inline]
    pub fn root_intersection(&self) -> Option<IntersectionId> {
        self.start_joint
            .and_then(|_| self.intersections.first())
            .map(|node| node.id)
    }

    /// Check that every stored reference resolves and agrees with the
    /// fixed topology.
    pub fn validate(&self) -> Result<()> {
        let fail = |msg: String| -> Result<()> { Err(LayoutError::Inconsistent(msg)) };

        if !(self.walking_zone_radius.is_finite() && self.walking_zone_radius >= 0.0) {
            return Err(LayoutError::InvalidWalkingZoneRadius(self.walking_zone_radius));
        }
        for (joint, expected) in self.joints.iter().zip(JointId::ALL) {
            if joint.id != expected {
                return fail(format!("joint slot {} holds {}", expected, joint.id));
            }
        }
        for (curve, expected) in self.curves.iter().zip(CurveId::ALL) {
            if curve.id != expected || curve.end_points != expected.end_points() {
                return fail(format!("curve slot {} holds {}", expected, curve.id));
            }
        }

        match (self.start_joint, self.intersections.first()) {
            (None, None) => {
                if !self.paths.is_empty() {
                    return fail("paths without a start joint".to_string());
                }
            }
            (None, Some(_)) => return fail("intersections without a start joint".to_string()),
            (Some(joint), None) => return fail(format!("start joint {} has no root", joint)),
            (Some(joint), Some(root)) => {
                if root.joint != joint {
                    return fail(format!("root is bound to {} instead of {}", root.joint, joint));
                }
            }
        }

        for (index, node) in self.intersections.iter().enumerate() {
            if node.id.index() != index {
                return fail(format!("{} stored at index {}", node.id, index));
            }
            for (slot, path_id) in node.occupied() {
                let path = self
                    .path(path_id)
                    .ok_or(LayoutError::UnknownPath(path_id))?;
                if path.curve != curve_at(node.joint, slot) || path.other_end(node.id).is_none() {
                    return fail(format!("{} in slot {} of {} does not fit", path_id, slot, node.id));
                }
            }
        }

        for (index, path) in self.paths.iter().enumerate() {
            if path.id.index() != index {
                return fail(format!("{} stored at index {}", path.id, index));
            }
            if !(path.gain.is_finite() && path.gain > 0.0) {
                return Err(LayoutError::InvalidGain(path.gain));
            }
            if path.end_points[0] == path.end_points[1] {
                return fail(format!("{} starts and ends at {}", path.id, path.end_points[0]));
            }
            for end in path.end_points {
                let node = self.require_intersection(end)?;
                let slot = path_index(node.joint, path.curve).ok_or(LayoutError::CurveNotIncident {
                    curve: path.curve,
                    joint: node.joint,
                })?;
                if node.path(slot) != Some(path.id) {
                    return fail(format!("{} is not registered in slot {} of {}", path.id, slot, end));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{angle_between_deg, angle360};
    use approx::assert_relative_eq;

    fn reference_layout(walking_zone_radius: f32) -> RedirectionLayout {
        let joints = JointPositions::new(
            Vec3::new(0.55, 0.0, -1.25),
            Vec3::new(0.55, 0.0, 1.25),
            Vec3::new(-1.615, 0.0, 0.0),
        );
        RedirectionLayout::new(joints, walking_zone_radius).unwrap()
    }

    #[test]
    fn test_reference_curves() {
        let layout = reference_layout(0.25);
        let small = layout.curve(CurveId::AbSmall);
        assert_relative_eq!(small.radius, 1.25, epsilon = 1e-4);
        assert_relative_eq!((small.circle_center - Vec3::new(0.55, 0.0, 0.0)).length(), 0.0);

        let large = layout.curve(CurveId::AbLarge);
        assert_relative_eq!(large.radius, 2.5, epsilon = 1e-3);
        assert_eq!(large.circle_center, layout.joint(JointId::C).position);
    }

    #[test]
    fn test_lanes_start_on_walking_zone_edge() {
        let w = 0.25;
        let layout = reference_layout(w);
        for joint in layout.joints() {
            for slot in LaneSlot::ALL {
                let d = joint.lane_direction(slot).length();
                // Chord of a `w`-long arc is just under `w`
                assert!(d > w * 0.98 && d <= w + 1e-5, "{} slot {}: {}", joint.id, slot, d);
            }
        }
    }

    #[test]
    fn test_rejects_invalid_walking_zone() {
        let joints = JointPositions::new(Vec3::ZERO, Vec3::X, Vec3::Z);
        assert_eq!(
            RedirectionLayout::new(joints, -0.1),
            Err(LayoutError::InvalidWalkingZoneRadius(-0.1))
        );
        let bad = JointPositions::new(Vec3::ZERO, Vec3::splat(f32::NAN), Vec3::Z);
        assert_eq!(
            RedirectionLayout::new(bad, 0.1),
            Err(LayoutError::InvalidJointPosition(JointId::B))
        );
    }

    #[test]
    fn test_set_start_joint_resets_graph() {
        let mut layout = reference_layout(0.25);
        let root = layout.set_start_joint(JointId::A);
        layout
            .create_path_and_intersection(root, CurveId::AbSmall, 2.0)
            .unwrap();
        assert_eq!(layout.intersections().len(), 2);

        let root = layout.set_start_joint(JointId::C);
        assert_eq!(layout.intersections().len(), 1);
        assert!(layout.paths().is_empty());
        let node = layout.intersection(root).unwrap();
        assert_eq!(node.joint, JointId::C);
        assert_eq!(node.walking_start_positions, layout.joint(JointId::C).walking_start_positions);
        assert_eq!(layout.root_intersection(), Some(root));
    }

    #[test]
    fn test_create_path_scales_radius_and_keeps_arc_length() {
        let mut layout = reference_layout(0.25);
        let root = layout.set_start_joint(JointId::A);
        let (path_id, end_id) = layout
            .create_path_and_intersection(root, CurveId::AbSmall, 2.0)
            .unwrap();

        let path = layout.path(path_id).unwrap();
        let curve = layout.curve(CurveId::AbSmall);
        assert_relative_eq!(path.radius, 2.5, epsilon = 1e-4);
        assert_relative_eq!(path.arc_length(), curve.arc_length(), epsilon = 1e-4);
        assert_eq!(path.end_points, [root, end_id]);

        let end = layout.intersection(end_id).unwrap();
        assert_eq!(end.joint, JointId::B);
        assert_eq!(end.label, "1");
        assert_eq!(end.path(LaneSlot::ALL[2]), Some(path_id));
        assert_eq!(layout.intersection(root).unwrap().path(LaneSlot::ALL[1]), Some(path_id));
    }

    #[test]
    fn test_path_endpoints_lie_on_virtual_circle() {
        let mut layout = reference_layout(0.25);
        let root = layout.set_start_joint(JointId::A);
        let (path_id, end_id) = layout
            .create_path_and_intersection(root, CurveId::AbLarge, 1.5)
            .unwrap();
        let path = layout.path(path_id).unwrap();
        let start = layout.intersection(root).unwrap().walking_start(LaneSlot::ALL[0]);
        let end = layout.intersection(end_id).unwrap().walking_start(LaneSlot::ALL[3]);

        assert_relative_eq!(start.distance(path.circle_center), path.radius, epsilon = 1e-4);
        assert_relative_eq!(end.distance(path.circle_center), path.radius, epsilon = 1e-4);
        assert_relative_eq!(
            angle_between_deg(start - path.circle_center, end - path.circle_center),
            path.angle,
            epsilon = 1e-2
        );
    }

    #[test]
    fn test_heading_offset_matches_radial_rotation() {
        let mut layout = reference_layout(0.25);
        let root = layout.set_start_joint(JointId::A);
        let (path_id, end_id) = layout
            .create_path_and_intersection(root, CurveId::AbSmall, 2.0)
            .unwrap();
        let path = layout.path(path_id).unwrap();
        let end = layout.intersection(end_id).unwrap();
        let slot = LaneSlot::ALL[2];

        let curve = layout.curve(CurveId::AbSmall);
        let real_radial = layout.joint(JointId::B).walking_start(slot) - curve.circle_center;
        let virtual_radial = end.walking_start(slot) - path.circle_center;
        let measured = angle360(real_radial, virtual_radial);
        let diff = (measured - end.heading_offset).rem_euclid(360.0);
        assert!(diff < 1e-2 || diff > 360.0 - 1e-2, "{} vs {}", measured, end.heading_offset);
    }

    #[test]
    fn test_intersection_sits_past_walking_zone_on_circle() {
        let mut layout = reference_layout(0.25);
        let root = layout.set_start_joint(JointId::A);
        let (path_id, end_id) = layout
            .create_path_and_intersection(root, CurveId::AbSmall, 2.0)
            .unwrap();
        let path = layout.path(path_id).unwrap();
        let end = layout.intersection(end_id).unwrap();
        let lane_start = end.walking_start(LaneSlot::ALL[2]);

        // A to B turns clockwise
        let zone_angle = (0.25 / path.radius).to_degrees();
        let expected =
            path.circle_center + rotate_about_y(lane_start - path.circle_center, -zone_angle);
        assert_relative_eq!(end.position.x, expected.x, epsilon = 1e-4);
        assert_relative_eq!(end.position.z, expected.z, epsilon = 1e-4);
        assert_relative_eq!(end.position.distance(path.circle_center), path.radius, epsilon = 1e-4);

        let joint = layout.joint(JointId::B);
        for slot in LaneSlot::ALL {
            assert_relative_eq!(end.lane_direction(slot).length(), lane_start.distance(end.position), epsilon = 1e-4);
            assert_relative_eq!(
                angle360(end.lane_direction(LaneSlot::ALL[2]), end.lane_direction(slot)),
                angle360(joint.lane_direction(LaneSlot::ALL[2]), joint.lane_direction(slot)),
                epsilon = 1e-2
            );
        }
    }

    #[test]
    fn test_next_path_turns_with_intersection_frame() {
        let mut layout = reference_layout(0.25);
        let root = layout.set_start_joint(JointId::A);
        let (_, b) = layout
            .create_path_and_intersection(root, CurveId::AbSmall, 2.0)
            .unwrap();
        let (path_id, _) = layout
            .create_path_and_intersection(b, CurveId::BcSmall, 1.0)
            .unwrap();
        let path = layout.path(path_id).unwrap();
        let node = layout.intersection(b).unwrap();
        let joint = layout.joint(JointId::B);
        let slot = LaneSlot::ALL[1];
        let curve = layout.curve(CurveId::BcSmall);

        let real_bearing = curve.circle_center - joint.walking_start(slot);
        let virtual_bearing = path.circle_center - node.walking_start(slot);
        assert_relative_eq!(virtual_bearing.length(), path.radius, epsilon = 1e-4);
        let diff = (angle360(real_bearing, virtual_bearing) - node.frame_rotation(joint)).rem_euclid(360.0);
        assert!(diff < 1e-2 || diff > 360.0 - 1e-2, "diff {}", diff);
    }

    #[test]
    fn test_rejections_leave_layout_untouched() {
        let mut layout = reference_layout(0.25);
        let root = layout.set_start_joint(JointId::A);
        layout
            .create_path_and_intersection(root, CurveId::AbSmall, 2.0)
            .unwrap();
        let before = layout.clone();

        assert!(matches!(
            layout.create_path_and_intersection(root, CurveId::AbSmall, 3.0),
            Err(LayoutError::SlotOccupied { .. })
        ));
        assert!(matches!(
            layout.create_path_and_intersection(root, CurveId::BcSmall, 2.0),
            Err(LayoutError::CurveNotIncident { .. })
        ));
        assert!(matches!(
            layout.create_path_and_intersection(IntersectionId::new(9), CurveId::AbLarge, 2.0),
            Err(LayoutError::UnknownIntersection(_))
        ));
        assert!(matches!(
            layout.create_path_and_intersection(root, CurveId::AbLarge, 0.0),
            Err(LayoutError::InvalidGain(_))
        ));
        assert_eq!(layout, before);
    }

    #[test]
    fn test_available_curves() {
        let mut layout = reference_layout(0.25);
        let root = layout.set_start_joint(JointId::B);
        assert_eq!(
            layout.available_curves(root),
            vec![CurveId::BcLarge, CurveId::BcSmall, CurveId::AbSmall, CurveId::AbLarge]
        );
        let (_, end) = layout
            .create_path_and_intersection(root, CurveId::BcSmall, 2.0)
            .unwrap();
        assert_eq!(
            layout.available_curves(root),
            vec![CurveId::BcLarge, CurveId::AbSmall, CurveId::AbLarge]
        );
        // Joint C arrives through its slot 2 (BC small)
        assert_eq!(
            layout.available_curves(end),
            vec![CurveId::AcLarge, CurveId::AcSmall, CurveId::BcLarge]
        );
        assert!(layout.available_curves(IntersectionId::new(42)).is_empty());
    }

    #[test]
    fn test_reset_keeps_real_geometry() {
        let mut layout = reference_layout(0.25);
        let curves = layout.curves().clone();
        layout.set_start_joint(JointId::A);
        layout.reset();
        assert!(layout.intersections().is_empty());
        assert_eq!(layout.start_joint(), None);
        assert_eq!(layout.root_intersection(), None);
        assert_eq!(layout.curves(), &curves);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_validate_catches_dangling_path() {
        let mut layout = reference_layout(0.25);
        let root = layout.set_start_joint(JointId::A);
        layout
            .create_path_and_intersection(root, CurveId::AbSmall, 2.0)
            .unwrap();
        assert!(layout.validate().is_ok());

        layout.paths.clear();
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_validate_catches_loop_path() {
        let mut layout = reference_layout(0.25);
        let root = layout.set_start_joint(JointId::A);
        let (path_id, _) = layout
            .create_path_and_intersection(root, CurveId::AbSmall, 2.0)
            .unwrap();

        layout.paths[path_id.index()].end_points = [root, root];
        assert!(matches!(layout.validate(), Err(LayoutError::Inconsistent(_))));
    }

    #[test]
    fn test_validate_catches_unregistered_end() {
        let mut layout = reference_layout(0.25);
        let root = layout.set_start_joint(JointId::A);
        let (_, end_id) = layout
            .create_path_and_intersection(root, CurveId::AbSmall, 2.0)
            .unwrap();

        layout.intersections[end_id.index()].paths = [None; 4];
        assert!(matches!(layout.validate(), Err(LayoutError::Inconsistent(_))));
    }
}
