//! Progress along a lane and the matching virtual position.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::math::{DEGENERATE_LENGTH, angle_between_rad, planar, rotate_about_y, safe_unit};
use crate::layout::{Curve, VirtualPath};

/// How far the head has walked along the current lane.
///
/// The real walk is measured as the angle about the curve center between
/// the lane start and the head; the virtual walk covers the same arc
/// length on the larger (or smaller) virtual circle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArcProgress {
    /// Angle walked on the real curve (radians).
    pub angle_walked_real: f32,
    /// Angle walked on the virtual path (radians).
    pub angle_walked_virtual: f32,
    /// Arc length walked (meters).
    pub walked_distance: f32,
    /// Distance from the real arc, positive outwards (meters).
    pub side_drift: f32,
    /// Ground-plane distance from the head to the curve center (meters).
    pub distance: f32,
}

impl ArcProgress {
    /// Measure progress for a head at `head` on a lane starting at
    /// `lane_start` on `curve`, mapped onto `path`.
    ///
    /// Heads within `epsilon` of the curve center report zero angular
    /// displacement.
    pub fn measure(
        curve: &Curve,
        path: &VirtualPath,
        lane_start: Vec3,
        head: Vec3,
        epsilon: f32,
    ) -> Self {
        let radial = planar(head - curve.circle_center);
        let distance = radial.length();

        let angle_walked_real = if distance <= epsilon {
            0.0
        } else {
            angle_between_rad(planar(lane_start - curve.circle_center), radial)
        };
        let walked_distance = angle_walked_real * curve.radius;
        let angle_walked_virtual = if path.radius > DEGENERATE_LENGTH {
            walked_distance / path.radius
        } else {
            0.0
        };

        Self {
            angle_walked_real,
            angle_walked_virtual,
            walked_distance,
            side_drift: distance - curve.radius,
            distance,
        }
    }

    /// Yaw correction accrued on this lane, in degrees.
    #[inline]
    pub fn yaw_correction(&self, direction: i32) -> f32 {
        direction as f32 * -(self.angle_walked_real - self.angle_walked_virtual).to_degrees()
    }

    /// Virtual head position on `path`, for a lane whose virtual start is
    /// `virtual_lane_start`. Height is taken from `head_height`.
    pub fn virtual_position(
        &self,
        path: &VirtualPath,
        virtual_lane_start: Vec3,
        direction: i32,
        head_height: f32,
    ) -> Vec3 {
        let start_dir = safe_unit(planar(virtual_lane_start - path.circle_center), Vec3::ZERO);
        let dir = rotate_about_y(start_dir, direction as f32 * self.angle_walked_virtual.to_degrees());
        let reach = (path.radius + self.side_drift).max(0.0);

        let mut position = planar(path.circle_center) + dir * reach;
        position.y = head_height;
        position
    }
}
