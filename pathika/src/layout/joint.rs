//! Physical joint points.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::ids::{JointId, LaneSlot};

/// A fixed location in the tracking space where four real arcs meet.
///
/// Each lane (arc) begins on the edge of the joint's walking zone, at the
/// walking-start position stored in the lane's slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointPoint {
    /// Which joint this is.
    pub id: JointId,
    /// Display label ("A", "B", "C").
    pub label: String,
    /// Position in the tracking space.
    pub position: Vec3,
    /// Radius of the maneuvering area around the joint, in meters.
    pub walking_zone_radius: f32,
    /// Where each lane begins, indexed by [`LaneSlot`].
    pub walking_start_positions: [Vec3; 4],
}

impl JointPoint {
    /// Create a joint whose lanes all start at the joint itself.
    ///
    /// The walking-start positions are filled in when the curves are built.
    pub fn new(id: JointId, position: Vec3, walking_zone_radius: f32) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            position,
            walking_zone_radius,
            walking_start_positions: [position; 4],
        }
    }

    /// Walking-start position of a lane.
    #[inline]
    pub fn walking_start(&self, slot: LaneSlot) -> Vec3 {
        self.walking_start_positions[slot.index()]
    }

    /// Vector from the joint to the start of a lane.
    #[inline]
    pub fn lane_direction(&self, slot: LaneSlot) -> Vec3 {
        self.walking_start(slot) - self.position
    }
}

/// Positions of the three joints, as authored or derived from the
/// tracking space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointPositions {
    /// Joint A
    pub a: Vec3,
    /// Joint B
    pub b: Vec3,
    /// Joint C
    pub c: Vec3,
}

impl JointPositions {
    /// Create from three positions.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Position of one joint.
    #[inline]
    pub fn get(&self, joint: JointId) -> Vec3 {
        match joint {
            JointId::A => self.a,
            JointId::B => self.b,
            JointId::C => self.c,
        }
    }

    /// Positions indexed by [`JointId::index`].
    #[inline]
    pub fn as_array(&self) -> [Vec3; 3] {
        [self.a, self.b, self.c]
    }
}
