//! Virtual-world intersections.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::ids::{IntersectionId, JointId, LaneSlot, PathId};
use super::joint::JointPoint;
use crate::core::math::{DEGENERATE_LENGTH, angle360, planar, rotate_about_y};

/// A node of the virtual path graph, bound to one physical joint.
///
/// Its four lanes keep the pairwise angles of the bound joint's lanes, so
/// lane choice and redirection math work the same in both worlds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VirtualIntersection {
    /// Identifier (index into the layout's intersection list).
    pub id: IntersectionId,
    /// Display label.
    pub label: String,
    /// Position in the virtual world.
    pub position: Vec3,
    /// The physical joint this intersection stands for.
    pub joint: JointId,
    /// Outgoing path per lane slot.
    pub paths: [Option<PathId>; 4],
    /// Where each lane begins in the virtual world.
    pub walking_start_positions: [Vec3; 4],
    /// Yaw in degrees accumulated by a walk from the root that arrives
    /// here (0 for the root).
    pub heading_offset: f32,
}

impl VirtualIntersection {
    /// Root intersection: a verbatim copy of the joint's position and lanes.
    pub fn root(id: IntersectionId, joint: &JointPoint) -> Self {
        Self {
            id,
            label: id.value().to_string(),
            position: joint.position,
            joint: joint.id,
            paths: [None; 4],
            walking_start_positions: joint.walking_start_positions,
            heading_offset: 0.0,
        }
    }

    /// Intersection at `position` whose lane `anchor_slot` starts at
    /// `anchor_start`.
    ///
    /// The other three lanes are the anchor lane turned about `position` by
    /// the angles between the joint's own lanes, so they share its length.
    pub fn around(
        id: IntersectionId,
        joint: &JointPoint,
        position: Vec3,
        anchor_slot: LaneSlot,
        anchor_start: Vec3,
        heading_offset: f32,
    ) -> Self {
        let anchor = anchor_start - position;
        let reference = joint.lane_direction(anchor_slot);
        let walking_start_positions = LaneSlot::ALL.map(|slot| {
            if slot == anchor_slot {
                anchor_start
            } else {
                position + rotate_about_y(anchor, angle360(reference, joint.lane_direction(slot)))
            }
        });

        Self {
            id,
            label: id.value().to_string(),
            position,
            joint: joint.id,
            paths: [None; 4],
            walking_start_positions,
            heading_offset,
        }
    }

    /// Yaw in degrees that turns the joint's lanes onto this intersection's
    /// lanes, measured on the first occupied slot.
    ///
    /// Falls back to `heading_offset` when nothing is registered yet or the
    /// lanes have no length (zero walking zone).
    pub fn frame_rotation(&self, joint: &JointPoint) -> f32 {
        self.occupied()
            .map(|(slot, _)| (joint.lane_direction(slot), self.lane_direction(slot)))
            .find(|(real, virt)| {
                planar(*real).length() > DEGENERATE_LENGTH && planar(*virt).length() > DEGENERATE_LENGTH
            })
            .map_or(self.heading_offset, |(real, virt)| angle360(real, virt))
    }

    /// Path registered in a slot.
    #[inline]
    pub fn path(&self, slot: LaneSlot) -> Option<PathId> {
        self.paths[slot.index()]
    }

    /// Is the slot still free?
    #[inline]
    pub fn is_free(&self, slot: LaneSlot) -> bool {
        self.paths[slot.index()].is_none()
    }

    /// Occupied slots with their paths, in slot order.
    pub fn occupied(&self) -> impl Iterator<Item = (LaneSlot, PathId)> + '_ {
        LaneSlot::ALL
            .into_iter()
            .filter_map(|slot| self.path(slot).map(|path| (slot, path)))
    }

    /// Walking-start position of a lane.
    #[inline]
    pub fn walking_start(&self, slot: LaneSlot) -> Vec3 {
        self.walking_start_positions[slot.index()]
    }

    /// Vector from the intersection to the start of a lane.
    #[inline]
    pub fn lane_direction(&self, slot: LaneSlot) -> Vec3 {
        self.walking_start(slot) - self.position
    }

    /// Register a path in a slot. First writer wins: returns `false` and
    /// leaves the slot untouched if it is already taken.
    pub fn register_path(&mut self, slot: LaneSlot, path: PathId) -> bool {
        match self.paths[slot.index()] {
            Some(_) => false,
            None => {
                self.paths[slot.index()] = Some(path);
                true
            }
        }
    }
}
