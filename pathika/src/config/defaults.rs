//! Default value functions for serde deserialization.

use glam::Vec3;

use crate::layout::{JointId, JointPositions};

pub fn walking_zone_radius() -> f32 {
    0.25
}

pub fn start_joint() -> JointId {
    JointId::A
}

pub fn gain() -> f32 {
    2.0
}

pub fn layout_path() -> String {
    "layouts/layout.yaml".to_string()
}

/// Joints used when neither explicit joints nor a tracking space are given.
pub fn joint_positions() -> JointPositions {
    JointPositions::new(
        Vec3::new(0.55, 0.0, -1.25),
        Vec3::new(0.55, 0.0, 1.25),
        Vec3::new(-1.615, 0.0, 0.0),
    )
}
