//! Test utilities for Pathika integration tests.
//!
//! Provides a reference layout and head-pose generators that walk the real
//! arcs and walking zones.

#![allow(dead_code)]

use glam::Vec3;
use pathika::core::math::rotate_about_y;
use pathika::{
    CurveId, HeadPose, IntersectionId, JointId, JointPositions, RedirectionLayout,
    layout::{path_index, sign_of_curve},
};

/// Eye height used by all generated poses.
pub const HEAD_HEIGHT: f32 = 1.7;

/// Walking-zone radius of the reference layout.
pub const WALKING_ZONE: f32 = 0.25;

/// Arc length walked past the far lane start to trigger arrival.
pub const OVERSHOOT: f32 = 0.02;

/// Joints A=(0.55, 0, -1.25), B=(0.55, 0, 1.25), C=(-1.615, 0, 0).
pub fn reference_joints() -> JointPositions {
    JointPositions::new(
        Vec3::new(0.55, 0.0, -1.25),
        Vec3::new(0.55, 0.0, 1.25),
        Vec3::new(-1.615, 0.0, 0.0),
    )
}

/// Reference joints with the default walking zone, no start joint.
pub fn reference_layout() -> RedirectionLayout {
    RedirectionLayout::new(reference_joints(), WALKING_ZONE).unwrap()
}

/// Reference layout started at `start`, with the given chain of
/// (curve, gain) steps each leaving from the previous new intersection.
pub fn chained_layout(start: JointId, steps: &[(CurveId, f32)]) -> RedirectionLayout {
    let mut layout = reference_layout();
    let mut at: IntersectionId = layout.set_start_joint(start);
    for &(curve, gain) in steps {
        let (_, end) = layout.create_path_and_intersection(at, curve, gain).unwrap();
        at = end;
    }
    layout
}

/// Level head pose at `position` (height replaced) facing `yaw` degrees.
pub fn head_at(position: Vec3, yaw: f32) -> HeadPose {
    HeadPose::from_position_yaw(Vec3::new(position.x, HEAD_HEIGHT, position.z), yaw)
}

/// Head positions sweeping the real `curve` from joint `from`: lane start
/// to far lane start in `steps` equal steps, then [`OVERSHOOT`] further.
pub fn arc_sweep(layout: &RedirectionLayout, curve: CurveId, from: JointId, steps: usize) -> Vec<Vec3> {
    let real = layout.curve(curve);
    let to = real.other_end(from).unwrap();
    let sign = sign_of_curve(from, to) as f32;
    let start = layout.joint(from).walking_start(path_index(from, curve).unwrap());
    let radial = start - real.circle_center;

    let mut points: Vec<Vec3> = (0..=steps)
        .map(|i| {
            let angle = real.angle * i as f32 / steps as f32;
            real.circle_center + rotate_about_y(radial, sign * angle)
        })
        .collect();
    let past = real.angle + (OVERSHOOT / real.radius).to_degrees();
    points.push(real.circle_center + rotate_about_y(radial, sign * past));
    points
}

/// Straight walk from `from` to `to` in `steps` equal steps (both included).
pub fn straight_walk(from: Vec3, to: Vec3, steps: usize) -> Vec<Vec3> {
    (0..=steps)
        .map(|i| from.lerp(to, i as f32 / steps as f32))
        .collect()
}
