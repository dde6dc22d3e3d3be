//! Simulated walk through a configured virtual path graph.
//!
//! This example demonstrates:
//! - Loading the Pathika configuration and growing the layout it describes
//! - Driving the redirection engine with head poses that follow the real arcs
//! - Reading back the virtual pose and rig offset every frame
//!
//! # Usage
//!
//! ```bash
//! cargo run --example walk_simulation -- configs/pathika.yaml
//! ```
//!
//! Without an argument the default configuration is used, or a 4m tracking
//! space if that cannot be read. The grown layout is saved to the configured
//! layout path.

use std::path::Path;

use glam::Vec3;
use log::{info, warn};

use pathika::core::math::{planar, rotate_about_y};
use pathika::layout::{path_index, sign_of_curve};
use pathika::{
    CurveId, HeadPose, IntersectionId, JointId, PathikaConfig, RedirectionEngine,
    RedirectionLayout, Transition,
};

const HEAD_HEIGHT: f32 = 1.7;
const FRAMES_PER_METER: f32 = 60.0;

fn load_config() -> PathikaConfig {
    let loaded = match std::env::args().nth(1) {
        Some(path) => PathikaConfig::load(Path::new(&path)),
        None => PathikaConfig::load_default(),
    };
    loaded.unwrap_or_else(|e| {
        warn!("Falling back to a 4m tracking space: {}", e);
        let mut config = PathikaConfig::default();
        config.layout.tracking_space = Some(pathika::TrackingSpace::new(4.0));
        config.layout.paths = vec![pathika::config::PathStep {
            from: 0,
            curve: CurveId::AbSmall,
            gain: None,
        }];
        config.engine.arm_on_load = true;
        config
    })
}

/// Head positions along the real arc of `curve` leaving `from`, a little
/// past the far lane start.
fn arc_walk(layout: &RedirectionLayout, curve: CurveId, from: JointId) -> Vec<Vec3> {
    let real = layout.curve(curve);
    let Some(to) = real.other_end(from) else {
        return Vec::new();
    };
    let Some(slot) = path_index(from, curve) else {
        return Vec::new();
    };
    let sign = sign_of_curve(from, to) as f32;
    let radial = layout.joint(from).walking_start(slot) - real.circle_center;
    let frames = (real.arc_length() * FRAMES_PER_METER).ceil().max(1.0) as usize;
    let past = real.angle + (0.05 / real.radius).to_degrees();

    (0..=frames)
        .map(|i| {
            let angle = past * i as f32 / frames as f32;
            real.circle_center + rotate_about_y(radial, sign * angle)
        })
        .collect()
}

/// Straight steps through the walking zone.
fn zone_walk(from: Vec3, to: Vec3) -> Vec<Vec3> {
    let frames = (from.distance(to) * FRAMES_PER_METER).ceil().max(1.0) as usize;
    (1..=frames)
        .map(|i| from.lerp(to, i as f32 / frames as f32))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config();
    let layout = config.build_layout()?;
    info!(
        "Layout: {} intersections, {} paths",
        layout.intersections().len(),
        layout.paths().len()
    );

    if let Err(e) = pathika::save_layout(&layout, config.layout_path()) {
        warn!("Could not save layout: {}", e);
    }

    let mut engine = RedirectionEngine::new(config.engine_config());
    engine.load_layout(layout.clone())?;
    engine.arm();

    // Follow the first outgoing path of every intersection reached
    let start_joint = layout.start_joint().unwrap_or(JointId::A);
    let mut head = layout.joint(start_joint).position;
    let mut visited = vec![IntersectionId::new(0)];

    loop {
        let at = engine.current_intersection();
        let Some(node) = layout.intersection(at) else {
            break;
        };
        let Some((slot, path_id)) = node
            .occupied()
            .find(|(_, p)| {
                layout
                    .path(*p)
                    .and_then(|path| path.other_end(at))
                    .is_some_and(|far| !visited.contains(&far))
            })
        else {
            break;
        };
        let Some(path) = layout.path(path_id) else {
            break;
        };
        let lane_start = layout.joint(node.joint).walking_start(slot);

        let mut poses = zone_walk(head, lane_start);
        poses.extend(arc_walk(&layout, path.curve, node.joint));

        let mut arrived = false;
        for position in poses {
            let direction = planar(position - head);
            let yaw = if direction.length_squared() > 1e-8 {
                direction.x.atan2(direction.z).to_degrees()
            } else {
                0.0
            };
            head = position;

            let pose = HeadPose::from_position_yaw(Vec3::new(position.x, HEAD_HEIGHT, position.z), yaw);
            let output = engine.update(&pose)?;

            match output.transition {
                Some(Transition::PathChosen(id)) => println!("{} chosen at {}", id, at),
                Some(Transition::Arrived(id)) => {
                    let v = output.virtual_pose.position;
                    println!(
                        "Arrived at {} | virtual ({:.2}, {:.2}) | offset yaw {:.1}°",
                        id, v.x, v.z, output.offset.yaw_degrees
                    );
                    visited.push(id);
                    arrived = true;
                    break;
                }
                Some(Transition::Returned) => println!("Returned to {}", at),
                None => {}
            }
        }
        if !arrived {
            break;
        }
    }

    println!(
        "Visited {} intersections, accumulated rotation {:.1}°",
        visited.len(),
        engine.accumulated_rotation()
    );
    Ok(())
}
