//! Layout configuration section.

use serde::{Deserialize, Serialize};

use crate::layout::{
    CurveId, IntersectionId, JointId, JointPositions, LayoutError, RedirectionLayout,
    TrackingSpace,
};

use super::defaults;

/// One `create_path_and_intersection` step, applied in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathStep {
    /// Start intersection (0 is the root).
    pub from: u32,
    /// Curve to follow.
    pub curve: CurveId,
    /// Gain; the section's `default_gain` when omitted.
    #[serde(default)]
    pub gain: Option<f32>,
}

/// Layout settings section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutSection {
    /// Walking-zone radius around each joint (meters)
    #[serde(default = "defaults::walking_zone_radius")]
    pub walking_zone_radius: f32,

    /// Joint the virtual graph starts from
    #[serde(default = "defaults::start_joint")]
    pub start_joint: JointId,

    /// Explicit joint positions (take precedence over `tracking_space`)
    #[serde(default)]
    pub joints: Option<JointPositions>,

    /// Derive joint positions from a square tracking space
    #[serde(default)]
    pub tracking_space: Option<TrackingSpace>,

    /// Gain for paths that do not name one
    #[serde(default = "defaults::gain")]
    pub default_gain: f32,

    /// Paths to grow after setting the start joint
    #[serde(default)]
    pub paths: Vec<PathStep>,
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            walking_zone_radius: defaults::walking_zone_radius(),
            start_joint: defaults::start_joint(),
            joints: None,
            tracking_space: None,
            default_gain: defaults::gain(),
            paths: Vec::new(),
        }
    }
}

impl LayoutSection {
    /// Resolve the joint positions.
    pub fn joint_positions(&self) -> Result<JointPositions, LayoutError> {
        match (self.joints, self.tracking_space) {
            (Some(joints), _) => Ok(joints),
            (None, Some(space)) => space.joint_positions(),
            (None, None) => Ok(defaults::joint_positions()),
        }
    }

    /// Build the layout: joints, curves, start joint and listed paths.
    pub fn build(&self) -> Result<RedirectionLayout, LayoutError> {
        let mut layout = RedirectionLayout::new(self.joint_positions()?, self.walking_zone_radius)?;
        layout.set_start_joint(self.start_joint);
        for step in &self.paths {
            layout.create_path_and_intersection(
                IntersectionId::new(step.from),
                step.curve,
                step.gain.unwrap_or(self.default_gain),
            )?;
        }
        Ok(layout)
    }
}
