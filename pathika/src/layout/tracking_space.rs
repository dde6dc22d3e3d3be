//! Joint placement derived from a square tracking space.
//!
//! The three joints sit on an equilateral triangle whose small curves are
//! inscribed in the tracking space:
//!
//! ```text
//!   r = √3 / (√3 + 1) · s/2      small radius
//!   R = 2r                        large radius (triangle side)
//!   h = R/2 · √3                  triangle height
//!
//!   A = (s/2 − r − safety,     0, −r)
//!   B = (s/2 − r − safety,     0,  r)
//!   C = (s/2 − r − h − safety, 0,  0)
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::error::{LayoutError, Result};
use super::joint::JointPositions;

/// Default clearance between the outer arcs and the tracking-space edge.
pub const DEFAULT_SAFETY_DISTANCE: f32 = 0.2;

/// Square tracking area centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackingSpace {
    /// Side length in meters.
    pub side_length: f32,
    /// Margin kept from the edge, in meters.
    #[serde(default = "default_safety_distance")]
    pub safety_distance: f32,
}

fn default_safety_distance() -> f32 {
    DEFAULT_SAFETY_DISTANCE
}

impl TrackingSpace {
    /// Create a tracking space with the default safety distance.
    pub fn new(side_length: f32) -> Self {
        Self {
            side_length,
            safety_distance: DEFAULT_SAFETY_DISTANCE,
        }
    }

    /// Override the safety distance.
    pub fn with_safety_distance(mut self, safety_distance: f32) -> Self {
        self.safety_distance = safety_distance;
        self
    }

    /// Radius of the small curves.
    #[inline]
    pub fn small_radius(&self) -> f32 {
        let sqrt3 = 3f32.sqrt();
        sqrt3 / (sqrt3 + 1.0) * (self.side_length * 0.5)
    }

    /// Radius of the large curves (the triangle side).
    #[inline]
    pub fn large_radius(&self) -> f32 {
        2.0 * self.small_radius()
    }

    /// Joint positions for this tracking space.
    pub fn joint_positions(&self) -> Result<JointPositions> {
        if !(self.side_length.is_finite() && self.side_length > 0.0) {
            return Err(LayoutError::InvalidTrackingSpace(format!(
                "side length {} must be positive",
                self.side_length
            )));
        }
        if !(self.safety_distance.is_finite() && self.safety_distance >= 0.0) {
            return Err(LayoutError::InvalidTrackingSpace(format!(
                "safety distance {} must be non-negative",
                self.safety_distance
            )));
        }

        let half = self.side_length * 0.5;
        let small = self.small_radius();
        let height = self.large_radius() * 0.5 * 3f32.sqrt();
        let x = half - small - self.safety_distance;

        Ok(JointPositions::new(
            Vec3::new(x, 0.0, -small),
            Vec3::new(x, 0.0, small),
            Vec3::new(x - height, 0.0, 0.0),
        ))
    }
}
