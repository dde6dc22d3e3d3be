//! Layout construction errors.

use super::ids::{CurveId, IntersectionId, JointId, LaneSlot, PathId};

/// Result type alias
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised while building or validating a redirection layout.
///
/// Rejected operations leave the layout untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Intersection id not present in the layout
    #[error("Unknown intersection: {0}")]
    UnknownIntersection(IntersectionId),

    /// Path id not present in the layout
    #[error("Unknown path: {0}")]
    UnknownPath(PathId),

    /// Curve does not end at the intersection's joint
    #[error("{curve} does not touch joint {joint}")]
    CurveNotIncident {
        /// Requested curve
        curve: CurveId,
        /// Joint of the start intersection
        joint: JointId,
    },

    /// Lane slot already holds a path
    #[error("Slot {slot} of {intersection} is already taken by {existing}")]
    SlotOccupied {
        /// Start intersection
        intersection: IntersectionId,
        /// Lane slot of the requested curve
        slot: LaneSlot,
        /// Path already registered there
        existing: PathId,
    },

    /// Gain must be finite and positive
    #[error("Invalid gain: {0}")]
    InvalidGain(f32),

    /// Walking-zone radius must be finite and non-negative
    #[error("Invalid walking-zone radius: {0}")]
    InvalidWalkingZoneRadius(f32),

    /// Joint position is not finite
    #[error("Invalid position for joint {0}")]
    InvalidJointPosition(JointId),

    /// Tracking space dimensions are not usable
    #[error("Invalid tracking space: {0}")]
    InvalidTrackingSpace(String),

    /// Stored references do not line up (e.g. after loading from disk)
    #[error("Inconsistent layout: {0}")]
    Inconsistent(String),
}
