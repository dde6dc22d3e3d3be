//! Redirection state machine states and frame output.

use crate::core::{HeadPose, RigOffset};
use crate::layout::{IntersectionId, PathId};

use super::progress::ArcProgress;

/// Redirection state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectionState {
    /// Not armed; the held rig offset is applied unchanged
    Idle,

    /// Waiting for the head to cross into one of the lanes of the current
    /// intersection
    Armed,

    /// Remapping the walk along a path
    Redirecting {
        /// Path being walked
        path: PathId,
        /// Rotation sign of travel about the circle centers (±1)
        direction: i32,
    },
}

impl RedirectionState {
    /// Is redirection armed or running?
    pub fn is_active(&self) -> bool {
        !matches!(self, RedirectionState::Idle)
    }

    /// Is a path being walked?
    pub fn is_redirecting(&self) -> bool {
        matches!(self, RedirectionState::Redirecting { .. })
    }

    /// State name for logging
    pub fn name(&self) -> &'static str {
        match self {
            RedirectionState::Idle => "Idle",
            RedirectionState::Armed => "Armed",
            RedirectionState::Redirecting { .. } => "Redirecting",
        }
    }
}

/// Event that can trigger state transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// The user is in place; start watching for lane crossings.
    Ready,

    /// Stop redirecting and return to Idle. The rig offset is kept.
    Stop,

    /// Return to the root intersection with an identity offset.
    Reset,
}

/// State change that happened during a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The head entered the lane of this path.
    PathChosen(PathId),

    /// The head left the path at its far end and is now at this
    /// intersection.
    Arrived(IntersectionId),

    /// The head walked back out of the lane it entered.
    Returned,
}

/// Per-frame result of [`RedirectionEngine::update`](super::RedirectionEngine::update).
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    /// State after the frame.
    pub state: RedirectionState,
    /// Where the rendered camera ends up.
    pub virtual_pose: HeadPose,
    /// Transform to apply to the camera rig's parent node.
    pub offset: RigOffset,
    /// Arc progress, when the frame was redirected.
    pub progress: Option<ArcProgress>,
    /// State change during this frame, if any.
    pub transition: Option<Transition>,
}
