//! Core types for the Pathika redirection library.
//!
//! Coordinate convention (shared by the real tracking space and the virtual
//! world):
//! - **Y-axis**: up; the walking surface is the XZ ground plane
//! - **Rotation**: positive yaw about +Y turns +X towards -Z
//! - **Angles**: degrees at API boundaries, radians only where named
//!
//! ## Type Categories
//!
//! - [`math`]: ground-plane angles, rotations and half-space tests
//! - [`HeadPose`]: per-frame pose from the host's head tracker
//! - [`RigOffset`]: corrective transform applied to the camera rig

pub mod math;
mod pose;

pub use math::HalfSpace;
pub use pose::{HeadPose, RigOffset};
