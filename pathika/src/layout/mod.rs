//! Redirection layout: the real tracking-space geometry and the virtual
//! path graph grown on top of it.
//!
//! ## Key Concepts
//!
//! - **JointPoint**: one of three fixed physical locations (A, B, C)
//! - **Curve**: one of six real arcs between two joints (small or large radius)
//! - **VirtualIntersection**: a virtual node bound to a joint
//! - **VirtualPath**: a virtual arc scaled from a curve by a gain
//! - **LaneSlot**: which of the four arcs at a joint a lane belongs to
//!
//! ## Geometry
//!
//! The joints form a triangle. A small curve between two joints is a half
//! circle around their midpoint; a large curve is centered on the third
//! joint. Both bulge away from the triangle. Clockwise order A → B → C → A
//! fixes the lane slots (see [`topology`]).
//!
//! Every curve's lanes start on the edge of each joint's walking zone; the
//! walkable curve angle excludes that wedge at both ends.

mod curve;
mod error;
mod graph;
mod ids;
mod intersection;
mod joint;
mod path;
pub mod topology;
mod tracking_space;

pub use curve::Curve;
pub use error::{LayoutError, Result};
pub use graph::RedirectionLayout;
pub use ids::{CurveId, IntersectionId, JointId, LaneSlot, PathId};
pub use intersection::VirtualIntersection;
pub use joint::{JointPoint, JointPositions};
pub use path::VirtualPath;
pub use topology::{corresponding_end_joint, curve_at, path_index, sign_of_curve};
pub use tracking_space::{DEFAULT_SAFETY_DISTANCE, TrackingSpace};
