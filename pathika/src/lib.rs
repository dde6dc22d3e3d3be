//! # Pathika
//!
//! Curved-path redirected walking for room-scale virtual reality.
//!
//! ## Overview
//!
//! A user walks on three joint points (A, B, C) and the six circular arcs
//! between them inside a small tracking space. Pathika maps that walk onto an
//! arbitrarily large virtual graph of intersections and arcs by bending the
//! mapping between real and virtual pose a little every frame:
//!
//! - **Layout**: the fixed real geometry (joints, small and large curves) and
//!   the virtual path graph grown from it with per-path gains
//! - **Engine**: the per-frame state machine that picks the lane being
//!   walked, measures progress along it, and produces the rig offset
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pathika::{CurveId, HeadPose, JointId, RedirectionEngine, RedirectionLayout};
//!
//! // Joints from a 4m tracking space, 25cm walking zones
//! let mut layout = RedirectionLayout::from_tracking_space(4.0, 0.2, 0.25)?;
//! let root = layout.set_start_joint(JointId::A);
//! let (_path, b) = layout.create_path_and_intersection(root, CurveId::AbSmall, 2.0)?;
//!
//! let mut engine = RedirectionEngine::with_defaults();
//! engine.load_layout(layout)?;
//! engine.arm();
//!
//! // Every frame
//! let output = engine.update(&HeadPose::new(position, rotation))?;
//! let (rotation, translation) = output.offset.parent_transform();
//! ```
//!
//! ## Coordinate System
//!
//! - Y: up; people walk on the XZ plane
//! - Yaw: degrees about +Y, positive turns +X towards -Z
//! - Real and virtual positions share the same frame

#![warn(missing_docs)]

// Core types
pub mod core;

// Real geometry and the virtual path graph
pub mod layout;

// Per-frame redirection state machine
pub mod engine;

// Unified configuration
pub mod config;

// Persistence (save/load)
pub mod io;

// Re-export commonly used types
pub use core::{HalfSpace, HeadPose, RigOffset};

pub use layout::{
    Curve, CurveId, IntersectionId, JointId, JointPoint, JointPositions, LaneSlot, LayoutError,
    PathId, RedirectionLayout, TrackingSpace, VirtualIntersection, VirtualPath,
};

pub use engine::{
    ArcProgress, EngineConfig, EngineError, EngineEvent, FrameOutput, RedirectionEngine,
    RedirectionState, Transition,
};

pub use config::{ConfigLoadError, PathikaConfig};

pub use io::{IoError, load_layout, save_layout};
