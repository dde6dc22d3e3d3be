//! Redirection engine: the per-frame state machine.
//!
//! ## States
//!
//! ```text
//!   Idle ──Ready──▶ Armed ──lane entered──▶ Redirecting
//!    ▲               ▲  ▲                        │
//!    │               │  └─────returned───────────┤
//!    └─────Stop──────┘                           │
//!                    └──arrived at far end───────┘
//! ```
//!
//! While redirecting, the head's angle around the real curve center is
//! mapped to the same arc length on the virtual path, and the rig offset
//! puts the rendered camera there. Arriving at the far end carries the
//! accumulated yaw over to the next path; walking back out does not.

mod boundary;
mod config;
mod error;
mod progress;
mod redirector;
mod state;

pub use boundary::LaneBoundaries;
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use progress::ArcProgress;
pub use redirector::RedirectionEngine;
pub use state::{EngineEvent, FrameOutput, RedirectionState, Transition};
