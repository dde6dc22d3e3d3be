//! Unified configuration loading for Pathika.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pathika::config::PathikaConfig;
//!
//! // Load from default path (configs/pathika.yaml)
//! let config = PathikaConfig::load_default()?;
//!
//! // Build the layout and the engine
//! let layout = config.build_layout()?;
//! let mut engine = RedirectionEngine::new(config.engine_config());
//! engine.load_layout(layout)?;
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`LayoutSection`] | Joints, walking zone, start joint, initial paths |
//! | [`EngineConfig`](crate::engine::EngineConfig) | Degenerate-geometry epsilon, lane entry margin |
//! | [`PersistenceSection`] | Where the layout file lives |
//!
//! ## Example YAML
//!
//! ```yaml
//! layout:
//!   walking_zone_radius: 0.25
//!   start_joint: A
//!   tracking_space:
//!     side_length: 4.0
//!     safety_distance: 0.2
//!   default_gain: 2.0
//!   paths:
//!     - { from: 0, curve: AbSmall }
//!     - { from: 1, curve: BcLarge, gain: 3.0 }
//!
//! engine:
//!   degenerate_epsilon: 1.0e-4
//!   lane_entry_margin: 0.0
//!
//! persistence:
//!   layout_path: layouts/layout.yaml
//! ```

mod defaults;
mod error;
mod layout;
mod pathika;
mod persistence;

// Re-export main types
pub use error::ConfigLoadError;
pub use pathika::PathikaConfig;

// Re-export section types
pub use layout::{LayoutSection, PathStep};
pub use persistence::PersistenceSection;
