//! Redirection engine configuration.

use serde::{Deserialize, Serialize};

/// Redirection engine configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Head positions closer than this to the curve center (meters) count
    /// as zero angular displacement.
    #[serde(default = "default_degenerate_epsilon")]
    pub degenerate_epsilon: f32,

    /// Distance past a lane boundary required before it counts as crossed
    /// (meters).
    #[serde(default)]
    pub lane_entry_margin: f32,

    /// Arm the engine as soon as a layout is loaded.
    #[serde(default)]
    pub arm_on_load: bool,
}

fn default_degenerate_epsilon() -> f32 {
    1e-4
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            degenerate_epsilon: default_degenerate_epsilon(),
            lane_entry_margin: 0.0,
            arm_on_load: false,
        }
    }
}
