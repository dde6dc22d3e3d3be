//! Persistence configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Persistence settings section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersistenceSection {
    /// Where the built layout is saved and loaded
    #[serde(default = "defaults::layout_path")]
    pub layout_path: String,
}

impl Default for PersistenceSection {
    fn default() -> Self {
        Self {
            layout_path: defaults::layout_path(),
        }
    }
}
