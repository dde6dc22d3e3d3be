//! Configuration loading errors.

use crate::layout::LayoutError;

/// Config load error
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
    /// Configured layout could not be built
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}
