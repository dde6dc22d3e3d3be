//! Redirection engine errors.

use crate::layout::LayoutError;

/// Result type alias
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors returned by the redirection engine.
///
/// Degenerate geometry is never an error; it is clamped instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// No layout loaded yet
    #[error("No layout loaded")]
    NoLayout,

    /// Layout has no start joint, so there is nowhere to begin
    #[error("Layout has no start intersection")]
    NoStartIntersection,

    /// Head pose contains NaN or infinity
    #[error("Head pose is not finite")]
    NonFinitePose,

    /// Layout references do not resolve
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}
