//! YAML layout files.
//!
//! A layout file wraps the serialized [`RedirectionLayout`] with a format
//! version. References between records are stored as ids, and every load
//! runs [`RedirectionLayout::validate`].

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::layout::{LayoutError, RedirectionLayout};

/// Current layout file format version
pub const FORMAT_VERSION: u8 = 1;

/// Error type for I/O operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum IoError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(String),

    /// Not a valid layout document
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Version mismatch
    #[error("Version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Expected format version
        expected: u8,
        /// Found format version
        found: u8,
    },

    /// Document parsed but its references do not line up
    #[error("Invalid layout: {0}")]
    InvalidLayout(#[from] LayoutError),
}

#[derive(Serialize)]
struct LayoutFileRef<'a> {
    version: u8,
    layout: &'a RedirectionLayout,
}

#[derive(Deserialize)]
struct LayoutFile {
    version: u8,
    layout: RedirectionLayout,
}

/// Serialize a layout to a YAML document.
pub fn write_layout(layout: &RedirectionLayout) -> Result<String, IoError> {
    let file = LayoutFileRef {
        version: FORMAT_VERSION,
        layout,
    };
    serde_yaml::to_string(&file).map_err(|e| IoError::InvalidFormat(e.to_string()))
}

/// Parse and validate a layout from a YAML document.
pub fn read_layout(yaml: &str) -> Result<RedirectionLayout, IoError> {
    let file: LayoutFile =
        serde_yaml::from_str(yaml).map_err(|e| IoError::InvalidFormat(e.to_string()))?;
    if file.version != FORMAT_VERSION {
        return Err(IoError::VersionMismatch {
            expected: FORMAT_VERSION,
            found: file.version,
        });
    }
    file.layout.validate()?;
    Ok(file.layout)
}

/// Save a layout to a YAML file, creating parent directories.
pub fn save_layout(layout: &RedirectionLayout, path: &Path) -> Result<(), IoError> {
    let yaml = write_layout(layout)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| IoError::Io(e.to_string()))?;
    }
    std::fs::write(path, yaml).map_err(|e| IoError::Io(e.to_string()))?;

    info!(
        "[Layout] Saved {} intersections, {} paths to {}",
        layout.intersections().len(),
        layout.paths().len(),
        path.display()
    );
    Ok(())
}

/// Load a layout from a YAML file.
pub fn load_layout(path: &Path) -> Result<RedirectionLayout, IoError> {
    let yaml = std::fs::read_to_string(path).map_err(|e| IoError::Io(e.to_string()))?;
    let layout = read_layout(&yaml)?;

    info!(
        "[Layout] Loaded {} intersections, {} paths from {}",
        layout.intersections().len(),
        layout.paths().len(),
        path.display()
    );
    Ok(layout)
}
