//! Layout persistence.
//!
//! Layouts are stored as versioned YAML documents:
//!
//! ```rust,ignore
//! use pathika::io::{save_layout, load_layout};
//! use std::path::Path;
//!
//! // Save layout
//! save_layout(&layout, Path::new("layouts/layout.yaml"))?;
//!
//! // Load layout (validated)
//! let layout = load_layout(Path::new("layouts/layout.yaml"))?;
//! ```

pub mod layout_file;

pub use layout_file::{FORMAT_VERSION, IoError, load_layout, read_layout, save_layout, write_layout};
