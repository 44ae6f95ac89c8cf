//! Release matrix layer
//!
//! # Modules
//!
//! - [`builder`]: Builds the owners × versions matrix from a release source
//! - [`render`]: Text and JSON output for matrices and owner tables

pub mod builder;
pub mod render;

pub use builder::{MatrixOptions, VersionMatrix, build_matrix, owner_table, owner_versions};
pub use render::{render_json, render_table, render_text};
