//! Output writers for leave-one-out variant files.

pub mod variant;

// Re-export main functions
pub use variant::{variant_path, write_variant};
