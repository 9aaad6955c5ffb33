//! Shared utilities for relume-cli
//!
//! Decode/encode glue between on-disk formats and the core's in-memory BGR
//! representation, plus argument parsing helpers shared by the commands.

pub mod convert;
pub mod parsers;
pub mod processing;

// Re-export commonly used items at the crate root for convenience
pub use convert::{load_bgr_image, save_bgr_image};
pub use parsers::parse_tile_grid;
pub use processing::{determine_output_path, SUPPORTED_EXTENSIONS};
