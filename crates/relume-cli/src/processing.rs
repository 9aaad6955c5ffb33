//! Input/output path handling

use std::path::{Path, PathBuf};

/// File extensions the enhance command accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Check whether a path has a supported image extension.
pub fn is_supported_input(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Resolve the output path for an enhanced image.
///
/// An explicit output path wins; otherwise the result lands beside the input
/// as `<stem>_enhanced.png`.
pub fn determine_output_path(input: &Path, output: Option<PathBuf>) -> PathBuf {
    if let Some(out) = output {
        return out;
    }

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let mut path = input.to_path_buf();
    path.set_file_name(format!("{}_enhanced.png", stem));
    path
}
