//! Binary/media extension filter.
//!
//! Files with one of these extensions are assumed to be non-text and are
//! never opened by the scanner, regardless of their contents.

use std::path::Path;

/// Extensions (lowercase, without the dot) that are skipped unconditionally.
const IGNORED_EXTENSIONS: &[&str] = &[
    "avif", "jpeg", "jpg", "png", "webp", "gif", "bmp", "ico", "svg", "mp4", "webm", "mov", "avi",
    "mkv", "mp3", "wav", "ogg", "pdf", "doc", "docx",
];

/// Check whether a path has a known binary/media extension.
///
/// The check is case-insensitive and performs no I/O, so it is safe to call
/// on paths that do not exist.
pub fn is_binary_path(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_lowercase();
            IGNORED_EXTENSIONS.contains(&ext.as_str())
        })
}
