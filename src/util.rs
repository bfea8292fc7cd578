//! Path helpers shared by the note source and settings

use std::path::Path;

use crate::constants as C;

/// Display a path with forward slashes (cross-platform standard)
/// Converts Windows backslashes to forward slashes for consistent output
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Title derived from a path: file stem for files, folder name for folders
///
/// Relative paths like `.` are canonicalized first so they yield a real name.
pub fn path_title(path: &Path) -> String {
    let resolved = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let name = if resolved.is_dir() {
        resolved.file_name()
    } else {
        resolved.file_stem()
    };
    name.map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| C::UNTITLED_MANUSCRIPT_TITLE.to_string())
}

/// True for files carrying the Markdown extension
pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(C::MARKDOWN_EXTENSION))
}
