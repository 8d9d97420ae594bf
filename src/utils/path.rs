//! Filesystem path helpers.

use std::path::{Component, Path, PathBuf};

/// Absolute form of `path`.
///
/// Canonicalizes when the path exists, otherwise joins a relative path
/// onto the current directory without touching the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Drop `.` components: `./js/main.js` becomes `js/main.js`.
pub fn strip_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}
