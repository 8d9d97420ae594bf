//! Asset kind definitions.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::utils::path::strip_cur_dir;

/// Script extensions treated as JavaScript output.
const SCRIPT_EXTENSIONS: &[&str] = &["js", "mjs", "cjs"];

/// Kind of emitted file, selects the output template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Top-level script loaded directly by the page.
    Entry,
    /// Script pulled in by another script.
    Chunk,
    /// Any non-script file (images, fonts, styles, ...).
    Asset,
}

impl AssetKind {
    pub const ALL: [Self; 3] = [Self::Entry, Self::Chunk, Self::Asset];

    /// Classify a file by its path relative to the source directory.
    ///
    /// `entries` holds paths without `.` components, see
    /// `BuildSectionConfig::entry_set`.
    pub fn classify(relative: &Path, entries: &FxHashSet<PathBuf>) -> Self {
        if !is_script(relative) {
            Self::Asset
        } else if entries.contains(&strip_cur_dir(relative)) {
            Self::Entry
        } else {
            Self::Chunk
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Chunk => "chunk",
            Self::Asset => "asset",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn is_script(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SCRIPT_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(paths: &[&str]) -> FxHashSet<PathBuf> {
        paths.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_classify() {
        let entries = entries(&["main.js"]);
        assert_eq!(AssetKind::classify(Path::new("main.js"), &entries), AssetKind::Entry);
        assert_eq!(
            AssetKind::classify(Path::new("lib/vendor.js"), &entries),
            AssetKind::Chunk
        );
        assert_eq!(AssetKind::classify(Path::new("chunk.MJS"), &entries), AssetKind::Chunk);
        assert_eq!(
            AssetKind::classify(Path::new("images/logo.png"), &entries),
            AssetKind::Asset
        );
        assert_eq!(AssetKind::classify(Path::new("LICENSE"), &entries), AssetKind::Asset);
    }

    #[test]
    fn test_non_script_entry_is_asset() {
        // Only scripts can be entries
        let entries = entries(&["index.css"]);
        assert_eq!(
            AssetKind::classify(Path::new("index.css"), &entries),
            AssetKind::Asset
        );
    }

    #[test]
    fn test_classify_ignores_cur_dir() {
        let entries = entries(&["main.js", "admin/app.js"]);
        assert_eq!(AssetKind::classify(Path::new("./main.js"), &entries), AssetKind::Entry);
        assert_eq!(
            AssetKind::classify(Path::new("admin/./app.js"), &entries),
            AssetKind::Entry
        );
    }

    #[test]
    fn test_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&AssetKind::Chunk).unwrap(), "\"chunk\"");
        assert_eq!(AssetKind::Entry.to_string(), "entry");
    }
}
