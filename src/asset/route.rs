//! Asset route: source → kind mapping.

use std::path::PathBuf;

use super::{AssetInfo, AssetKind};

/// One source file found during scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRoute {
    /// Source file path (absolute)
    pub source: PathBuf,
    /// Path relative to the source directory
    pub relative: PathBuf,
    /// Output template selector
    pub kind: AssetKind,
}

impl AssetRoute {
    /// Bare file name, as the naming hook sees it.
    pub fn file_name(&self) -> Option<&str> {
        self.relative.file_name().and_then(|n| n.to_str())
    }

    pub fn info(&self) -> AssetInfo {
        AssetInfo {
            name: self.file_name().map(str::to_string),
        }
    }

    /// Manifest key: relative path with `/` separators.
    pub fn key(&self) -> String {
        self.relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
