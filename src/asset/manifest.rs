//! Build manifest: source file → emitted file.
//!
//! Written as `manifest.json` at the output root:
//!
//! ```json
//! {
//!   "images/logo.png": {
//!     "file": "assets/img/logo-1a2b3c4d.png",
//!     "url": "./assets/img/logo-1a2b3c4d.png",
//!     "kind": "asset",
//!     "hash": "1a2b3c4d..."
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::AssetKind;
use super::emit::Emit;

/// Manifest file name inside the output directory.
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Output path relative to the output directory
    pub file: String,
    /// `file` prefixed with the configured base
    pub url: String,
    pub kind: AssetKind,
    /// Full content hash (hex)
    pub hash: String,
}

/// Manifest keyed by `/`-separated source path, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest(BTreeMap<String, ManifestEntry>);

impl Manifest {
    /// Build from planned emits; `url_for` maps an output file to its url.
    pub fn from_emits(emits: &[Emit], url_for: impl Fn(&str) -> String) -> Self {
        let entries = emits
            .iter()
            .map(|emit| {
                let entry = ManifestEntry {
                    file: emit.file.clone(),
                    url: url_for(&emit.file),
                    kind: emit.route.kind,
                    hash: emit.hash.to_hex(),
                };
                (emit.route.key(), entry)
            })
            .collect();
        Self(entries)
    }

    pub fn get(&self, source: &str) -> Option<&ManifestEntry> {
        self.0.get(source)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write manifest '{}'", path.display()))
    }

    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest '{}'", path.display()))?;
        Ok(serde_json::from_str(&content)?)
    }
}
