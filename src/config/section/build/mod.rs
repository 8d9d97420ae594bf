//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! source = "src"              # Asset source directory (relative to project root)
//! output = "dist"             # Output directory (relative to project root)
//! base = "./"                 # Public base path for manifest urls
//! entries = ["main.js"]       # Entry scripts (relative to `source`)
//!
//! [build.names]
//! hash_length = 8
//! ```
//!
//! See [`names`] for output templates.

pub mod names;

pub use names::NamesConfig;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::utils::path::strip_cur_dir;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Asset source directory.
    pub source: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Public base path prepended to emitted files in the manifest.
    /// The default `./` lets the output be served from any path.
    pub base: String,

    /// Entry scripts, relative to `source`. Other scripts are chunks.
    pub entries: Vec<PathBuf>,

    /// Clean output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,

    /// Output file name templates.
    pub names: NamesConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            source: "src".into(),
            output: "dist".into(),
            base: "./".into(),
            entries: vec!["main.js".into()],
            clean: false,
            names: NamesConfig::default(),
        }
    }
}

pub struct BuildSectionConfigFields {
    pub source: FieldPath,
    pub output: FieldPath,
    pub base: FieldPath,
    pub entries: FieldPath,
}

impl BuildSectionConfig {
    pub const FIELDS: BuildSectionConfigFields = BuildSectionConfigFields {
        source: FieldPath::new("build.source"),
        output: FieldPath::new("build.output"),
        base: FieldPath::new("build.base"),
        entries: FieldPath::new("build.entries"),
    };

    /// Join `base` and an output-relative file into a public url.
    pub fn url_for(&self, file: &str) -> String {
        format!("{}{}", self.base, file)
    }

    /// Entries as matched against scanned paths (`./main.js` == `main.js`).
    pub fn entry_set(&self) -> FxHashSet<PathBuf> {
        self.entries.iter().map(|e| strip_cur_dir(e)).collect()
    }

    // ========================================================================
    // Validation (Pre-normalization)
    // ========================================================================

    /// Validate path safety before normalization.
    ///
    /// MUST be called before paths are joined with the project root,
    /// after that an absolute entry can no longer be told apart.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        let total = self.entries.len();
        for (idx, entry) in self.entries.iter().enumerate() {
            Self::validate_path_safety(entry, idx, total, Self::FIELDS.entries, diag);
        }
    }

    /// Check a single path for unsafe components (`..` or absolute).
    fn validate_path_safety(
        path: &Path,
        idx: usize,
        total: usize,
        field: FieldPath,
        diag: &mut ConfigDiagnostics,
    ) {
        for comp in path.components() {
            let msg = match comp {
                Component::ParentDir => Some("parent directory '..' not allowed"),
                Component::Prefix(_) | Component::RootDir => Some("absolute paths not allowed"),
                _ => None,
            };
            if let Some(reason) = msg {
                // Only show index if there are multiple entries
                let prefix = if total > 1 {
                    format!("[{idx}] ")
                } else {
                    String::new()
                };
                diag.error(
                    field,
                    format!("{prefix}path '{}': {reason}", path.display()),
                );
                return;
            }
        }
    }

    // ========================================================================
    // Validation (Post-normalization)
    // ========================================================================

    pub fn validate(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        self.validate_base(diag);
        self.names.validate(diag);
        self.validate_output(root, diag);
    }

    /// `output` is wiped by `--clean`: it must not overlap the source
    /// directory or contain the project root.
    fn validate_output(&self, root: &Path, diag: &mut ConfigDiagnostics) {
        let output = &self.output;
        let reason = if output == &self.source {
            "must differ from the source directory"
        } else if self.source.starts_with(output) {
            "must not contain the source directory"
        } else if !root.as_os_str().is_empty() && root.starts_with(output) {
            "must not contain the project root"
        } else if output.starts_with(&self.source) {
            "must not be inside the source directory"
        } else {
            return;
        };
        diag.error_with_hint(
            Self::FIELDS.output,
            format!("output directory '{}' {reason}", output.display()),
            "use a sibling directory such as \"dist\"",
        );
    }

    /// Check `source` and entries exist (build command only).
    pub fn validate_sources(&self, diag: &mut ConfigDiagnostics) {
        if !self.source.is_dir() {
            diag.error_with_hint(
                Self::FIELDS.source,
                format!("'{}' is not a directory", self.source.display()),
                "set `build.source` or pass `--source`",
            );
            return;
        }

        for entry in &self.entries {
            if !self.source.join(entry).is_file() {
                diag.warn(
                    Self::FIELDS.entries,
                    format!("entry '{}' not found in source", entry.display()),
                );
            }
        }
    }

    fn validate_base(&self, diag: &mut ConfigDiagnostics) {
        let base = self.base.as_str();

        if !base.ends_with('/') {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("base '{base}' must end with '/'"),
                format!("use \"{base}/\""),
            );
            return;
        }

        let is_path = base.starts_with("./") || base.starts_with('/');
        if !is_path && url::Url::parse(base).is_err() {
            diag.error_with_hint(
                Self::FIELDS.base,
                format!("base '{base}' is neither a path nor a url"),
                "use \"./\", \"/sub/\" or \"https://cdn.example.com/\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use tempfile::TempDir;

    fn errors(diag: &ConfigDiagnostics) -> Vec<&'static str> {
        diag.errors().iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.source, PathBuf::from("src"));
        assert_eq!(config.build.output, PathBuf::from("dist"));
        assert_eq!(config.build.base, "./");
        assert_eq!(config.build.entries, vec![PathBuf::from("main.js")]);
        assert!(!config.build.clean);
    }

    #[test]
    fn test_parse_build_section() {
        let config = test_parse_config(
            r#"
[build]
source = "web"
output = "public"
base = "/deck/"
entries = ["index.js", "admin/main.js"]
"#,
        );
        assert_eq!(config.build.source, PathBuf::from("web"));
        assert_eq!(config.build.output, PathBuf::from("public"));
        assert_eq!(config.build.url_for("assets/a.js"), "/deck/assets/a.js");
        assert_eq!(config.build.entries.len(), 2);
    }

    #[test]
    fn test_validate_base() {
        for ok in ["./", "/", "/sub/dir/", "https://cdn.example.com/deck/"] {
            let build = BuildSectionConfig {
                base: ok.into(),
                ..Default::default()
            };
            let mut diag = ConfigDiagnostics::new();
            build.validate(Path::new(""), &mut diag);
            assert!(diag.is_empty(), "{ok}");
        }

        for bad in ["./sub", "deck/", ""] {
            let build = BuildSectionConfig {
                base: bad.into(),
                ..Default::default()
            };
            let mut diag = ConfigDiagnostics::new();
            build.validate(Path::new(""), &mut diag);
            assert_eq!(errors(&diag), ["build.base"], "{bad}");
        }
    }

    #[test]
    fn test_validate_same_output_and_source() {
        let build = BuildSectionConfig {
            output: "src".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate(Path::new(""), &mut diag);
        assert_eq!(errors(&diag), ["build.output"]);
    }

    #[test]
    fn test_validate_output_overlap() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        let with_output = |output: PathBuf| BuildSectionConfig {
            source: root.join("src"),
            output,
            ..Default::default()
        };

        for output in [
            root.to_path_buf(),
            root.join("src/dist"),
            root.parent().unwrap().to_path_buf(),
        ] {
            let mut diag = ConfigDiagnostics::new();
            with_output(output.clone()).validate(root, &mut diag);
            assert_eq!(errors(&diag), ["build.output"], "{}", output.display());
        }

        let mut diag = ConfigDiagnostics::new();
        with_output(root.join("dist")).validate(root, &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_entry_set_ignores_cur_dir() {
        let build = BuildSectionConfig {
            entries: vec!["./main.js".into(), "admin/./app.js".into()],
            ..Default::default()
        };
        let entries = build.entry_set();
        assert!(entries.contains(Path::new("main.js")));
        assert!(entries.contains(Path::new("admin/app.js")));
    }

    #[test]
    fn test_validate_paths_rejects_escaping_entries() {
        let build = BuildSectionConfig {
            entries: vec!["main.js".into(), "../outside.js".into(), "/abs.js".into()],
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        build.validate_paths(&mut diag);
        assert_eq!(errors(&diag), ["build.entries", "build.entries"]);
        assert!(diag.errors()[0].message.starts_with("[1] "));
    }

    #[test]
    fn test_validate_sources() {
        let dir = TempDir::new().unwrap();
        let build = BuildSectionConfig {
            source: dir.path().join("src"),
            ..Default::default()
        };

        let mut diag = ConfigDiagnostics::new();
        build.validate_sources(&mut diag);
        assert_eq!(errors(&diag), ["build.source"]);

        fs::create_dir_all(&build.source).unwrap();
        let mut diag = ConfigDiagnostics::new();
        build.validate_sources(&mut diag);
        assert!(diag.is_empty());
        // main.js is missing: warning only
        assert_eq!(diag.warnings().len(), 1);
    }
}
