//! `[build.names]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build.names]
//! hash_length = 8
//! entry = "assets/[name]-[hash].js"
//! chunk = "assets/js/[name]-[hash].js"
//! # asset = "static/[name].[hash:6][extname]"   # replaces the img/fonts/<ext> split
//! ```

use serde::{Deserialize, Serialize};

use crate::asset::hash::{DEFAULT_HASH_LENGTH, MAX_HASH_LENGTH};
use crate::asset::naming::{CHUNK_FILE_NAMES, ENTRY_FILE_NAMES};
use crate::asset::template::Template;
use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamesConfig {
    /// Hex chars used for `[hash]` (1..=64).
    pub hash_length: usize,

    /// Template for entry scripts.
    pub entry: String,

    /// Template for script chunks.
    pub chunk: String,

    /// Template for every other asset; unset keeps per-extension directories.
    pub asset: Option<String>,
}

impl Default for NamesConfig {
    fn default() -> Self {
        Self {
            hash_length: DEFAULT_HASH_LENGTH,
            entry: ENTRY_FILE_NAMES.to_string(),
            chunk: CHUNK_FILE_NAMES.to_string(),
            asset: None,
        }
    }
}

pub struct NamesConfigFields {
    pub hash_length: FieldPath,
    pub entry: FieldPath,
    pub chunk: FieldPath,
    pub asset: FieldPath,
}

impl NamesConfig {
    pub const FIELDS: NamesConfigFields = NamesConfigFields {
        hash_length: FieldPath::new("build.names.hash_length"),
        entry: FieldPath::new("build.names.entry"),
        chunk: FieldPath::new("build.names.chunk"),
        asset: FieldPath::new("build.names.asset"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(1..=MAX_HASH_LENGTH).contains(&self.hash_length) {
            diag.error(
                Self::FIELDS.hash_length,
                format!(
                    "hash length {} out of range (1..={MAX_HASH_LENGTH})",
                    self.hash_length
                ),
            );
        }

        Self::validate_template(&self.entry, Self::FIELDS.entry, diag);
        Self::validate_template(&self.chunk, Self::FIELDS.chunk, diag);
        if let Some(asset) = &self.asset {
            Self::validate_template(asset, Self::FIELDS.asset, diag);
        }
    }

    fn validate_template(raw: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if let Err(e) = Template::parse(raw) {
            diag.error_with_hint(
                field,
                e.to_string(),
                "available placeholders: [name] [ext] [extname] [hash] [hash:N]",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.names, NamesConfig::default());
        assert_eq!(config.build.names.chunk, "assets/js/[name]-[hash].js");
        assert_eq!(config.build.names.entry, "assets/[name]-[hash].js");
        assert!(config.build.names.asset.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = test_parse_config(
            r#"
[build.names]
hash_length = 12
asset = "static/[name].[hash:6][extname]"
"#,
        );
        assert_eq!(config.build.names.hash_length, 12);
        assert_eq!(
            config.build.names.asset.as_deref(),
            Some("static/[name].[hash:6][extname]")
        );

        let mut diag = ConfigDiagnostics::new();
        config.build.names.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_validate_errors() {
        let names = NamesConfig {
            hash_length: 0,
            entry: "assets/[id].js".into(),
            chunk: "assets/js/app.js".into(),
            asset: Some("[hash:99]".into()),
        };
        let mut diag = ConfigDiagnostics::new();
        names.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "build.names.hash_length",
                "build.names.entry",
                "build.names.chunk",
                "build.names.asset"
            ]
        );
    }
}
