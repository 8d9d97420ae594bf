//! Project initialization.
//!
//! Writes a commented `linkdeck.toml`, an empty source directory and a
//! starter `sites.json` directory file.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::{
    config::{BuildSectionConfig, NamesConfig},
    directory::SitesConfig,
    log,
};

/// Starter directory file, next to the config.
pub const SITES_FILE: &str = "sites.json";

/// Generate `linkdeck.toml` content with comments, values from the defaults.
pub fn generate_config_template() -> String {
    let build = BuildSectionConfig::default();
    let names = NamesConfig::default();
    let entries = build
        .entries
        .iter()
        .map(|e| format!("{:?}", e.display().to_string()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"# linkdeck configuration file (v{version})

[build]
# Directory scanned for assets
source = "{source}"
# Output directory, receives the hashed files and manifest.json
output = "{output}"
# Prefix prepended to every manifest url, must end with '/'
base = "{base}"
# Entry scripts, relative to `source`
entries = [{entries}]

[build.names]
# Hex digits substituted for [hash]
hash_length = {hash_length}
# Placeholders: [name] [ext] [extname] [hash] [hash:N]
entry = "{entry}"
chunk = "{chunk}"
# Set to replace the per-extension asset directories
# asset = "assets/[name]-[hash][extname]"
"#,
        version = env!("CARGO_PKG_VERSION"),
        source = build.source.display(),
        output = build.output.display(),
        base = build.base,
        hash_length = names.hash_length,
        entry = names.entry,
        chunk = names.chunk,
    )
}

/// Create a new project around `config_path`.
///
/// Refuses to overwrite an existing config or directory file.
pub fn new_project(config_path: &Path) -> Result<()> {
    let root = config_path.parent().unwrap_or_else(|| Path::new("."));
    let sites_path = root.join(SITES_FILE);

    for path in [config_path, sites_path.as_path()] {
        if path.exists() {
            bail!("'{}' already exists, refusing to overwrite", path.display());
        }
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    write_config(config_path)?;

    let source = root.join(BuildSectionConfig::default().source);
    fs::create_dir_all(&source)
        .with_context(|| format!("Failed to create directory '{}'", source.display()))?;

    write_sites(&sites_path)?;

    log!("init"; "project initialized in {}", root.display());
    Ok(())
}

fn write_config(path: &Path) -> Result<()> {
    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}

fn write_sites(path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&SitesConfig::starter())?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write '{}'", path.display()))
}
