//! `name` command: show which output template a file name gets.

use anyhow::{Context, Result};
use std::path::Path;

use crate::{
    asset::{AssetInfo, AssetKind, Namer},
    cli::NameArgs,
    config::ProjectConfig,
};

/// One resolved `name` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameLine {
    pub name: Option<String>,
    pub kind: AssetKind,
    pub template: String,
}

impl std::fmt::Display for NameLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = self.name.as_deref().unwrap_or("(unnamed)");
        write!(f, "{name}\t{}\t{}", self.kind, self.template)
    }
}

/// Print `name<TAB>kind<TAB>template` for every requested name.
pub fn print_names(args: &NameArgs, config: &ProjectConfig) -> Result<()> {
    for line in resolve_names(args, config)? {
        println!("{line}");
    }
    Ok(())
}

/// Resolve templates without printing.
pub fn resolve_names(args: &NameArgs, config: &ProjectConfig) -> Result<Vec<NameLine>> {
    let namer = Namer::new(&config.build.names).context("invalid [build.names]")?;
    let entries = config.build.entry_set();
    let forced = args.kind.map(AssetKind::from);

    if args.names.is_empty() {
        let kind = forced.unwrap_or(AssetKind::Asset);
        return Ok(vec![resolve(&namer, None, kind)?]);
    }

    args.names
        .iter()
        .map(|name| {
            let kind = forced.unwrap_or_else(|| AssetKind::classify(Path::new(name), &entries));
            resolve(&namer, Some(name), kind)
        })
        .collect()
}

fn resolve(namer: &Namer, name: Option<&str>, kind: AssetKind) -> Result<NameLine> {
    // The hook only sees the bare file name
    let file_name = name.map(|n| {
        Path::new(n)
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(n)
            .to_string()
    });
    let info = AssetInfo { name: file_name };
    let template = namer.template_for(kind, &info)?;
    Ok(NameLine {
        name: name.map(str::to_string),
        kind,
        template: template.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::KindArg;

    fn args(names: &[&str], kind: Option<KindArg>) -> NameArgs {
        NameArgs {
            names: names.iter().map(|s| s.to_string()).collect(),
            kind,
        }
    }

    fn templates(lines: &[NameLine]) -> Vec<&str> {
        lines.iter().map(|l| l.template.as_str()).collect()
    }

    #[test]
    fn test_resolve_names_classifies() {
        let config = ProjectConfig::default();
        let lines = resolve_names(
            &args(
                &["logo.png", "font.woff2", "styles.css", "archive.tar.gz", "main.js", "vendor.js"],
                None,
            ),
            &config,
        )
        .unwrap();

        assert_eq!(
            templates(&lines),
            [
                "assets/img/[name]-[hash][extname]",
                "assets/fonts/[name]-[hash][extname]",
                "assets/css/[name]-[hash][extname]",
                "assets/tar/[name]-[hash][extname]",
                "assets/[name]-[hash].js",
                "assets/js/[name]-[hash].js",
            ]
        );
        assert_eq!(lines[4].kind, AssetKind::Entry);
        assert_eq!(lines[5].kind, AssetKind::Chunk);
    }

    #[test]
    fn test_resolve_unnamed() {
        let lines = resolve_names(&args(&[], None), &ProjectConfig::default()).unwrap();
        assert_eq!(templates(&lines), ["assets/[name]-[hash][extname]"]);
        assert_eq!(lines[0].to_string(), "(unnamed)\tasset\tassets/[name]-[hash][extname]");
    }

    #[test]
    fn test_forced_kind() {
        let lines =
            resolve_names(&args(&["vendor"], Some(KindArg::Chunk)), &ProjectConfig::default())
                .unwrap();
        assert_eq!(templates(&lines), ["assets/js/[name]-[hash].js"]);
    }

    #[test]
    fn test_nested_names_use_file_name() {
        let lines =
            resolve_names(&args(&["images/v1.2/logo.png"], None), &ProjectConfig::default())
                .unwrap();
        assert_eq!(templates(&lines), ["assets/img/[name]-[hash][extname]"]);
        assert_eq!(lines[0].name.as_deref(), Some("images/v1.2/logo.png"));
    }
}
