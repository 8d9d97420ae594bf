//! Configured output naming: picks and renders the template for a route.

use std::borrow::Cow;

use super::hash::{ContentHash, MAX_HASH_LENGTH};
use super::naming::{AssetInfo, asset_file_names};
use super::template::{FileParts, Template, TemplateError};
use super::{AssetKind, AssetRoute};
use crate::config::NamesConfig;

/// Parsed `[build.names]` templates.
#[derive(Debug, Clone)]
pub struct Namer {
    entry: Template,
    chunk: Template,
    /// Replaces the per-extension asset directories when set.
    asset: Option<Template>,
    hash_length: usize,
}

impl Namer {
    pub fn new(names: &NamesConfig) -> Result<Self, TemplateError> {
        if !(1..=MAX_HASH_LENGTH).contains(&names.hash_length) {
            return Err(TemplateError::HashLength(names.hash_length));
        }
        Ok(Self {
            entry: Template::parse(&names.entry)?,
            chunk: Template::parse(&names.chunk)?,
            asset: names.asset.as_deref().map(Template::parse).transpose()?,
            hash_length: names.hash_length,
        })
    }

    /// Template for a file of `kind`.
    pub fn template_for(
        &self,
        kind: AssetKind,
        info: &AssetInfo,
    ) -> Result<Cow<'_, Template>, TemplateError> {
        match (kind, &self.asset) {
            (AssetKind::Entry, _) => Ok(Cow::Borrowed(&self.entry)),
            (AssetKind::Chunk, _) => Ok(Cow::Borrowed(&self.chunk)),
            (AssetKind::Asset, Some(asset)) => Ok(Cow::Borrowed(asset)),
            (AssetKind::Asset, None) => Template::parse(&asset_file_names(info)).map(Cow::Owned),
        }
    }

    /// Output path of `route` relative to the output directory.
    pub fn render(&self, route: &AssetRoute, hash: ContentHash) -> Result<String, TemplateError> {
        let info = route.info();
        let template = self.template_for(route.kind, &info)?;
        template.render(FileParts::from_file_name(info.name()), hash, self.hash_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn route(relative: &str, kind: AssetKind) -> AssetRoute {
        AssetRoute {
            source: PathBuf::from("/src").join(relative),
            relative: PathBuf::from(relative),
            kind,
        }
    }

    #[test]
    fn test_default_templates() {
        let namer = Namer::new(&NamesConfig::default()).unwrap();
        let logo = AssetInfo::new("logo.png");

        assert_eq!(
            namer.template_for(AssetKind::Asset, &logo).unwrap().as_str(),
            "assets/img/[name]-[hash][extname]"
        );
        assert_eq!(
            namer.template_for(AssetKind::Chunk, &logo).unwrap().as_str(),
            "assets/js/[name]-[hash].js"
        );
        assert_eq!(
            namer.template_for(AssetKind::Entry, &logo).unwrap().as_str(),
            "assets/[name]-[hash].js"
        );
    }

    #[test]
    fn test_render_uses_file_name_only() {
        let namer = Namer::new(&NamesConfig::default()).unwrap();
        let hash = ContentHash::of_bytes("x");
        let h = hash.fingerprint(8);

        let out = namer
            .render(&route("images/icons/logo.png", AssetKind::Asset), hash)
            .unwrap();
        assert_eq!(out, format!("assets/img/logo-{h}.png"));

        let out = namer
            .render(&route("lib/vendor.js", AssetKind::Chunk), hash)
            .unwrap();
        assert_eq!(out, format!("assets/js/vendor-{h}.js"));

        let out = namer.render(&route("main.js", AssetKind::Entry), hash).unwrap();
        assert_eq!(out, format!("assets/main-{h}.js"));
    }

    #[test]
    fn test_asset_override_and_hash_length() {
        let names = NamesConfig {
            hash_length: 12,
            asset: Some("static/[name].[hash][extname]".into()),
            ..Default::default()
        };
        let namer = Namer::new(&names).unwrap();
        let hash = ContentHash::of_bytes("y");

        let out = namer
            .render(&route("fonts/inter.woff2", AssetKind::Asset), hash)
            .unwrap();
        assert_eq!(out, format!("static/inter.{}.woff2", hash.fingerprint(12)));
    }

    #[test]
    fn test_invalid_names_config() {
        let names = NamesConfig {
            hash_length: 0,
            ..Default::default()
        };
        assert_eq!(Namer::new(&names).unwrap_err(), TemplateError::HashLength(0));

        let names = NamesConfig {
            chunk: "js/[chunk].js".into(),
            ..Default::default()
        };
        assert!(matches!(
            Namer::new(&names),
            Err(TemplateError::UnknownPlaceholder(_))
        ));
    }
}
