//! Output path templates.
//!
//! Supported placeholders:
//!
//! | Placeholder | `archive.tar.gz` | `logo.png` | (unnamed) |
//! |-------------|------------------|------------|-----------|
//! | `[name]`    | `archive.tar`    | `logo`     | ``        |
//! | `[ext]`     | `gz`             | `png`      | ``        |
//! | `[extname]` | `.gz`            | `.png`     | ``        |
//! | `[hash]`    | fingerprint      | fingerprint| fingerprint |
//!
//! `[hash:N]` truncates the fingerprint to `N` hex chars.

use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::hash::{ContentHash, MAX_HASH_LENGTH};

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([A-Za-z0-9_]+)(?::([0-9]+))?\]").expect("valid placeholder regex")
});

/// Template parsing and rendering errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown placeholder `{0}`")]
    UnknownPlaceholder(String),

    #[error("hash length {0} out of range (1..={MAX_HASH_LENGTH})")]
    HashLength(usize),

    #[error("template `{0}` has no `[name]` or `[hash]` placeholder")]
    Unhashed(String),

    #[error("rendered path `{0}` escapes the output directory")]
    UnsafePath(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Name,
    Ext,
    ExtName,
    Hash(Option<usize>),
}

/// Name and extension of a source file, as seen by placeholders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileParts<'a> {
    pub name: &'a str,
    pub ext: &'a str,
}

impl<'a> FileParts<'a> {
    /// Split at the last `.`; a leading dot does not start an extension.
    pub fn from_file_name(file_name: Option<&'a str>) -> Self {
        let Some(file_name) = file_name else {
            return Self::default();
        };
        match file_name.rfind('.') {
            Some(idx) if idx > 0 => Self {
                name: &file_name[..idx],
                ext: &file_name[idx + 1..],
            },
            _ => Self {
                name: file_name,
                ext: "",
            },
        }
    }
}

/// A parsed output path template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    raw: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(raw) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Literal(raw[last..whole.start()].to_string()));
            }
            last = whole.end();

            let len = caps.get(2).map(|m| m.as_str());
            let segment = match (&caps[1], len) {
                ("name", None) => Segment::Name,
                ("ext", None) => Segment::Ext,
                ("extname", None) => Segment::ExtName,
                ("hash", None) => Segment::Hash(None),
                ("hash", Some(n)) => {
                    let n: usize = n.parse().unwrap_or(usize::MAX);
                    if n == 0 || n > MAX_HASH_LENGTH {
                        return Err(TemplateError::HashLength(n));
                    }
                    Segment::Hash(Some(n))
                }
                _ => return Err(TemplateError::UnknownPlaceholder(whole.as_str().to_string())),
            };
            segments.push(segment);
        }

        if last < raw.len() {
            segments.push(Segment::Literal(raw[last..].to_string()));
        }

        let template = Self {
            raw: raw.to_string(),
            segments,
        };
        if !template.is_distinct() {
            return Err(TemplateError::Unhashed(raw.to_string()));
        }
        Ok(template)
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether two different sources can render to different paths.
    fn is_distinct(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Name | Segment::Hash(_)))
    }

    /// Expand placeholders into a path relative to the output directory.
    pub fn render(
        &self,
        parts: FileParts<'_>,
        hash: ContentHash,
        hash_length: usize,
    ) -> Result<String, TemplateError> {
        let mut out = String::with_capacity(self.raw.len() + hash_length);
        for segment in &self.segments {
            match segment {
                Segment::Literal(s) => out.push_str(s),
                Segment::Name => out.push_str(parts.name),
                Segment::Ext => out.push_str(parts.ext),
                Segment::ExtName => {
                    if !parts.ext.is_empty() {
                        out.push('.');
                        out.push_str(parts.ext);
                    }
                }
                Segment::Hash(len) => out.push_str(&hash.fingerprint(len.unwrap_or(hash_length))),
            }
        }

        if !is_contained(&out) {
            return Err(TemplateError::UnsafePath(out));
        }
        Ok(out)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Relative, non-empty, and free of `..` components.
fn is_contained(rendered: &str) -> bool {
    let path = Path::new(rendered);
    path.file_name().is_some()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

// ============================================================================
// Tests
// ============================================================================
