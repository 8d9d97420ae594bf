//! Asset emission with side effects (hashing, copying).

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use thiserror::Error;

use super::hash::ContentHash;
use super::namer::Namer;
use super::template::TemplateError;
use super::AssetRoute;

/// Errors raised while emitting assets.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read `{0}`")]
    Hash(PathBuf, #[source] io::Error),

    #[error("cannot name `{0}`")]
    Template(PathBuf, #[source] TemplateError),

    #[error("output conflict: `{first}` and `{second}` both emit `{output}`")]
    OutputConflict {
        output: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] io::Error),
}

/// A route with its resolved output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emit {
    pub route: AssetRoute,
    /// Output path relative to the output directory, `/`-separated
    pub file: String,
    pub hash: ContentHash,
}

/// Hash every route and render its output path (parallel, order kept).
pub fn plan(routes: Vec<AssetRoute>, namer: &Namer) -> Result<Vec<Emit>, BuildError> {
    routes
        .into_par_iter()
        .map(|route| {
            let hash = ContentHash::of_file(&route.source)
                .map_err(|e| BuildError::Hash(route.source.clone(), e))?;
            let file = namer
                .render(&route, hash)
                .map_err(|e| BuildError::Template(route.relative.clone(), e))?;
            Ok(Emit { route, file, hash })
        })
        .collect()
}

/// Pick the emits that need writing.
///
/// Sources with identical content and name share one output file.
/// Different content rendering to the same path is a conflict.
pub fn dedupe(emits: &[Emit]) -> Result<Vec<&Emit>, BuildError> {
    let mut seen: FxHashMap<&str, &Emit> = FxHashMap::default();
    let mut unique = Vec::with_capacity(emits.len());

    for emit in emits {
        match seen.get(emit.file.as_str()) {
            Some(prev) if prev.hash == emit.hash => continue,
            Some(prev) => {
                return Err(BuildError::OutputConflict {
                    output: emit.file.clone(),
                    first: prev.route.relative.clone(),
                    second: emit.route.relative.clone(),
                });
            }
            None => {
                seen.insert(&emit.file, emit);
                unique.push(emit);
            }
        }
    }

    Ok(unique)
}

/// Copy one emit into `output_dir`.
pub fn write(emit: &Emit, output_dir: &Path) -> Result<PathBuf, BuildError> {
    let output = output_dir.join(&emit.file);
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|e| BuildError::Write(parent.to_path_buf(), e))?;
    }
    fs::copy(&emit.route.source, &output).map_err(|e| BuildError::Write(output.clone(), e))?;
    Ok(output)
}
