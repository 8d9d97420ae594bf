//! Asset scanning (pure, no side effects).

use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use rustc_hash::FxHashSet;

use super::{AssetKind, AssetRoute};

const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Scan the source directory for every emittable file.
///
/// Hidden entries are skipped. Results are sorted by relative path so
/// the build output and manifest are deterministic.
pub fn scan_assets(source_dir: &Path, entries: &FxHashSet<PathBuf>) -> Vec<AssetRoute> {
    let mut routes: Vec<_> = WalkDir::new(source_dir)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .filter_map(|e| {
            let source = e.path();
            let relative = source.strip_prefix(source_dir).ok()?.to_path_buf();
            let kind = AssetKind::classify(&relative, entries);
            Some(AssetRoute {
                source,
                relative,
                kind,
            })
        })
        .collect();

    routes.sort_by(|a, b| a.relative.cmp(&b.relative));
    routes
}

/// Count routes of each kind, in [`AssetKind::ALL`] order.
pub fn count_by_kind<'a>(
    routes: impl IntoIterator<Item = &'a AssetRoute>,
) -> [(AssetKind, usize); 3] {
    let mut counts = AssetKind::ALL.map(|kind| (kind, 0));
    for route in routes {
        if let Some((_, n)) = counts.iter_mut().find(|(kind, _)| *kind == route.kind) {
            *n += 1;
        }
    }
    counts
}
