//! Asset build orchestration.
//!
//! Build pipeline phases:
//! - **Init** - Clean output directory (`--clean`)
//! - **Scan** - Collect and classify source files
//! - **Plan** - Hash content and render output paths, detect conflicts
//! - **Emit** - Parallel copy into the output directory
//! - **Finalize** - Write `manifest.json`, log summary

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;

use crate::{
    asset::{
        AssetKind, Namer, count_by_kind,
        emit::{self, BuildError, Emit},
        manifest::{MANIFEST_FILE, Manifest},
        scan_assets,
    },
    config::ProjectConfig,
    debug, log,
    logger::ProgressLine,
    utils::plural_count,
};

/// Build all assets and write the manifest.
///
/// Returns the manifest that was written.
pub fn build_assets(config: &ProjectConfig, quiet: bool) -> Result<Manifest> {
    let build = &config.build;
    let namer = Namer::new(&build.names).context("invalid [build.names]")?;

    init_output(config)?;

    // Scan
    let routes = scan_assets(&build.source, &build.entry_set());
    if routes.is_empty() && !quiet {
        log!("build"; "no assets found in {}", config.root_relative(&build.source).display());
    }

    // Plan
    let emits = emit::plan(routes, &namer)?;
    let unique = emit::dedupe(&emits)?;
    log_plan(&emits, unique.len());

    // Emit
    emit_all(&unique, config, quiet)?;

    // Finalize
    let manifest = Manifest::from_emits(&emits, |file| build.url_for(file));
    manifest.write(&build.output.join(MANIFEST_FILE))?;

    if !quiet {
        log!(
            "done";
            "{} emitted to {}",
            plural_count(unique.len(), "file"),
            config.root_relative(&build.output).display()
        );
    }
    Ok(manifest)
}

/// Prepare the output directory, removing it first with `--clean`.
fn init_output(config: &ProjectConfig) -> Result<()> {
    let output = &config.build.output;
    if config.build.clean && output.exists() {
        debug!("build"; "cleaning {}", output.display());
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean output '{}'", output.display()))?;
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output '{}'", output.display()))
}

/// Copy every unique emit in parallel, tracking progress per kind.
fn emit_all(unique: &[&Emit], config: &ProjectConfig, quiet: bool) -> Result<()> {
    let output = &config.build.output;
    let progress = (!quiet).then(|| {
        let counts =
            count_by_kind(unique.iter().map(|e| &e.route)).map(|(kind, n)| (kind.name(), n));
        ProgressLine::new(&counts)
    });

    unique.par_iter().try_for_each(|emit| {
        emit::write(emit, output)?;
        if let Some(progress) = &progress {
            progress.inc(emit.route.kind.name());
        }
        Ok::<_, BuildError>(())
    })?;

    if let Some(progress) = progress {
        progress.finish();
    }
    Ok(())
}

/// Verbose per-file listing, skipped entirely without `--verbose`.
fn log_plan(emits: &[Emit], unique: usize) {
    if !crate::logger::is_verbose() {
        return;
    }
    for emit in emits {
        debug!("plan"; "{} → {}", emit.route.key(), emit.file);
    }
    let shared = emits.len() - unique;
    if shared > 0 {
        debug!("plan"; "{} share an output with identical content", plural_count(shared, "file"));
    }
    for kind in AssetKind::ALL {
        let n = emits.iter().filter(|e| e.route.kind == kind).count();
        debug!("plan"; "{}: {}", kind, n);
    }
}
