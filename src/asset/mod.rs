//! Asset naming, scanning and emission.
//!
//! ```text
//! scan ─→ AssetRoute ─→ plan (hash + template) ─→ dedupe ─→ write ─→ manifest
//! ```

pub mod emit;
pub mod hash;
mod kind;
pub mod manifest;
mod namer;
pub mod naming;
mod route;
mod scan;
pub mod template;

// Types
pub use kind::AssetKind;
pub use naming::AssetInfo;
pub use route::AssetRoute;

// Naming
pub use namer::Namer;

// Scanning (pure functions)
pub use scan::{count_by_kind, scan_assets};
