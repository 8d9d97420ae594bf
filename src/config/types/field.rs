//! Dotted config field paths for diagnostics.

use std::fmt;

/// Path of a field inside `linkdeck.toml`, e.g. `build.names.entry`.
///
/// Sections expose theirs through a `FIELDS` constant:
///
/// ```ignore
/// diag.error(BuildSectionConfig::FIELDS.base, "must end with `/`");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
