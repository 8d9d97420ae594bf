//! Output file naming for emitted assets.
//!
//! Decides which `assets/` subdirectory a file lands in and returns the
//! path template for it. Placeholders stay unresolved here; see
//! [`super::template`] for substitution.
//!
//! | Kind   | Template                                  |
//! |--------|-------------------------------------------|
//! | entry  | `assets/[name]-[hash].js`                 |
//! | chunk  | `assets/js/[name]-[hash].js`              |
//! | asset  | `assets/<token>/[name]-[hash][extname]`   |
//!
//! The token is `img` for images, `fonts` for fonts, otherwise the raw
//! extension segment.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Template for script chunks.
pub const CHUNK_FILE_NAMES: &str = "assets/js/[name]-[hash].js";

/// Template for entry scripts.
pub const ENTRY_FILE_NAMES: &str = "assets/[name]-[hash].js";

/// Root directory of every emitted asset.
const ASSETS_DIR: &str = "assets";

/// File part shared by all classified assets.
const ASSET_FILE_PART: &str = "[name]-[hash][extname]";

/// Category token for images.
pub const IMG_TOKEN: &str = "img";

/// Category token for fonts.
pub const FONTS_TOKEN: &str = "fonts";

// Unanchored: "svgz" also lands in img.
static IMAGE_EXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)png|jpe?g|gif|svg|webp").expect("valid image regex"));

static FONT_EXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i-u)woff2?|eot|ttf|otf").expect("valid font regex"));

/// Descriptor of one emitted asset, as handed to the naming hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetInfo {
    /// Declared file name, if the asset has one.
    pub name: Option<String>,
}

impl AssetInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Descriptor without a file name.
    pub const fn unnamed() -> Self {
        Self { name: None }
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Segment after the first `.` of `name`, or `""`.
///
/// This is the second dot-delimited segment, not the final extension:
/// `"archive.tar.gz"` yields `"tar"`.
#[inline]
pub fn extension_segment(name: Option<&str>) -> &str {
    name.and_then(|n| n.split('.').nth(1)).unwrap_or_default()
}

/// Map an extension segment to its output directory token.
pub fn category_token(ext: &str) -> Cow<'_, str> {
    if IMAGE_EXT.is_match(ext) {
        Cow::Borrowed(IMG_TOKEN)
    } else if FONT_EXT.is_match(ext) {
        Cow::Borrowed(FONTS_TOKEN)
    } else {
        Cow::Borrowed(ext)
    }
}

/// Output path template for a non-script asset.
///
/// An empty token collapses its directory segment, so an unnamed asset
/// maps to `assets/[name]-[hash][extname]`.
pub fn asset_file_names(info: &AssetInfo) -> String {
    let token = category_token(extension_segment(info.name()));
    if token.is_empty() {
        format!("{ASSETS_DIR}/{ASSET_FILE_PART}")
    } else {
        format!("{ASSETS_DIR}/{token}/{ASSET_FILE_PART}")
    }
}

// ============================================================================
// Tests
// ============================================================================
