//! Site directory data shapes.
//!
//! A directory is an ordered list of categories, each holding an ordered
//! list of sites. Order is display order. The shapes carry no validation:
//! `url`, `color` and `icon` are free-form strings and category ids are
//! expected, not checked, to be unique.
//!
//! ```json
//! {
//!   "categories": [
//!     {
//!       "id": "dev",
//!       "name": "Development",
//!       "icon": "code",
//!       "sites": [
//!         { "name": "GitHub", "url": "https://github.com", "description": "...",
//!           "icon": "github", "color": "#24292e" }
//!       ]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Root container of the directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitesConfig {
    pub categories: Vec<Category>,
}

/// A named group of sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub sites: Vec<Site>,
}

/// One external link entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub url: String,
    pub description: String,
    pub icon: String,
    pub color: String,
}

impl Site {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: description.into(),
            icon: icon.into(),
            color: color.into(),
        }
    }
}

impl SitesConfig {
    /// Starter directory written by `linkdeck init`.
    pub fn starter() -> Self {
        Self {
            categories: vec![
                Category {
                    id: "dev".into(),
                    name: "Development".into(),
                    icon: "code".into(),
                    sites: vec![
                        Site::new(
                            "GitHub",
                            "https://github.com",
                            "Code hosting and collaboration",
                            "github",
                            "#24292e",
                        ),
                        Site::new(
                            "crates.io",
                            "https://crates.io",
                            "The Rust package registry",
                            "package",
                            "#e6b14a",
                        ),
                    ],
                },
                Category {
                    id: "docs".into(),
                    name: "Documentation".into(),
                    icon: "book".into(),
                    sites: vec![Site::new(
                        "MDN",
                        "https://developer.mozilla.org",
                        "Web platform reference",
                        "globe",
                        "#000000",
                    )],
                },
            ],
        }
    }
}
