//! Configuration section definitions.
//!
//! Each module corresponds to a section in `linkdeck.toml`:
//!
//! | Module     | TOML Section      | Purpose                         |
//! |------------|-------------------|---------------------------------|
//! | `build`    | `[build]`         | Source/output paths, base, entries |
//! | `names`    | `[build.names]`   | Output file name templates      |

pub mod build;

pub use build::{BuildSectionConfig, NamesConfig};
