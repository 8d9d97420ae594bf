//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::asset::AssetKind;

/// linkdeck asset build CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Asset source directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Config file path (default: linkdeck.toml)
    #[arg(short = 'C', long, default_value = "linkdeck.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a default linkdeck.toml and a starter directory file
    #[command(visible_alias = "i")]
    Init,

    /// Emit hashed assets and the manifest
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the output template chosen for file names
    #[command(visible_alias = "n")]
    Name {
        #[command(flatten)]
        args: NameArgs,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Override the public base path (e.g. "./", "/deck/")
    #[arg(short = 'B', long)]
    pub base: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Name command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct NameArgs {
    /// File names to classify. If omitted, names an asset without a file name.
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Force a kind instead of classifying by extension and entries
    #[arg(short, long, value_enum)]
    pub kind: Option<KindArg>,
}

/// `--kind` values.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Entry,
    Chunk,
    Asset,
}

impl From<KindArg> for AssetKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Entry => Self::Entry,
            KindArg::Chunk => Self::Chunk,
            KindArg::Asset => Self::Asset,
        }
    }
}

impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build() {
        let cli = Cli::parse_from(["linkdeck", "build", "-c", "-B", "/deck/", "-V"]);
        assert!(cli.is_build());
        let Commands::Build { build_args } = cli.command else {
            unreachable!()
        };
        assert!(build_args.clean);
        assert!(build_args.verbose);
        assert_eq!(build_args.base.as_deref(), Some("/deck/"));
        assert_eq!(cli.config, PathBuf::from("linkdeck.toml"));
    }

    #[test]
    fn test_parse_name() {
        let cli = Cli::parse_from(["linkdeck", "n", "--kind", "chunk", "vendor.js", "a.png"]);
        let Commands::Name { args } = cli.command else {
            unreachable!()
        };
        assert_eq!(args.names, ["vendor.js", "a.png"]);
        assert_eq!(args.kind.map(AssetKind::from), Some(AssetKind::Chunk));
    }

    #[test]
    fn test_parse_name_without_names() {
        let cli = Cli::parse_from(["linkdeck", "name"]);
        assert!(!cli.is_build());
        let Commands::Name { args } = cli.command else {
            unreachable!()
        };
        assert!(args.names.is_empty());
        assert!(args.kind.is_none());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
