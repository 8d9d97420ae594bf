//! Command-line interface module.

mod args;
pub mod build;
pub mod init;
pub mod name;

pub use args::{BuildArgs, Cli, Commands, KindArg, NameArgs};
