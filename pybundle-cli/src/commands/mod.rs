//! Subcommand implementations.

pub mod build;

pub use build::{run_build, run_show};
