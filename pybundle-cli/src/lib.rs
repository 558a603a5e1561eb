// pybundle-cli/src/lib.rs
//
// Library portion of the pybundle CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::{BuildArgs, Cli, Commands};
pub use commands::{run_build, run_show};
