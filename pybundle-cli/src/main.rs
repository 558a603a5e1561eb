// pybundle-cli/src/main.rs
//
// Entry point for the pybundle CLI.
//
// Responsibilities:
// - Parsing command-line arguments (`Cli`, `Commands`, `BuildArgs`).
// - Initializing logging.
// - Dispatching to the subcommand implementations.
// - Mapping errors and the packager's exit status to the process exit code.

use clap::Parser;
use owo_colors::OwoColorize;
use pybundle_cli::{Cli, Commands, logging, run_build, run_show};
use std::process;

fn main() {
    logging::init();
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match &cli.command {
        Commands::Build(args) => run_build(args, config),
        Commands::Show(args) => run_show(args, config).map(|()| 0),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    }
}
