//! Implementation of the `build` and `show` subcommands.
//!
//! Both share the same pipeline: load the persisted config, overlay the
//! command-line options, assemble the packager invocation. `show` stops
//! after printing it; `build` runs the packager and relays every output
//! line, then reports the exit status.

use crate::cli::BuildArgs;
use crate::error::CliResult;
use log::{debug, info};
use owo_colors::OwoColorize;
use pybundle_core::{CONFIG_FILE, CommandBuilder, CoreError, PackagingConfig, run_packager};
use std::path::{Path, PathBuf};

/// Resolves the config document path: explicit flag, else the fixed name in
/// the working directory.
fn config_path(explicit: Option<&Path>, base_dir: &Path) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| base_dir.join(CONFIG_FILE))
}

/// Loads the config, overlays `args`, and resolves the script path.
fn prepare(
    args: &BuildArgs,
    config_file: &Path,
) -> CliResult<(PackagingConfig, String)> {
    info!("Using config {}", config_file.display());
    let mut config = PackagingConfig::load(config_file)?;
    args.apply_to(&mut config);
    debug!("Merged config: {:?}", config);

    let script = config.script.clone();
    if script.is_empty() {
        return Err(CoreError::Validation(
            "no main script given; pass SCRIPT or set it in the config".to_string(),
        ));
    }
    Ok((config, script))
}

/// Builds the invocation for `args` and prints it without running anything.
pub fn run_show(args: &BuildArgs, explicit_config: Option<&Path>) -> CliResult<()> {
    let base_dir = std::env::current_dir()?;
    let config_file = config_path(explicit_config, &base_dir);
    let (mut config, script) = prepare(args, &config_file)?;

    let mut builder = CommandBuilder::new(&base_dir);
    if let Some(python) = &args.python {
        builder = builder.with_python(python);
    }
    let cmd = builder.build(&mut config, &script)?;

    println!("{}", cmd.display_line());
    println!(
        "{} {}",
        "Output directory:".bold(),
        cmd.output_dir.display()
    );

    if args.save {
        config.save(&config_file)?;
    }
    Ok(())
}

/// Runs the full packaging pipeline. Returns the process exit code the CLI
/// should terminate with: 0 on success, the packager's own code otherwise.
pub fn run_build(args: &BuildArgs, explicit_config: Option<&Path>) -> CliResult<i32> {
    let base_dir = std::env::current_dir()?;
    let config_file = config_path(explicit_config, &base_dir);
    let (mut config, script) = prepare(args, &config_file)?;

    let mut builder = CommandBuilder::new(&base_dir);
    if let Some(python) = &args.python {
        builder = builder.with_python(python);
    }
    let cmd = builder.build(&mut config, &script)?;

    println!("{}", cmd.display_line());
    println!();
    println!("{}", "Packaging, please wait...".bold());

    let status = run_packager(&cmd, &base_dir, |line| println!("{line}"))?;
    info!("Build of {} finished with {}", script, status);

    println!();
    if status.success() {
        println!(
            "{} Executable written to {}",
            "Packaging finished.".green().bold(),
            cmd.output_dir.display()
        );
    } else {
        println!("{} {}", "Packaging failed:".red().bold(), status);
    }

    if args.save {
        config.save(&config_file)?;
    }

    Ok(status.code().unwrap_or(1))
}
