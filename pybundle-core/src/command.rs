//! Deterministic PyInstaller command construction.
//!
//! The builder maps a [`PackagingConfig`] plus a script path into the full
//! packager invocation. Argument order is fixed so that identical inputs
//! always produce byte-identical argument lists; tests rely on it, and it
//! keeps "show the command" output stable across runs.

use crate::config::PackagingConfig;
use crate::error::{CoreError, CoreResult};
use crate::version;
use std::path::{Path, PathBuf};

/// Interpreter used to launch the packager module when none is configured.
pub const DEFAULT_PYTHON: &str = "python3";

/// Module invoked with `-m` to run the packager.
pub const PACKAGER_MODULE: &str = "PyInstaller";

/// Scratch directory handed to the packager for work and spec files.
/// Removed by the runner after every run.
pub const TEMP_BUILD_DIR: &str = "temp_build";

/// Subdirectory of the base directory that receives the built executable.
pub const OUTPUT_DIR: &str = "output";

/// Fixed literal passed to `--key` when bytecode encryption is requested.
pub const ENCRYPTION_KEY: &str = "123456";

/// Path-list separator the packager uses as the field delimiter inside
/// `--add-data` and `--add-binary` tokens. Must match the target OS.
pub const fn path_list_separator() -> char {
    if cfg!(windows) { ';' } else { ':' }
}

/// A fully assembled packager invocation.
///
/// `args[0]` is the interpreter; the rest are passed to it verbatim. The
/// command is recomputed on every build request and never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltCommand {
    /// Directory the built executable lands in (`--distpath`)
    pub output_dir: PathBuf,
    /// Complete token list, interpreter first
    pub args: Vec<String>,
}

impl BuiltCommand {
    /// Renders the invocation as a single display line.
    ///
    /// For display only: tokens are space-joined without quoting, exactly as
    /// the original front-end echoed the command into its log view.
    #[must_use]
    pub fn display_line(&self) -> String {
        self.args.join(" ")
    }
}

/// Builds [`BuiltCommand`]s for one base directory and interpreter.
pub struct CommandBuilder {
    base_dir: PathBuf,
    python: String,
}

impl CommandBuilder {
    /// Creates a builder rooted at `base_dir` (normally the working
    /// directory) using the default interpreter.
    #[must_use]
    pub fn new(base_dir: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            python: DEFAULT_PYTHON.to_string(),
        }
    }

    /// Overrides the interpreter used to launch the packager module.
    #[must_use]
    pub fn with_python(mut self, python: &str) -> Self {
        self.python = python.to_string();
        self
    }

    /// Assembles the packager invocation for `script` under `config`.
    ///
    /// The resolved output directory is both returned in the command and
    /// written back into `config.outdir`, so a subsequent config save
    /// records where the last build went.
    ///
    /// Side effect: when the config carries version metadata, the version
    /// resource is written into the base directory before the argument list
    /// is finished (see [`version::write_version_file`]).
    ///
    /// `script` must be non-empty; the caller is expected to have collected
    /// a script path before asking for a build.
    pub fn build(&self, config: &mut PackagingConfig, script: &str) -> CoreResult<BuiltCommand> {
        if script.is_empty() {
            return Err(CoreError::Validation(
                "a main script path is required".to_string(),
            ));
        }

        let output_dir = self.base_dir.join(OUTPUT_DIR);
        config.outdir = output_dir.to_string_lossy().into_owned();

        let mut args: Vec<String> = vec![
            self.python.clone(),
            "-m".to_string(),
            PACKAGER_MODULE.to_string(),
        ];

        if config.onefile {
            args.push("--onefile".to_string());
        }
        if config.noconsole {
            args.push("--noconsole".to_string());
        }
        if config.upx {
            args.push("--upx-dir=upx".to_string());
        }
        if config.debug {
            args.push("--debug=all".to_string());
        }

        // Housekeeping flags are unconditional: always a clean build, with
        // work and spec files confined to the scratch directory.
        args.push("--clean".to_string());
        args.push("--workpath".to_string());
        args.push(TEMP_BUILD_DIR.to_string());
        args.push("--specpath".to_string());
        args.push(TEMP_BUILD_DIR.to_string());

        if !config.icon.is_empty() {
            args.push("--icon".to_string());
            args.push(config.icon.clone());
        }

        if let Some(version_file) = version::write_version_file(config, &self.base_dir)? {
            args.push("--version-file".to_string());
            args.push(version_file.to_string_lossy().into_owned());
        }

        let sep = path_list_separator();
        for entry in config.data.split(';') {
            if !entry.trim().is_empty() {
                args.push("--add-data".to_string());
                args.push(format!("{entry}{sep}."));
            }
        }
        for entry in config.bin.split(';') {
            if !entry.trim().is_empty() {
                args.push("--add-binary".to_string());
                args.push(format!("{entry}{sep}."));
            }
        }

        for module in config.hidden.split(',') {
            let module = module.trim();
            if !module.is_empty() {
                args.push("--hidden-import".to_string());
                args.push(module.to_string());
            }
        }

        if config.encrypt {
            args.push("--key".to_string());
            args.push(ENCRYPTION_KEY.to_string());
        }

        if !config.hooks.is_empty() {
            args.push("--additional-hooks-dir".to_string());
            args.push(config.hooks.clone());
        }

        args.push("--distpath".to_string());
        args.push(output_dir.to_string_lossy().into_owned());

        // Free-form passthrough: whitespace-split, no escaping. This is an
        // intentional trust boundary for advanced use; sanitizing here would
        // break legitimate flags the front-end does not model.
        for token in config.extra.split_whitespace() {
            args.push(token.to_string());
        }

        args.push(script.to_string());

        log::debug!("Built packager command: {}", args.join(" "));
        Ok(BuiltCommand { output_dir, args })
    }
}
