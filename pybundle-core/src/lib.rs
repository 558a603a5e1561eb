//! Core library for the pybundle PyInstaller front-end.
//!
//! This crate turns a [`PackagingConfig`] into a single deterministic
//! PyInstaller invocation, optionally generating a Windows version resource,
//! and runs the packager while streaming its combined output line-by-line.
//! The interactive shell (CLI or GUI) owns everything else: collecting
//! options, displaying the log, deciding exit codes.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use pybundle_core::{CommandBuilder, PackagingConfig, run_packager};
//! use std::path::Path;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let mut config = PackagingConfig::load(Path::new(pybundle_core::CONFIG_FILE)).unwrap();
//! config.onefile = true;
//!
//! let cmd = CommandBuilder::new(&cwd).build(&mut config, "app.py").unwrap();
//! let status = run_packager(&cmd, &cwd, |line| println!("{line}")).unwrap();
//! assert!(status.success());
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod runner;
pub mod version;

// Re-exports for public API
pub use command::{BuiltCommand, CommandBuilder, DEFAULT_PYTHON};
pub use config::{CONFIG_FILE, PackagingConfig};
pub use error::{CoreError, CoreResult};
pub use runner::run_packager;
pub use version::write_version_file;
