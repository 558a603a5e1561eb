// pybundle-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use pybundle_core::PackagingConfig;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "pybundle: PyInstaller packaging front-end",
    long_about = "Collects packaging options, builds a single PyInstaller invocation \
                  via the pybundle-core library, and streams the packager's output."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path of the persisted configuration document
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Builds the packager command and runs it, streaming its output
    Build(BuildArgs),
    /// Builds the packager command and prints it without running anything
    Show(BuildArgs),
}

/// Options shared by `build` and `show`.
///
/// Every packaging option can also come from the persisted config; anything
/// given here overrides (booleans: enables) the stored value for this run.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Main script to package (falls back to the persisted config)
    #[arg(value_name = "SCRIPT")]
    pub script: Option<String>,

    /// Icon file (.ico) to embed
    #[arg(long, value_name = "FILE")]
    pub icon: Option<String>,

    /// Produce a single self-contained executable
    #[arg(long)]
    pub onefile: bool,

    /// Windowed application without a console
    #[arg(long)]
    pub windowed: bool,

    /// Compress the build with UPX (expects an `upx` directory)
    #[arg(long)]
    pub upx: bool,

    /// Build with full packager debug output
    #[arg(long)]
    pub debug: bool,

    // --- Version resource metadata ---
    /// Company name embedded in the version resource
    #[arg(long, value_name = "NAME")]
    pub company: Option<String>,

    /// Product name embedded in the version resource
    #[arg(long, value_name = "NAME")]
    pub product: Option<String>,

    /// Dot-separated file version (e.g. 1.2.3)
    #[arg(long, value_name = "VER")]
    pub file_version: Option<String>,

    /// Dot-separated product version
    #[arg(long, value_name = "VER")]
    pub product_version: Option<String>,

    /// File description string
    #[arg(long, value_name = "TEXT")]
    pub description: Option<String>,

    /// Copyright string
    #[arg(long, value_name = "TEXT")]
    pub copyright: Option<String>,

    // --- Bundled resources ---
    /// Extra data file to bundle (repeatable)
    #[arg(long = "add-data", value_name = "FILE")]
    pub add_data: Vec<String>,

    /// Extra binary file to bundle (repeatable)
    #[arg(long = "add-binary", value_name = "FILE")]
    pub add_binary: Vec<String>,

    /// Hidden import the packager cannot detect (repeatable)
    #[arg(long = "hidden-import", value_name = "MODULE")]
    pub hidden_import: Vec<String>,

    /// Encrypt bundled bytecode
    #[arg(long)]
    pub encrypt: bool,

    /// Additional hooks directory
    #[arg(long = "hooks-dir", value_name = "DIR")]
    pub hooks_dir: Option<String>,

    /// Extra arguments passed to the packager verbatim (whitespace-split,
    /// no escaping)
    #[arg(long, value_name = "ARGS", allow_hyphen_values = true)]
    pub extra: Option<String>,

    /// Python interpreter used to launch the packager module.
    /// Can also be set via the PYBUNDLE_PYTHON environment variable.
    #[arg(long, value_name = "EXE", env = "PYBUNDLE_PYTHON")]
    pub python: Option<String>,

    /// Persist the merged configuration after this run
    #[arg(long)]
    pub save: bool,
}

impl BuildArgs {
    /// Overlays these arguments onto a loaded config.
    ///
    /// List options append to the stored lists the way the original
    /// front-end's file pickers appended to the existing field; scalar
    /// options replace, boolean flags enable.
    pub fn apply_to(&self, config: &mut PackagingConfig) {
        if let Some(script) = &self.script {
            config.script = script.clone();
        }
        if let Some(icon) = &self.icon {
            config.icon = icon.clone();
        }
        config.onefile |= self.onefile;
        config.noconsole |= self.windowed;
        config.upx |= self.upx;
        config.debug |= self.debug;

        if let Some(company) = &self.company {
            config.company = company.clone();
        }
        if let Some(product) = &self.product {
            config.product = product.clone();
        }
        if let Some(file_version) = &self.file_version {
            config.file_ver = file_version.clone();
        }
        if let Some(product_version) = &self.product_version {
            config.prod_ver = product_version.clone();
        }
        if let Some(description) = &self.description {
            config.desc = description.clone();
        }
        if let Some(copyright) = &self.copyright {
            config.copyright = copyright.clone();
        }

        append_list(&mut config.data, &self.add_data, ';');
        append_list(&mut config.bin, &self.add_binary, ';');
        append_list(&mut config.hidden, &self.hidden_import, ',');

        config.encrypt |= self.encrypt;
        if let Some(hooks) = &self.hooks_dir {
            config.hooks = hooks.clone();
        }
        if let Some(extra) = &self.extra {
            config.extra = extra.clone();
        }
    }
}

/// Appends `entries` to a separator-joined list field.
fn append_list(field: &mut String, entries: &[String], sep: char) {
    for entry in entries {
        if !field.is_empty() {
            field.push(sep);
        }
        field.push_str(entry);
    }
}
