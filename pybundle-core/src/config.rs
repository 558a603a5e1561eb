//! Packaging configuration and its JSON persistence.
//!
//! [`PackagingConfig`] is the explicit, typed record of every option the
//! front-end collects. It replaces the widget-keyed map the original UI kept:
//! the config is passed by value between the store, the command builder, and
//! the runner, so nothing outside the shell ever touches UI state.
//!
//! The persisted document is a flat JSON object at [`CONFIG_FILE`]. Every
//! field carries `#[serde(default)]`, so a key absent from the document
//! deserializes to an empty string or `false` rather than failing.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default name of the persisted configuration document, resolved relative
/// to the working directory.
pub const CONFIG_FILE: &str = "pybundle.json";

/// All options for a single packaging run.
///
/// String list fields keep the original wire shape: `data` and `bin` are
/// `;`-joined path lists, `hidden` is a comma-separated module list. The
/// command builder splits them; the config stores them verbatim so the
/// persisted document stays human-editable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagingConfig {
    /// Path of the main script to package
    #[serde(default)]
    pub script: String,

    /// Output directory; rewritten by the command builder on every build
    #[serde(default)]
    pub outdir: String,

    /// Path to a .ico icon file
    #[serde(default)]
    pub icon: String,

    /// Produce a single self-contained executable (--onefile)
    #[serde(default)]
    pub onefile: bool,

    /// Windowed application, no console (--noconsole)
    #[serde(default)]
    pub noconsole: bool,

    /// Compress with UPX from the local `upx` directory
    #[serde(default)]
    pub upx: bool,

    /// Build with full debug output (--debug=all)
    #[serde(default)]
    pub debug: bool,

    // ---- Version resource metadata ----
    #[serde(default)]
    pub company: String,

    #[serde(default)]
    pub product: String,

    /// Dot-separated file version, e.g. "1.2.3"
    #[serde(default)]
    pub file_ver: String,

    /// Dot-separated product version
    #[serde(default)]
    pub prod_ver: String,

    /// File description string
    #[serde(default)]
    pub desc: String,

    #[serde(default)]
    pub copyright: String,

    // ---- Bundled resources ----
    /// Extra data files, `;`-separated
    #[serde(default)]
    pub data: String,

    /// Extra binary files, `;`-separated
    #[serde(default)]
    pub bin: String,

    /// Hidden imports, comma-separated module names
    #[serde(default)]
    pub hidden: String,

    /// Encrypt bundled bytecode (--key)
    #[serde(default)]
    pub encrypt: bool,

    /// Additional hooks directory
    #[serde(default)]
    pub hooks: String,

    /// Free-form extra arguments, whitespace-split and passed through verbatim
    #[serde(default)]
    pub extra: String,
}

impl PackagingConfig {
    /// Loads a config from `path`.
    ///
    /// A missing file is not an error and yields the default (all-empty)
    /// config, matching first-run behavior. A file that exists but does not
    /// parse is `CoreError::Persistence`: silently discarding a document the
    /// user edited by hand would lose their configuration.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&text).map_err(|e| {
            CoreError::Persistence(format!(
                "Config file '{}' is not valid JSON: {}",
                path.display(),
                e
            ))
        })
    }

    /// Serializes the whole config to `path`, overwriting any existing file.
    ///
    /// The document is always written in full; there is no incremental patch.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let text = serde_json::to_string_pretty(self).map_err(|e| {
            CoreError::Persistence(format!("Failed to serialize config: {}", e))
        })?;
        fs::write(path, text)?;
        log::info!("Saved config to {}", path.display());
        Ok(())
    }
}
