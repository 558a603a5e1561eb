//! Windows version-resource generation.
//!
//! PyInstaller embeds version metadata into the built executable from a
//! `VSVersionInfo` text file passed via `--version-file`. The resource is a
//! build artifact with the lifetime of one packaging run: it is rendered
//! fresh before every invocation and never persisted as part of the config.

use crate::config::PackagingConfig;
use crate::error::{CoreError, CoreResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed name of the generated resource, written into the build's base
/// directory. Overwritten on every run; concurrent builds sharing the path
/// would collide.
pub const VERSION_FILE: &str = "version_file.txt";

/// Parses a dot-separated version string into exactly four components,
/// padding with trailing zeros.
///
/// "1.2" becomes `[1, 2, 0, 0]`. Any component that is not a non-negative
/// integer (the empty string included) is rejected, as are strings with more
/// than four components, since the resource format has no room for them.
pub fn version_tuple(value: &str) -> CoreResult<[u32; 4]> {
    let components: Vec<&str> = value.split('.').collect();
    if components.len() > 4 {
        return Err(CoreError::malformed_version(
            value,
            format!("expected at most 4 components, got {}", components.len()),
        ));
    }

    let mut tuple = [0u32; 4];
    for (i, component) in components.iter().enumerate() {
        tuple[i] = component.parse().map_err(|_| {
            CoreError::malformed_version(
                value,
                format!("component '{}' is not a non-negative integer", component),
            )
        })?;
    }
    Ok(tuple)
}

fn format_tuple(tuple: [u32; 4]) -> String {
    format!("({}, {}, {}, {})", tuple[0], tuple[1], tuple[2], tuple[3])
}

/// Renders the `VSVersionInfo` resource text for `config`.
///
/// Returns `Ok(None)` when company, product, and file version are all empty:
/// with no metadata to embed there is nothing to render.
pub fn render_version_info(config: &PackagingConfig) -> CoreResult<Option<String>> {
    if config.company.is_empty() && config.product.is_empty() && config.file_ver.is_empty() {
        return Ok(None);
    }

    let file_tuple = version_tuple(&config.file_ver)?;
    let product_tuple = version_tuple(&config.prod_ver)?;

    // Fixed-format text resource consumed only by PyInstaller. The numeric
    // FixedFileInfo fields (mask, flags, OS, fileType) are constants the
    // packager expects for an ordinary Windows application.
    let text = format!(
        r#"# UTF-8
VSVersionInfo(
  ffi=FixedFileInfo(filevers={filevers}, prodvers={prodvers}, mask=0x3f, flags=0x0, OS=0x4, fileType=0x1, subtype=0x0, date=(0, 0)),
  kids=[StringFileInfo([StringTable('040904B0', [
    StringStruct('CompanyName', '{company}'),
    StringStruct('FileDescription', '{desc}'),
    StringStruct('FileVersion', '{file_ver}'),
    StringStruct('ProductName', '{product}'),
    StringStruct('ProductVersion', '{prod_ver}'),
    StringStruct('LegalCopyright', '{copyright}')
  ])])]
)"#,
        filevers = format_tuple(file_tuple),
        prodvers = format_tuple(product_tuple),
        company = config.company,
        desc = config.desc,
        file_ver = config.file_ver,
        product = config.product,
        prod_ver = config.prod_ver,
        copyright = config.copyright,
    );

    Ok(Some(text))
}

/// Writes the version resource for `config` into `dir`.
///
/// Returns the path of the written file, or `None` when no resource is
/// needed (see [`render_version_info`]). An existing file at the path is
/// overwritten. A malformed version string propagates before anything is
/// written.
pub fn write_version_file(config: &PackagingConfig, dir: &Path) -> CoreResult<Option<PathBuf>> {
    let Some(text) = render_version_info(config)? else {
        return Ok(None);
    };

    let path = dir.join(VERSION_FILE);
    fs::write(&path, text)?;
    log::debug!("Wrote version resource to {}", path.display());
    Ok(Some(path))
}
