//! Packager process execution and output streaming.
//!
//! The runner spawns the built command, relays its combined stdout/stderr to
//! the caller line-by-line while the process is still running, and tears
//! down the scratch build directory once it exits. One run at a time: the
//! scratch directory and the version-resource path are shared fixed paths,
//! so concurrent runs against the same base directory would collide.

use crate::command::{BuiltCommand, TEMP_BUILD_DIR};
use crate::error::{CoreError, CoreResult};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;

/// Runs `cmd`, invoking `on_line` for every line of combined output.
///
/// Lines are delivered in emission order, line-buffered, while the process
/// is still running; stdout and stderr are read on their own threads so
/// neither pipe can stall the other. The closure runs on the calling
/// thread. Ordering is guaranteed within each stream; interleaving between
/// stdout and stderr reflects whichever reader thread reaches the channel
/// first, not necessarily the exact cross-stream emission order.
///
/// Returns the packager's exit status. A non-zero status is not an `Err`:
/// the failure is already visible in the streamed output, and the caller
/// decides how to report it.
///
/// After the process exits, `<base_dir>/temp_build` is removed recursively
/// regardless of exit status. Removal errors are ignored; the directory is
/// scratch space and a failed teardown is harmless.
pub fn run_packager(
    cmd: &BuiltCommand,
    base_dir: &Path,
    mut on_line: impl FnMut(&str),
) -> CoreResult<ExitStatus> {
    let (program, args) = cmd
        .args
        .split_first()
        .ok_or_else(|| CoreError::Validation("empty command".to_string()))?;

    log::info!("Running packager: {}", cmd.display_line());

    let mut child = Command::new(program)
        .args(args)
        .current_dir(base_dir)
        // The packager inherits this so its own output stays UTF-8
        .env("PYTHONIOENCODING", "utf-8")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(CoreError::CommandStart)?;

    let (tx, rx) = mpsc::channel::<String>();
    let stdout_handle = child.stdout.take().map(|out| spawn_reader(out, tx.clone()));
    let stderr_handle = child.stderr.take().map(|err| spawn_reader(err, tx));

    // The channel closes when both reader threads finish, which ends this
    // loop; until then every line reaches the caller as soon as it is read.
    for line in rx {
        on_line(&line);
    }

    if let Some(handle) = stdout_handle {
        let _ = handle.join();
    }
    if let Some(handle) = stderr_handle {
        let _ = handle.join();
    }

    let status = child.wait().map_err(CoreError::CommandWait)?;
    log::info!("Packager exited with {}", status);

    cleanup_temp_build(base_dir);
    Ok(status)
}

/// Reads lines from `source` on a dedicated thread and forwards them.
fn spawn_reader<R: Read + Send + 'static>(
    source: R,
    tx: mpsc::Sender<String>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let reader = BufReader::new(source);
        for line in reader.lines() {
            match line {
                // A closed receiver means the caller is gone; stop reading.
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log::debug!("Packager output read error: {}", e);
                    break;
                }
            }
        }
    })
}

/// Best-effort removal of the scratch build directory.
fn cleanup_temp_build(base_dir: &Path) {
    let temp_dir = base_dir.join(TEMP_BUILD_DIR);
    if temp_dir.is_dir() {
        if let Err(e) = std::fs::remove_dir_all(&temp_dir) {
            log::debug!(
                "Ignoring failure to remove {}: {}",
                temp_dir.display(),
                e
            );
        }
    }
}
