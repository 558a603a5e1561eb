// pybundle-cli/src/error.rs
//
// Error handling for the CLI.
//
// The CLI propagates pybundle-core's `CoreError` directly; its Display
// strings are already user-facing. This alias keeps command signatures
// consistent with the core library.

use pybundle_core::CoreResult;

/// Type alias for CLI results using `CoreError`.
pub type CliResult<T> = CoreResult<T>;
