// pybundle-cli/src/logging.rs
//
// Logging setup for the CLI.
//
// The application uses env_logger with the RUST_LOG environment variable:
// - RUST_LOG=info (default): Normal operation logs
// - RUST_LOG=debug: Detailed debugging, including the built argument list

use env_logger::Env;

/// Initializes the logger. Packager output is printed directly to stdout
/// and never goes through the log facade; the logger only carries
/// diagnostics from pybundle itself, on stderr.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
