// vidscribe-cli/src/logging.rs
//
// Logging setup and helpers for the Vidscribe CLI.
//
// The application uses env_logger with the RUST_LOG environment variable:
// - RUST_LOG=info (default): Normal operation logs
// - RUST_LOG=debug: Detailed debugging information
// - RUST_LOG=trace: Very verbose debugging information

/// Initializes env_logger with an `info` default and terse formatting, so
/// log lines interleave cleanly with the styled terminal output.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// Used to generate unique names for output artifacts.
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}
