use env_logger::{Builder, Target};
use log::LevelFilter;

/// Initialize the logger with the specified level.
///
/// `RUST_LOG` still applies per-module filters on top of `level`. Output goes
/// to stderr so a PPM stream on stdout stays clean.
pub fn init_logger(level: LevelFilter) {
    Builder::from_default_env()
        .filter_level(level)
        .target(Target::Stderr)
        .format_timestamp_millis()
        .init();
}
