// classveil/src/logger.rs
//! Logger bootstrap for the classveil CLI.
//!
//! Initializes `env_logger` once per process. `RUST_LOG` is respected
//! unless an explicit override is given (quiet/debug flags).

use log::LevelFilter;

/// Initializes the global logger. Safe to call more than once; later calls
/// are no-ops.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp_secs();
    let _ = builder.try_init();
}
