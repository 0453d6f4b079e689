//! Minimal stderr logger for hosts without their own.
//!
//! The engine only emits through the `log` facade. A host that already
//! installs a logger needs nothing from here.

use log::{LevelFilter, Metadata, Record};
use std::env;

/// Environment variable read by `init_logging`.
pub const LOG_ENV: &str = "CARAVAN_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger with the level from `CARAVAN_LOG`.
///
/// Defaults to `info` when the variable is unset or unparsable. Calling
/// it again, or after another logger was installed, does nothing.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
