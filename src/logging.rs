/*
 * Logging Module
 *
 * Sets up the flexi_logger backend for the `log` macros used across the crate.
 * The level spec comes from RUST_LOG when present, `info` otherwise.
 */

use flexi_logger::{DeferredNow, Logger, LoggerHandle, Record};

use crate::error::Result;

/// Start the logger. The returned handle must be kept alive for the lifetime
/// of the application.
pub fn setup() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("info")?
        .format(compact_format)
        .start()?;
    Ok(handle)
}

// One line per record: level, module and message
pub fn compact_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    record: &Record,
) -> std::result::Result<(), std::io::Error> {
    write!(
        w,
        "{:<5} [{}] {}",
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.args()
    )
}
