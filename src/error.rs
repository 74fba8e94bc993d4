/*
 * Error Module
 *
 * Errors only come from configuration and logger setup. Runtime signals
 * (resize, pointer, scroll, frame ticks) never fail.
 */

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is out of range or inconsistent.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// The configuration file is not valid JSON for `PageConfig`.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_param_display_names_the_field() {
        let e = Error::InvalidParam("link_distance must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("link_distance"));
    }

    #[test]
    fn json_errors_convert() {
        let parse: std::result::Result<u32, _> = serde_json::from_str("not json");
        let e: Error = parse.unwrap_err().into();
        assert!(matches!(e, Error::Config(_)));
    }
}
