//! Crate-level error types.
//!
//! The control loop itself never fails; only the configuration layer
//! (option presets and replay scripts) produces errors.

use std::fmt;

/// Errors produced by the gyrocam crate.
#[derive(Debug)]
pub enum GyrocamError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Replay script parsing failure.
    ScriptParse(String),
}

impl fmt::Display for GyrocamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ScriptParse(msg) => {
                write!(f, "replay script parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GyrocamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GyrocamError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
