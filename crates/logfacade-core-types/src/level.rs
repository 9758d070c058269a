//! Severity levels understood by every logger
//!
//! Only `Debug` is gated; `Info` and `Warn` are always emitted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    Info,
    Warn,
}

impl Level {
    /// All levels, lowest first
    pub const ALL: [Level; 3] = [Level::Debug, Level::Info, Level::Warn];

    /// Upper-case name used when rendering records
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
        }
    }

    /// Whether records at this level bypass the debug gate
    pub fn is_always_on(&self) -> bool {
        !matches!(self, Level::Debug)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string does not name a known level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The input that failed to parse
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level '{}' (expected debug, info or warn)", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
