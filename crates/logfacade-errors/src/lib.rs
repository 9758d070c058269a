//! Error facility for logfacade
//!
//! Logging calls never return errors to application code. These types exist
//! for the seams where a failure has to be carried somewhere: a formatter
//! reporting a partial substitution, a backend reporting that its sink
//! refused a record, or configuration that could not be loaded.

use thiserror::Error;

/// Result type alias using LogError
pub type Result<T> = std::result::Result<T, LogError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable code usable in tests and in the one-shot
/// self-report a logger writes when its backend fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Template placeholders and supplied arguments disagree
    FormatMismatch,
    /// The wrapped logging mechanism failed or panicked
    BackendFailure,
    /// Configuration could not be parsed or holds an invalid value
    Config,
    Io,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::FormatMismatch => "ERR_FORMAT_MISMATCH",
            ErrorKind::BackendFailure => "ERR_BACKEND_FAILURE",
            ErrorKind::Config => "ERR_CONFIG",
            ErrorKind::Io => "ERR_IO",
        }
    }
}

/// Error taxonomy for logfacade operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LogError {
    /// A placeholder referenced an argument that was not supplied.
    /// `partial` holds the text with every resolvable placeholder substituted.
    #[error("{unresolved} unresolved placeholder(s) in template")]
    FormatMismatch { partial: String, unresolved: usize },

    /// Backend returned an error while emitting
    #[error("Backend '{backend}' failed: {reason}")]
    Backend { backend: String, reason: String },

    /// Backend panicked while emitting
    #[error("Backend '{backend}' panicked while emitting")]
    BackendPanicked { backend: String },

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },
}

impl LogError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LogError::FormatMismatch { .. } => ErrorKind::FormatMismatch,
            LogError::Backend { .. } | LogError::BackendPanicked { .. } => {
                ErrorKind::BackendFailure
            }
            LogError::Config { .. } => ErrorKind::Config,
            LogError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Build a backend failure from any displayable cause
    pub fn backend(backend: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        LogError::Backend {
            backend: backend.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a configuration error from any displayable cause
    pub fn config(reason: impl std::fmt::Display) -> Self {
        LogError::Config {
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_variants_share_kind() {
        let failed = LogError::backend("console", "broken pipe");
        let panicked = LogError::BackendPanicked {
            backend: "tracing".to_string(),
        };
        assert_eq!(failed.kind(), ErrorKind::BackendFailure);
        assert_eq!(panicked.kind(), ErrorKind::BackendFailure);
    }

    #[test]
    fn test_display_includes_context() {
        let err = LogError::backend("console", "broken pipe");
        assert_eq!(err.to_string(), "Backend 'console' failed: broken pipe");
    }
}
