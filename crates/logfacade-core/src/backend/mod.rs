//! Backend adapter contract
//!
//! A backend receives fully formatted messages and renders them through some
//! external mechanism. Level gating and formatting happen before a backend
//! is reached; a backend only maps levels onto its own severities.

pub mod console;
pub mod tracing_backend;

pub use console::ConsoleBackend;
pub use tracing_backend::TracingBackend;

use logfacade_core_types::Level;
use logfacade_errors::Result;

/// Narrow outbound contract every logging mechanism is driven through
///
/// Implementations may fail or even panic; the logger wrapping them contains
/// both and never lets them reach application code.
pub trait Backend: Send + Sync {
    /// Short identifier used in failure reports
    fn name(&self) -> &str;

    /// Render one formatted message for the named logger
    ///
    /// # Errors
    ///
    /// Returns [`logfacade_errors::LogError::Backend`] if the wrapped
    /// mechanism refused the record.
    fn emit(&self, level: Level, logger: &str, message: &str) -> Result<()>;

    /// # Errors
    ///
    /// See [`Backend::emit`].
    fn emit_debug(&self, logger: &str, message: &str) -> Result<()> {
        self.emit(Level::Debug, logger, message)
    }

    /// # Errors
    ///
    /// See [`Backend::emit`].
    fn emit_info(&self, logger: &str, message: &str) -> Result<()> {
        self.emit(Level::Info, logger, message)
    }

    /// # Errors
    ///
    /// See [`Backend::emit`].
    fn emit_warn(&self, logger: &str, message: &str) -> Result<()> {
        self.emit(Level::Warn, logger, message)
    }
}
