//! Minimal built-in sink
//!
//! Writes one line per record: `LEVEL name: message`, or `LEVEL message`
//! for the unnamed root logger. Bound by default when nothing else is.

use super::Backend;
use logfacade_core_types::Level;
use logfacade_errors::{LogError, Result};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Line-oriented backend writing to stderr or any `Write` target
pub struct ConsoleBackend {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleBackend {
    /// Console backend writing to stderr
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Console backend writing to the given target
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Render a record the way this backend writes it, without the newline
    pub fn render(level: Level, logger: &str, message: &str) -> String {
        if logger.is_empty() {
            format!("{:<5} {}", level, message)
        } else {
            format!("{:<5} {}: {}", level, logger, message)
        }
    }
}

impl Default for ConsoleBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for ConsoleBackend {
    fn name(&self) -> &str {
        "console"
    }

    fn emit(&self, level: Level, logger: &str, message: &str) -> Result<()> {
        let line = Self::render(level, logger, message);
        // A writer that panicked mid-line is still usable for the next one
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{}", line).map_err(|e| LogError::backend(self.name(), e))?;
        writer.flush().map_err(|e| LogError::backend(self.name(), e))
    }
}
