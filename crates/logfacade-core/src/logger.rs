//! Logger capability
//!
//! Every logger carries a boolean debug gate. `info` and `warn` always reach
//! the backend; `debug` short-circuits before any formatting when the gate
//! is closed.

use crate::format::format;
use crate::registry::LoggerRegistry;
use logfacade_core_types::schema::NAME_SEPARATOR;
use logfacade_core_types::Level;
use std::fmt::{self, Display};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Appended to the raw template when an argument panics while rendering
pub const RENDER_PANIC_MARKER: &str = "[argument rendering panicked]";

/// Capability implemented by anything application code can log through
pub trait Logger: Send + Sync {
    /// Full hierarchical name; empty for the root logger
    fn name(&self) -> &str;

    fn is_debug_enabled(&self) -> bool;

    /// Open or close the debug gate on this logger only
    fn set_debug_enabled(&self, enabled: bool);

    /// Format and forward a record
    ///
    /// This is the hook behind [`Logger::log`], not a caller entry point.
    /// Implementations must still drop records their gate does not pass, so
    /// calling it directly cannot bypass the debug gate.
    fn emit(&self, level: Level, template: &str, args: &[&dyn Display]);

    /// Logger scoped under this one as `<this>.<name>`
    fn get_logger(&self, name: &str) -> Arc<dyn Logger>;

    /// Whether a record at `level` would be emitted right now
    fn is_enabled(&self, level: Level) -> bool {
        level.is_always_on() || self.is_debug_enabled()
    }

    /// Emit at `level` if the gate allows it
    fn log(&self, level: Level, template: &str, args: &[&dyn Display]) {
        if self.is_enabled(level) {
            self.emit(level, template, args);
        }
    }

    fn debug(&self, template: &str, args: &[&dyn Display]) {
        self.log(Level::Debug, template, args);
    }

    fn info(&self, template: &str, args: &[&dyn Display]) {
        self.log(Level::Info, template, args);
    }

    fn warn(&self, template: &str, args: &[&dyn Display]) {
        self.log(Level::Warn, template, args);
    }
}

/// Logger handed out by a [`LoggerRegistry`]
///
/// The debug flag is shared with every other logger of the same name from
/// the same registry, so lookups by name behave identically.
pub struct ScopedLogger {
    name: String,
    debug_enabled: Arc<AtomicBool>,
    registry: LoggerRegistry,
}

impl ScopedLogger {
    pub(crate) fn new(name: String, debug_enabled: Arc<AtomicBool>, registry: LoggerRegistry) -> Self {
        Self {
            name,
            debug_enabled,
            registry,
        }
    }
}

impl Logger for ScopedLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_debug_enabled(&self) -> bool {
        self.debug_enabled.load(Ordering::Acquire)
    }

    fn set_debug_enabled(&self, enabled: bool) {
        self.debug_enabled.store(enabled, Ordering::Release);
    }

    fn emit(&self, level: Level, template: &str, args: &[&dyn Display]) {
        if !self.is_enabled(level) {
            return;
        }
        let message = panic::catch_unwind(AssertUnwindSafe(|| format(template, args)))
            .unwrap_or_else(|_| format!("{} {}", template, RENDER_PANIC_MARKER));
        self.registry.dispatch(level, &self.name, &message);
    }

    fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        self.registry.get_logger(&child_name(&self.name, name))
    }
}

impl fmt::Debug for ScopedLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedLogger")
            .field("name", &self.name)
            .field("debug_enabled", &self.is_debug_enabled())
            .finish()
    }
}

/// Join a parent and child name with the hierarchy separator
pub fn child_name(parent: &str, child: &str) -> String {
    match (parent.is_empty(), child.is_empty()) {
        (_, true) => parent.to_string(),
        (true, false) => child.to_string(),
        (false, false) => format!("{}{}{}", parent, NAME_SEPARATOR, child),
    }
}
