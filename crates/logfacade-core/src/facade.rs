//! Facade over the currently bound logger
//!
//! [`LogContext`] is the injectable form: one swappable logger reference
//! behind a lock, passed to whatever needs to log. [`Log`] is the static
//! entry point over a process-global context, bound to a console-backed
//! registry the first time it is touched.
//!
//! Neither performs formatting or gating; every call is delegated to the
//! bound [`Logger`].

use crate::backend::{Backend, ConsoleBackend};
use crate::logger::Logger;
use crate::registry::LoggerRegistry;
use std::fmt::{self, Display};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// Process-scoped holder of the active logger
pub struct LogContext {
    active: RwLock<Arc<dyn Logger>>,
}

impl LogContext {
    /// Context bound to `logger`
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self {
            active: RwLock::new(logger),
        }
    }

    /// Context bound to the root logger of a fresh registry over `backend`
    pub fn with_backend(backend: Arc<dyn Backend>) -> Self {
        Self::new(LoggerRegistry::new(backend).root())
    }

    /// Currently bound logger
    pub fn logger(&self) -> Arc<dyn Logger> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Bind `logger` for all subsequent calls, returning the one it replaced
    pub fn set_logger(&self, logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *active, logger)
    }

    pub fn debug(&self, template: &str, args: &[&dyn Display]) {
        self.logger().debug(template, args);
    }

    pub fn info(&self, template: &str, args: &[&dyn Display]) {
        self.logger().info(template, args);
    }

    pub fn warn(&self, template: &str, args: &[&dyn Display]) {
        self.logger().warn(template, args);
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.logger().is_debug_enabled()
    }

    pub fn set_debug_enabled(&self, enabled: bool) {
        self.logger().set_debug_enabled(enabled);
    }

    /// Logger scoped under the bound one
    pub fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        self.logger().get_logger(name)
    }
}

impl Default for LogContext {
    fn default() -> Self {
        Self::with_backend(Arc::new(ConsoleBackend::new()))
    }
}

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("logger", &self.logger().name())
            .finish()
    }
}

static GLOBAL: OnceLock<LogContext> = OnceLock::new();

/// Static logging facade
///
/// # Example
///
/// ```
/// use logfacade_core::Log;
///
/// let net = Log::get_logger("net");
/// net.set_debug_enabled(true);
/// net.debug("connected to {0}", &[&"10.0.0.1"]);
/// Log::warn("retrying in {0}s", &[&5]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Log;

impl Log {
    /// The process-global context, bound on first access
    pub fn context() -> &'static LogContext {
        GLOBAL.get_or_init(LogContext::default)
    }

    pub fn logger() -> Arc<dyn Logger> {
        Self::context().logger()
    }

    /// Swap the globally bound logger, returning the previous one
    pub fn set_logger(logger: Arc<dyn Logger>) -> Arc<dyn Logger> {
        Self::context().set_logger(logger)
    }

    pub fn debug(template: &str, args: &[&dyn Display]) {
        Self::context().debug(template, args);
    }

    pub fn info(template: &str, args: &[&dyn Display]) {
        Self::context().info(template, args);
    }

    pub fn warn(template: &str, args: &[&dyn Display]) {
        Self::context().warn(template, args);
    }

    pub fn is_debug_enabled() -> bool {
        Self::context().is_debug_enabled()
    }

    pub fn set_debug_enabled(enabled: bool) {
        Self::context().set_debug_enabled(enabled);
    }

    pub fn get_logger(name: &str) -> Arc<dyn Logger> {
        Self::context().get_logger(name)
    }
}
