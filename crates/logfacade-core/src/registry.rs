//! Named-logger registry
//!
//! Maps full logger names to their debug flags and owns the backend every
//! logger it hands out forwards to. Hierarchy is purely a naming convention:
//! `"net.tcp"` sits under `"net"` because of its name, not because of any
//! reference between the two loggers.
//!
//! Entries are never removed.

use crate::backend::{Backend, ConsoleBackend};
use crate::logger::{Logger, ScopedLogger};
use logfacade_core_types::schema::NAME_SEPARATOR;
use logfacade_core_types::Level;
use logfacade_errors::LogError;
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Name the one-shot failure report is written under
pub const SELF_LOGGER: &str = "logfacade";

struct Shared {
    backend: Arc<dyn Backend>,
    fallback: Arc<dyn Backend>,
    debug_scopes: Vec<String>,
    flags: RwLock<HashMap<String, Arc<AtomicBool>>>,
    failure_reported: AtomicBool,
    failures: AtomicU64,
}

/// Registry of loggers sharing one backend
///
/// Cloning is cheap and yields a handle onto the same registry.
#[derive(Clone)]
pub struct LoggerRegistry {
    shared: Arc<Shared>,
}

/// Builder for a [`LoggerRegistry`]
pub struct RegistryBuilder {
    backend: Arc<dyn Backend>,
    fallback: Option<Arc<dyn Backend>>,
    debug_scopes: Vec<String>,
}

impl RegistryBuilder {
    /// Names whose loggers, and every logger below them, start with debug enabled
    pub fn debug_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.debug_scopes.extend(scopes.into_iter().map(Into::into));
        self
    }

    /// Sink the one-shot backend failure report goes to (stderr by default)
    pub fn fallback(mut self, fallback: Arc<dyn Backend>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn build(self) -> LoggerRegistry {
        LoggerRegistry {
            shared: Arc::new(Shared {
                backend: self.backend,
                fallback: self
                    .fallback
                    .unwrap_or_else(|| Arc::new(ConsoleBackend::new()) as Arc<dyn Backend>),
                debug_scopes: self.debug_scopes,
                flags: RwLock::new(HashMap::new()),
                failure_reported: AtomicBool::new(false),
                failures: AtomicU64::new(0),
            }),
        }
    }
}

impl LoggerRegistry {
    /// Registry with default settings forwarding to `backend`
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self::builder(backend).build()
    }

    pub fn builder(backend: Arc<dyn Backend>) -> RegistryBuilder {
        RegistryBuilder {
            backend,
            fallback: None,
            debug_scopes: Vec::new(),
        }
    }

    /// The unnamed root logger
    pub fn root(&self) -> Arc<dyn Logger> {
        self.get_logger("")
    }

    /// Logger for the full hierarchical `name`
    ///
    /// Repeated lookups of a name return loggers sharing one debug flag.
    pub fn get_logger(&self, name: &str) -> Arc<dyn Logger> {
        Arc::new(ScopedLogger::new(
            name.to_string(),
            self.flag(name),
            self.clone(),
        ))
    }

    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.shared.backend
    }

    /// Names looked up so far, sorted
    pub fn names(&self) -> Vec<String> {
        let flags = self.shared.flags.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = flags.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.shared
            .flags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of emits the backend failed on, reported or not
    pub fn failure_count(&self) -> u64 {
        self.shared.failures.load(Ordering::Relaxed)
    }

    /// Whether `name` starts with debug enabled
    pub fn in_debug_scope(&self, name: &str) -> bool {
        self.shared
            .debug_scopes
            .iter()
            .any(|scope| is_within(name, scope))
    }

    fn flag(&self, name: &str) -> Arc<AtomicBool> {
        if let Some(flag) = self
            .shared
            .flags
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            return flag.clone();
        }

        // A racing first lookup may have inserted since the read; entry() keeps the winner
        let initial = self.in_debug_scope(name);
        self.shared
            .flags
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(AtomicBool::new(initial)))
            .clone()
    }

    /// Forward a formatted message, containing any failure of the backend
    pub(crate) fn dispatch(&self, level: Level, logger: &str, message: &str) {
        let backend = &self.shared.backend;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| match level {
            Level::Debug => backend.emit_debug(logger, message),
            Level::Info => backend.emit_info(logger, message),
            Level::Warn => backend.emit_warn(logger, message),
        }));

        let err = match outcome {
            Ok(Ok(())) => return,
            Ok(Err(err)) => err,
            Err(_) => LogError::BackendPanicked {
                backend: backend.name().to_string(),
            },
        };
        self.report_failure(&err);
    }

    fn report_failure(&self, err: &LogError) {
        self.shared.failures.fetch_add(1, Ordering::Relaxed);
        if self.shared.failure_reported.swap(true, Ordering::AcqRel) {
            return;
        }

        let report = format!(
            "[{}] {}; further backend failures are suppressed",
            err.code(),
            err
        );
        let fallback = &self.shared.fallback;
        let _ = panic::catch_unwind(AssertUnwindSafe(|| {
            fallback.emit_warn(SELF_LOGGER, &report)
        }));
    }
}

impl fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("backend", &self.shared.backend.name())
            .field("debug_scopes", &self.shared.debug_scopes)
            .field("loggers", &self.len())
            .finish()
    }
}

/// `name` equals `scope` or lies below it in the dotted hierarchy
fn is_within(name: &str, scope: &str) -> bool {
    match name.strip_prefix(scope) {
        Some("") => true,
        Some(rest) => !scope.is_empty() && rest.starts_with(NAME_SEPARATOR),
        None => false,
    }
}
