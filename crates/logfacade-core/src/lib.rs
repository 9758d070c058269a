//! logfacade core - a process-wide logging facade
//!
//! This crate decouples the code that emits diagnostics from the mechanism
//! that renders them:
//! - [`Logger`] capability with a first-class debug gate
//! - positional `{0}`, `{1}` message formatting that never fails the caller
//! - [`Backend`] adapter contract with console and `tracing` adapters
//! - [`LoggerRegistry`] handing out hierarchically named loggers
//! - [`LogContext`] for injection, and the static [`Log`] facade over a
//!   lazily bound process-global context
//!
//! # Usage
//!
//! ```rust
//! use logfacade_core::Log;
//!
//! Log::info("testing {0} {1}", &[&"LoggerLog", &"info"]);
//! // Disabled by default: nothing is formatted or emitted
//! Log::debug("testing {0} {1}", &[&"LoggerLog", &"debug"]);
//! ```

pub mod backend;
pub mod config;
pub mod facade;
pub mod format;
pub mod logger;
pub mod logging_facility;
pub mod registry;

// Re-export commonly used types
pub use backend::{Backend, ConsoleBackend, TracingBackend};
pub use config::{BackendKind, FacadeConfig};
pub use facade::{Log, LogContext};
pub use format::{format, try_format};
pub use logger::{Logger, ScopedLogger};
pub use logfacade_core_types::Level;
pub use logfacade_errors::{ErrorKind, LogError, Result};
pub use registry::{LoggerRegistry, RegistryBuilder};
