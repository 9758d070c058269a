//! Process-level logging facility for logfacade
//!
//! This module wires the facade into a running process:
//! - Single initialization point via `init(profile)` / `install(config)`
//! - Lazy-argument logging macros (`log_debug!`, `log_info!`, `log_warn!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use logfacade_core::logging_facility::install;
//! use logfacade_core::FacadeConfig;
//!
//! // Initialize once at application startup
//! install(&FacadeConfig::default());
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, install, Profile};
pub use test_capture::{
    init_test_capture, CapturedRecord, MemoryBackend, TracedEvent, TracingCapture,
};
