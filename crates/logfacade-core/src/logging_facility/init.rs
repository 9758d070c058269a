//! Logging initialization module
//!
//! Provides a single initialization point for the tracing subscriber that
//! [`TracingBackend`](crate::TracingBackend) forwards into, and for binding
//! a configured backend to the global facade.

use crate::config::FacadeConfig;
use crate::facade::Log;
use crate::logger::Logger;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Once};
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Human-readable output for development
    #[default]
    Development,
    /// JSON structured output for production
    Production,
    /// Bare registry; tests install their own capture layer
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the tracing subscriber
///
/// Only the first call in a process has any effect. A subscriber installed
/// by someone else beforehand is left in place.
///
/// # Profiles
///
/// - **Development**: Human-readable logs, debug level unless `RUST_LOG` says otherwise
/// - **Production**: JSON structured logs, info level unless `RUST_LOG` says otherwise
/// - **Test**: No output
///
/// # Example
///
/// ```
/// use logfacade_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        // try_init: an already-installed global subscriber wins
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
                )
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init().map_err(Into::into),
        };
    });
}

/// Initialize the configured profile and bind the configured backend to [`Log`]
///
/// Returns the logger that was bound before.
pub fn install(config: &FacadeConfig) -> Arc<dyn Logger> {
    init(config.profile);
    Log::set_logger(config.build_logger())
}
