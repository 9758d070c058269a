//! Facade configuration
//!
//! Loaded from TOML, optionally overridden from the environment:
//!
//! ```toml
//! backend = "tracing"
//! category = "myapp"
//! profile = "production"
//! debug = false
//! debug_scopes = ["net", "storage.cache"]
//! ```
//!
//! Every key is optional.

use crate::backend::{Backend, ConsoleBackend, TracingBackend};
use crate::facade::LogContext;
use crate::logger::Logger;
use crate::logging_facility::Profile;
use crate::registry::LoggerRegistry;
use logfacade_core_types::schema::DEFAULT_CATEGORY;
use logfacade_errors::{LogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

pub const ENV_BACKEND: &str = "LOGFACADE_BACKEND";
pub const ENV_DEBUG: &str = "LOGFACADE_DEBUG";
pub const ENV_DEBUG_SCOPES: &str = "LOGFACADE_DEBUG_SCOPES";

/// Which adapter the facade forwards to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[default]
    Console,
    Tracing,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Console => f.write_str("console"),
            BackendKind::Tracing => f.write_str("tracing"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(BackendKind::Console),
            "tracing" => Ok(BackendKind::Tracing),
            other => Err(LogError::config(format!(
                "unknown backend '{}' (expected console or tracing)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FacadeConfig {
    pub backend: BackendKind,
    /// Category the tracing backend routes under
    pub category: String,
    pub profile: Profile,
    /// Debug gate of the root logger
    pub debug: bool,
    /// Logger names that start with debug enabled, along with everything below them
    pub debug_scopes: Vec<String>,
}

impl Default for FacadeConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::default(),
            category: DEFAULT_CATEGORY.to_string(),
            profile: Profile::default(),
            debug: false,
            debug_scopes: Vec::new(),
        }
    }
}

impl FacadeConfig {
    /// Parse a TOML document
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Config`] on malformed TOML, unknown keys or
    /// invalid values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(LogError::config)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Io`] if the file cannot be read, otherwise as
    /// [`FacadeConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LogError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply overrides from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Config`] if a variable holds an invalid value.
    pub fn apply_env(self) -> Result<Self> {
        self.apply_vars(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any variable lookup
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Config`] if a variable holds an invalid value.
    pub fn apply_vars<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(backend) = lookup(ENV_BACKEND) {
            self.backend = backend.parse()?;
        }
        if let Some(debug) = lookup(ENV_DEBUG) {
            self.debug = parse_flag(&debug)?;
        }
        if let Some(scopes) = lookup(ENV_DEBUG_SCOPES) {
            self.debug_scopes = scopes
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
        Ok(self)
    }

    pub fn build_backend(&self) -> Arc<dyn Backend> {
        match self.backend {
            BackendKind::Console => Arc::new(ConsoleBackend::new()),
            BackendKind::Tracing => Arc::new(TracingBackend::with_category(self.category.clone())),
        }
    }

    /// Root logger of a registry built from this configuration
    pub fn build_logger(&self) -> Arc<dyn Logger> {
        let registry = LoggerRegistry::builder(self.build_backend())
            .debug_scopes(self.debug_scopes.iter().cloned())
            .build();
        let root = registry.root();
        if self.debug {
            root.set_debug_enabled(true);
        }
        root
    }

    pub fn build_context(&self) -> LogContext {
        LogContext::new(self.build_logger())
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(LogError::config(format!(
            "invalid boolean '{}' for {}",
            other, ENV_DEBUG
        ))),
    }
}
