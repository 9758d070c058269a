//! Adapter onto the `tracing` ecosystem
//!
//! Each record becomes a `tracing` event at the matching severity, carrying
//! the logger name and the backend's category as fields. Whatever subscriber
//! the process installed (see `logging_facility::init`) renders it.

use super::Backend;
use logfacade_core_types::schema::DEFAULT_CATEGORY;
use logfacade_core_types::Level;
use logfacade_errors::Result;

/// Backend forwarding records as `tracing` events
#[derive(Debug, Clone)]
pub struct TracingBackend {
    category: String,
}

impl TracingBackend {
    /// Tracing backend using the default category
    pub fn new() -> Self {
        Self::with_category(DEFAULT_CATEGORY)
    }

    /// Tracing backend routing under `category`
    pub fn with_category(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Default for TracingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for TracingBackend {
    fn name(&self) -> &str {
        "tracing"
    }

    fn emit(&self, level: Level, logger: &str, message: &str) -> Result<()> {
        let category = self.category.as_str();
        match level {
            Level::Debug => tracing::debug!(logger, category, "{}", message),
            Level::Info => tracing::info!(logger, category, "{}", message),
            Level::Warn => tracing::warn!(logger, category, "{}", message),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category() {
        assert_eq!(TracingBackend::new().category(), DEFAULT_CATEGORY);
        assert_eq!(TracingBackend::with_category("app").category(), "app");
    }

    #[test]
    fn test_emit_without_subscriber_is_ok() {
        let backend = TracingBackend::new();
        for level in Level::ALL {
            assert!(backend.emit(level, "app", "no subscriber").is_ok());
        }
    }
}
