use logfacade_core::{Backend, Level, LogError, Result};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Display argument that counts how often it was formatted
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CountingArg {
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl CountingArg {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl fmt::Display for CountingArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.calls.fetch_add(1, Ordering::SeqCst);
        f.write_str("counted")
    }
}

/// Backend whose every emit fails
#[allow(dead_code)]
pub struct FailingBackend;

impl Backend for FailingBackend {
    fn name(&self) -> &str {
        "failing"
    }

    fn emit(&self, _level: Level, _logger: &str, _message: &str) -> Result<()> {
        Err(LogError::backend(self.name(), "sink unavailable"))
    }
}

/// Backend whose every emit panics
#[allow(dead_code)]
pub struct PanickingBackend;

impl Backend for PanickingBackend {
    fn name(&self) -> &str {
        "panicking"
    }

    fn emit(&self, _level: Level, _logger: &str, _message: &str) -> Result<()> {
        panic!("backend exploded")
    }
}

/// Display argument that panics when formatted
#[allow(dead_code)]
pub struct PanickingArg;

impl fmt::Display for PanickingArg {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        panic!("argument exploded")
    }
}
