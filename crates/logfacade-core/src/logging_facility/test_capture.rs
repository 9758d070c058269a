//! Test capture mode for deterministic logging assertions
//!
//! Two capture points are provided:
//! - [`MemoryBackend`] records what a logger forwarded to its backend
//! - [`init_test_capture`] installs a tracing layer that records what
//!   [`TracingBackend`](crate::TracingBackend) turned into `tracing` events

use crate::backend::Backend;
use logfacade_core_types::schema::{FIELD_CATEGORY, FIELD_LOGGER, FIELD_MESSAGE};
use logfacade_core_types::Level;
use logfacade_errors::Result;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// A record as received by a [`MemoryBackend`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: Level,
    pub logger: String,
    pub message: String,
}

/// Backend keeping every record in memory
///
/// Clones share the same record list, so a test can hand one clone to a
/// registry and inspect another.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all captured records
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Messages of all captured records, in emit order
    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }

    /// Count records matching a predicate
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedRecord) -> bool,
    {
        self.records().iter().filter(|r| predicate(r)).count()
    }

    /// Assert that a record with this level and message was emitted
    ///
    /// # Panics
    ///
    /// Panics if no such record was captured
    pub fn assert_emitted(&self, level: Level, message: &str) {
        let records = self.records();
        let found = records
            .iter()
            .any(|r| r.level == level && r.message == message);
        assert!(
            found,
            "Expected record level={} message={:?} not found in {} captured records",
            level,
            message,
            records.len()
        );
    }

    /// Clear all captured records
    pub fn clear(&self) {
        self.records.lock().map(|mut r| r.clear()).ok();
    }
}

impl Backend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    fn emit(&self, level: Level, logger: &str, message: &str) -> Result<()> {
        self.records
            .lock()
            .map(|mut records| {
                records.push(CapturedRecord {
                    level,
                    logger: logger.to_string(),
                    message: message.to_string(),
                })
            })
            .ok();
        Ok(())
    }
}

/// A `tracing` event as emitted by the tracing backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TracedEvent {
    pub level: tracing::Level,
    pub logger: Option<String>,
    pub category: Option<String>,
    pub message: Option<String>,
}

impl TracedEvent {
    fn is_from(&self, logger: &str) -> bool {
        self.logger.as_deref() == Some(logger)
    }
}

impl Visit for TracedEvent {
    fn record_str(&mut self, field: &Field, value: &str) {
        let slot = match field.name() {
            FIELD_LOGGER => &mut self.logger,
            FIELD_CATEGORY => &mut self.category,
            FIELD_MESSAGE => &mut self.message,
            _ => return,
        };
        *slot = Some(value.to_string());
    }

    // The message arrives as `format_args!`, not as a str
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_str(field, &format!("{:?}", value));
    }
}

struct CaptureLayer {
    events: Arc<Mutex<Vec<TracedEvent>>>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut traced = TracedEvent {
            level: *event.metadata().level(),
            logger: None,
            category: None,
            message: None,
        };
        event.record(&mut traced);
        self.events.lock().map(|mut e| e.push(traced)).ok();
    }
}

/// Shared view of every event the capture layer has seen
#[derive(Clone)]
pub struct TracingCapture {
    events: Arc<Mutex<Vec<TracedEvent>>>,
}

impl TracingCapture {
    /// Events forwarded on behalf of the named logger, in emit order
    pub fn events_for(&self, logger: &str) -> Vec<TracedEvent> {
        self.events
            .lock()
            .map(|e| e.iter().filter(|t| t.is_from(logger)).cloned().collect())
            .unwrap_or_default()
    }

    /// Number of events of `logger` at `level`
    pub fn count_at(&self, logger: &str, level: tracing::Level) -> usize {
        self.events_for(logger)
            .iter()
            .filter(|t| t.level == level)
            .count()
    }

    /// Assert that `logger` emitted `message`
    ///
    /// # Panics
    ///
    /// Panics if no such event was captured
    pub fn assert_traced(&self, logger: &str, message: &str) {
        let events = self.events_for(logger);
        assert!(
            events.iter().any(|t| t.message.as_deref() == Some(message)),
            "Expected event logger={} message={:?} not among {} events of that logger",
            logger,
            message,
            events.len()
        );
    }
}

static GLOBAL_CAPTURE: OnceLock<TracingCapture> = OnceLock::new();

/// Install the capture layer as the global subscriber, once per process
///
/// Tests in the same process see each other's events, so filter by a logger
/// name unique to the test.
///
/// # Example
///
/// ```
/// use logfacade_core::logging_facility::test_capture::init_test_capture;
/// use logfacade_core::{Backend, TracingBackend};
///
/// let capture = init_test_capture();
/// TracingBackend::new().emit_info("doc.example", "hello").unwrap();
/// capture.assert_traced("doc.example", "hello");
/// ```
pub fn init_test_capture() -> TracingCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let capture = TracingCapture {
                events: Arc::new(Mutex::new(Vec::new())),
            };
            let layer = CaptureLayer {
                events: capture.events.clone(),
            };
            let _ = tracing_subscriber::registry().with(layer).try_init();
            capture
        })
        .clone()
}
