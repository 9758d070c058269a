#![allow(clippy::unwrap_used, clippy::expect_used)]

use logfacade_core::logging_facility::MemoryBackend;
use logfacade_core::{log_debug, log_info, log_warn, Level, Log, LogContext, LoggerRegistry};
use std::cell::Cell;
use std::sync::Arc;

#[test]
fn test_macros_on_logger() {
    let backend = MemoryBackend::new();
    let logger = LoggerRegistry::new(Arc::new(backend.clone())).get_logger("macros");

    log_info!(logger, "testing {0} {1}", "LoggerLog", "info");
    log_warn!(logger, "disk at {0}%", 93,);

    backend.assert_emitted(Level::Info, "testing LoggerLog info");
    backend.assert_emitted(Level::Warn, "disk at 93%");
}

#[test]
fn test_macros_on_context() {
    let backend = MemoryBackend::new();
    let context = LogContext::with_backend(Arc::new(backend.clone()));

    log_info!(context, "no args");
    context.set_debug_enabled(true);
    log_debug!(context, "now {0}", "visible");

    assert_eq!(
        backend.messages(),
        vec!["no args".to_string(), "now visible".to_string()]
    );
}

#[test]
fn test_debug_macro_skips_argument_evaluation() {
    let backend = MemoryBackend::new();
    let logger = LoggerRegistry::new(Arc::new(backend.clone())).get_logger("lazy");
    let evaluated = Cell::new(0);
    let expensive = || {
        evaluated.set(evaluated.get() + 1);
        "costly"
    };

    log_debug!(logger, "value {0}", expensive());
    assert_eq!(evaluated.get(), 0);
    assert!(backend.records().is_empty());

    logger.set_debug_enabled(true);
    log_debug!(logger, "value {0}", expensive());
    assert_eq!(evaluated.get(), 1);
    backend.assert_emitted(Level::Debug, "value costly");
}

#[test]
fn test_macros_on_static_facade() {
    let backend = MemoryBackend::new();
    let bound = LoggerRegistry::new(Arc::new(backend.clone())).get_logger("facade");
    let previous = Log::set_logger(bound);

    log_info!(Log, "hello {0}", 1);
    log_debug!(Log, "hidden {0}", 2);
    Log::set_debug_enabled(true);
    log_debug!(Log, "shown {0}", 3);
    log_warn!(Log, "careful {0}", 4,);
    log_info!("implicit {0}", 5);

    Log::set_logger(previous);

    assert_eq!(
        backend.messages(),
        vec![
            "hello 1".to_string(),
            "shown 3".to_string(),
            "careful 4".to_string(),
            "implicit 5".to_string(),
        ]
    );
    backend.assert_emitted(Level::Debug, "shown 3");
}
