//! Logging macros
//!
//! These wrap the facade calls so argument lists don't need to be spelled
//! out as `&[&a, &b]`. Without a target, or with `Log` as the target, they
//! log through the global [`Log`](crate::Log) facade; otherwise they log
//! through anything exposing the logger methods (a
//! [`LogContext`](crate::LogContext) or an `Arc<dyn Logger>`).

/// Log at debug level; arguments are not evaluated while debug is disabled
///
/// # Example
///
/// ```
/// # use logfacade_core::log_debug;
/// use logfacade_core::Log;
///
/// log_debug!("cache miss for {0}", "user:42");
///
/// log_debug!(Log, "cache hit for {0}", "user:7");
///
/// let net = Log::get_logger("net");
/// log_debug!(net, "{0} bytes from {1}", 512, "peer");
/// ```
#[macro_export]
macro_rules! log_debug {
    ($tpl:literal $(, $arg:expr)* $(,)?) => {
        $crate::log_debug!($crate::Log::context(), $tpl $(, $arg)*)
    };
    (Log, $tpl:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_debug!($crate::Log::context(), $tpl $(, $arg)*)
    };
    ($target:expr, $tpl:expr $(, $arg:expr)* $(,)?) => {{
        let target = &$target;
        if target.is_debug_enabled() {
            target.debug($tpl, &[$(&$arg as &dyn ::std::fmt::Display),*]);
        }
    }};
}

/// Log at info level
///
/// # Example
///
/// ```
/// # use logfacade_core::log_info;
/// log_info!("testing {0} {1}", "LoggerLog", "info");
/// ```
#[macro_export]
macro_rules! log_info {
    ($tpl:literal $(, $arg:expr)* $(,)?) => {
        $crate::log_info!($crate::Log::context(), $tpl $(, $arg)*)
    };
    (Log, $tpl:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_info!($crate::Log::context(), $tpl $(, $arg)*)
    };
    ($target:expr, $tpl:expr $(, $arg:expr)* $(,)?) => {
        $target.info($tpl, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}

/// Log at warn level
///
/// # Example
///
/// ```
/// # use logfacade_core::log_warn;
/// log_warn!("retrying {0} in {1}ms", "upload", 250);
/// ```
#[macro_export]
macro_rules! log_warn {
    ($tpl:literal $(, $arg:expr)* $(,)?) => {
        $crate::log_warn!($crate::Log::context(), $tpl $(, $arg)*)
    };
    (Log, $tpl:expr $(, $arg:expr)* $(,)?) => {
        $crate::log_warn!($crate::Log::context(), $tpl $(, $arg)*)
    };
    ($target:expr, $tpl:expr $(, $arg:expr)* $(,)?) => {
        $target.warn($tpl, &[$(&$arg as &dyn ::std::fmt::Display),*])
    };
}
