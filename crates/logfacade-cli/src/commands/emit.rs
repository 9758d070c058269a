//! Emit command
//!
//! Usage: logfacade emit [--level <LEVEL>] [--logger <NAME>] <TEMPLATE> [ARGS]...

use super::load_config;
use clap::Args;
use logfacade_core::logging_facility::install;
use logfacade_core::{BackendKind, Level, Log};
use std::fmt::Display;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Backend to forward to (console or tracing)
    #[arg(short, long)]
    pub backend: Option<BackendKind>,

    /// Enable debug output on the target logger
    #[arg(short, long)]
    pub debug: bool,

    /// Level to emit at (debug, info or warn)
    #[arg(short, long, default_value = "info")]
    pub level: Level,

    /// Dotted logger name (default: root logger)
    #[arg(long)]
    pub logger: Option<String>,

    /// Message template with {0}, {1}, ... placeholders
    pub template: String,

    /// Positional arguments substituted into the template
    pub args: Vec<String>,
}

/// Execute emit command
pub fn execute(args: EmitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(args.config.as_deref(), args.backend, args.debug)?;
    if args.debug {
        if let Some(name) = &args.logger {
            config.debug_scopes.push(name.clone());
        }
    }
    install(&config);

    let logger = match &args.logger {
        Some(name) => Log::get_logger(name),
        None => Log::logger(),
    };
    let values: Vec<&dyn Display> = args.args.iter().map(|a| a as &dyn Display).collect();
    logger.log(args.level, &args.template, &values);

    Ok(())
}
