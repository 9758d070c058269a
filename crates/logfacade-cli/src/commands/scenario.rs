//! Scenario command
//!
//! Usage: logfacade scenario [--debug]
//!
//! Runs the reference sequence through the static facade: a debug message
//! that only appears with `--debug`, then an info and a warn message.

use super::load_config;
use clap::Args;
use logfacade_core::logging_facility::install;
use logfacade_core::{BackendKind, Log};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ScenarioArgs {
    /// Configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Backend to forward to (console or tracing)
    #[arg(short, long)]
    pub backend: Option<BackendKind>,

    /// Enable debug output on the root logger
    #[arg(short, long)]
    pub debug: bool,
}

/// Execute scenario command
pub fn execute(args: ScenarioArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args.config.as_deref(), args.backend, args.debug)?;
    install(&config);

    Log::debug("testing {0} {1}", &[&"LoggerLog", &"debug"]);
    Log::info("testing {0} {1}", &[&"LoggerLog", &"info"]);
    Log::warn("testing {0} {1}", &[&"LoggerLog", &"warn"]);

    Ok(())
}
