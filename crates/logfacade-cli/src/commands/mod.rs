pub mod emit;
pub mod scenario;

use logfacade_core::{BackendKind, FacadeConfig, Result};
use std::path::Path;

/// Load configuration from an optional file, then apply environment and flag overrides
pub fn load_config(
    path: Option<&Path>,
    backend: Option<BackendKind>,
    debug: bool,
) -> Result<FacadeConfig> {
    let config = match path {
        Some(path) => FacadeConfig::from_file(path)?,
        None => FacadeConfig::default(),
    };
    let mut config = config.apply_env()?;

    if let Some(backend) = backend {
        config.backend = backend;
    }
    if debug {
        config.debug = true;
    }
    Ok(config)
}
