use std::path::PathBuf;

use anyhow::Context;
use pixview_core::config::ViewerConfig;
use pixview_core::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use tracing::{info, warn};

/// Resolve the viewer config, falling back to defaults on any problem.
pub fn load_viewer_config() -> ViewerConfig {
    match try_load() {
        Ok(Some((path, config))) => {
            info!(path = %path.display(), "loaded config");
            config
        }
        Ok(None) => ViewerConfig::default(),
        Err(e) => {
            warn!("{e:#}; using defaults");
            ViewerConfig::default()
        }
    }
}

fn try_load() -> anyhow::Result<Option<(PathBuf, ViewerConfig)>> {
    let path = match std::env::var_os(CONFIG_ENV_VAR) {
        Some(path) => PathBuf::from(path),
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(None);
            }
            path
        }
    };

    let config = ViewerConfig::load(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    Ok(Some((path, config)))
}
