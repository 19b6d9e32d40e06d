//! Config persistence
//!
//! Saves and loads [`ChessConfig`] to/from a JSON file.
//!
//! # File Location
//!
//! By default the config lives in `chess.json` inside the user's
//! configuration directory, falling back to the working directory when the
//! platform has none. Callers can pass an explicit path instead.
//!
//! # Error Handling
//!
//! [`read_config`] and [`save_config`] return [`CoreResult`]. [`load_config`]
//! is the lenient front door: a missing, unreadable or invalid file falls
//! back to defaults with a warning.

use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::config::ChessConfig;
use super::error::CoreResult;

/// Config filename
const CONFIG_FILENAME: &str = "chess.json";

/// Resolve the default config file path
///
/// E.g. `~/.config/nexuschess/chess.json` on Linux.
pub fn default_config_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "nexus", "NexusChess") {
        proj_dirs.config_dir().join(CONFIG_FILENAME)
    } else {
        PathBuf::from(CONFIG_FILENAME)
    }
}

/// Read and validate a config file
pub fn read_config(path: &Path) -> CoreResult<ChessConfig> {
    let contents = fs::read_to_string(path)?;
    let config: ChessConfig = serde_json::from_str(&contents)?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path` (or the default location), defaults on any failure
pub fn load_config(path: Option<&Path>) -> ChessConfig {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);

    if !config_path.exists() {
        info!("[CONFIG] No config file found at {:?}. Using defaults.", config_path);
        return ChessConfig::default();
    }

    match read_config(&config_path) {
        Ok(config) => {
            info!("[CONFIG] Loaded config from {:?}", config_path);
            config
        }
        Err(e) => {
            warn!(
                "[CONFIG] Failed to load config at {:?}: {}. Using defaults.",
                config_path, e
            );
            ChessConfig::default()
        }
    }
}

/// Write config as pretty JSON, creating parent directories as needed
pub fn save_config(config: &ChessConfig, path: &Path) -> CoreResult<()> {
    config.validate()?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    info!("[CONFIG] Saved config to {:?}", path);
    Ok(())
}
