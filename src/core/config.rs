//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.landmarks/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::store::default_state_dir;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LandmarksConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub url_scheme: Option<String>,
    pub restore_on_launch: Option<bool>,
    pub save_on_background: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub state_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_URL_SCHEME: &str = "landmarks";
pub const DEFAULT_LOG_FILE: &str = "landmarks.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub url_scheme: String,
    pub restore_on_launch: bool,
    pub save_on_background: bool,
    /// `None` = keep navigation state in memory only.
    pub state_dir: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values given on the command line. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub state_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub no_restore: bool,
    pub ephemeral: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.landmarks/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".landmarks").join("config.toml"))
}

/// Load config from `~/.landmarks/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `LandmarksConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<LandmarksConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(LandmarksConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<LandmarksConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(LandmarksConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: LandmarksConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Landmarks Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# url_scheme = "landmarks"           # Scheme used when building share links
# restore_on_launch = true           # Restore the saved tabs and stacks at startup
# save_on_background = true          # Save navigation state when the app exits

# [storage]
# state_dir = "/home/me/.landmarks/state"   # Or set LANDMARKS_STATE_DIR

# [logging]
# level = "debug"                    # "error", "warn", "info", "debug", "trace", "off"
# file = "landmarks.log"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &LandmarksConfig, cli: &CliOverrides) -> ResolvedConfig {
    // State dir: CLI → env → config → default. --ephemeral wins over all of them.
    let state_dir = if cli.ephemeral {
        None
    } else {
        cli.state_dir
            .clone()
            .or_else(|| std::env::var_os("LANDMARKS_STATE_DIR").map(PathBuf::from))
            .or_else(|| config.storage.state_dir.clone())
            .or_else(default_state_dir)
    };

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| std::env::var("LANDMARKS_LOG_LEVEL").ok())
        .or_else(|| config.logging.level.clone())
        .and_then(|level| match level.parse::<LevelFilter>() {
            Ok(filter) => Some(filter),
            Err(_) => {
                warn!("Unknown log level {:?}, using default", level);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        url_scheme: config
            .general
            .url_scheme
            .clone()
            .unwrap_or_else(|| DEFAULT_URL_SCHEME.to_string()),
        restore_on_launch: !cli.no_restore && config.general.restore_on_launch.unwrap_or(true),
        save_on_background: config.general.save_on_background.unwrap_or(true),
        state_dir,
        log_level,
        log_file: config
            .logging
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
    }
}
