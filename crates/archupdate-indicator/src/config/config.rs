//! Configuration management for archupdate-indicator.
//!
//! Built-in defaults, overridden by an optional TOML file in the user config
//! directory, overridden by environment variables. Loaded once at startup.

use crate::{
    AppError, AppResult,
    config::{
        ENV_CHECK_CMD, ENV_CHECK_TIMEOUT, ENV_ICONS_FOLDER, ENV_TERMINAL, ENV_UPDATE_CMD,
        ENV_UPDATE_PERIOD, FileConfig,
    },
};

use std::{fs, panic::Location, path::PathBuf, time::Duration};

use directories::ProjectDirs;
use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Effective runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interval between automatic checks.
    pub update_period: Duration,
    /// Terminal emulator supporting `-e`.
    pub terminal: String,
    /// Shell command run inside the terminal to install updates.
    pub update_cmd: String,
    /// Folder holding the three status icons.
    pub icons_folder: PathBuf,
    /// Program listing pending updates.
    pub check_cmd: String,
    /// Kill the listing program after this long. `None` waits forever.
    pub check_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from the config file (if any) and the environment.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let contents = match Self::config_path() {
            Some(config_path) if config_path.exists() => {
                let contents =
                    fs::read_to_string(&config_path).map_err(|e| AppError::ConfigError {
                        reason: format!("Failed to read config {:?}: {}", config_path, e),
                        location: ErrorLocation::from(Location::caller()),
                    })?;
                info!(config_path = ?config_path, "Configuration file loaded");
                Some(contents)
            }
            Some(config_path) => {
                debug!(config_path = ?config_path, "No configuration file, using defaults");
                None
            }
            None => {
                warn!("Could not determine config directory, using defaults");
                None
            }
        };

        Self::from_sources(contents.as_deref(), |name| std::env::var(name).ok())
    }

    /// Build the configuration from optional file contents and an environment lookup.
    ///
    /// Empty environment values count as unset.
    #[track_caller]
    pub fn from_sources<F>(file_contents: Option<&str>, env: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = match file_contents {
            Some(contents) => {
                toml::from_str::<FileConfig>(contents).map_err(|e| AppError::ConfigError {
                    reason: format!("Failed to parse config: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?
            }
            None => FileConfig::default(),
        };

        let lookup = |name: &str| env(name).filter(|value| !value.trim().is_empty());

        let update_period_ms = match lookup(ENV_UPDATE_PERIOD) {
            Some(value) => parse_millis(ENV_UPDATE_PERIOD, &value)?,
            None => file.update_period_ms,
        };
        if update_period_ms == 0 {
            return Err(AppError::ConfigError {
                reason: "Update period must be greater than zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let check_timeout_ms = match lookup(ENV_CHECK_TIMEOUT) {
            Some(value) => Some(parse_millis(ENV_CHECK_TIMEOUT, &value)?),
            None => file.check_timeout_ms,
        };
        if check_timeout_ms == Some(0) {
            return Err(AppError::ConfigError {
                reason: "Check timeout must be greater than zero".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            update_period: Duration::from_millis(update_period_ms),
            terminal: lookup(ENV_TERMINAL).unwrap_or(file.terminal),
            update_cmd: lookup(ENV_UPDATE_CMD).unwrap_or(file.update_cmd),
            icons_folder: lookup(ENV_ICONS_FOLDER)
                .map(PathBuf::from)
                .unwrap_or(file.icons_folder),
            check_cmd: lookup(ENV_CHECK_CMD).unwrap_or(file.check_cmd),
            check_timeout: check_timeout_ms.map(Duration::from_millis),
        })
    }

    /// Update period in minutes, for log output.
    pub fn update_period_minutes(&self) -> f64 {
        self.update_period.as_secs_f64() / 60.0
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "archupdate-indicator")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }
}

#[track_caller]
fn parse_millis(name: &str, value: &str) -> AppResult<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| AppError::ConfigError {
            reason: format!("{} must be a number of milliseconds, got {:?}: {}", name, value, e),
            location: ErrorLocation::from(Location::caller()),
        })
}
