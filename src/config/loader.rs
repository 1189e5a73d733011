//! Configuration Loader
//!
//! Layered loading for [`ClientConfig`]: defaults, then the first config
//! file found in the standard locations, then environment variable
//! overrides. A broken config file is skipped rather than fatal so the
//! client handle can always be constructed.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::ClientConfig;
use crate::constants::env;
use crate::error::{ClientError, ClientResult};

impl ClientConfig {
    /// Load configuration from environment variables and config file
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file (first match in [`Self::find_config_file`] order)
    /// 3. Default values
    ///
    /// Infallible: a missing or malformed config file is logged at debug
    /// level and loading continues with defaults, preserving the contract
    /// that handle construction always succeeds.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(config_path) = Self::find_config_file() {
            debug!("Loading client config from: {}", config_path.display());
            match Self::load_from_file(&config_path) {
                Ok(file_config) => config = file_config,
                Err(e) => {
                    debug!("Failed to load config file, continuing with defaults: {e}");
                }
            }
        }

        config.apply_env_overrides();

        debug!("Loaded client configuration: {config:?}");
        config
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> ClientResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ClientError::config_error(format!("Failed to read config file: {e}")))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ClientError::config_error(format!("Failed to parse config file: {e}")))?;

        Ok(config)
    }

    /// Find the config file in standard locations
    pub fn find_config_file() -> Option<PathBuf> {
        let mut candidates = vec![
            PathBuf::from("./prepmate-client.toml"),
            PathBuf::from("./config/prepmate-client.toml"),
        ];
        if let Some(home_dir) = dirs::home_dir() {
            candidates.push(home_dir.join(".prepmate").join("client.toml"));
        }
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("prepmate").join("client.toml"));
        }

        candidates.into_iter().find(|path| path.is_file())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env::GEMINI_API_KEY) {
            self.credentials.gemini_api_key = Some(api_key);
        }
        if let Ok(id) = std::env::var(env::PREPMATE_APP_ID) {
            self.app.id = id;
        }
        if let Ok(name) = std::env::var(env::PREPMATE_APP_NAME) {
            self.app.name = name;
        }
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> ClientResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClientError::config_error(format!("Failed to create config directory: {e}"))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ClientError::config_error(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)
            .map_err(|e| ClientError::config_error(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Default config file path under the user's home directory
    pub fn default_config_path() -> ClientResult<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| ClientError::config_error("Could not determine home directory"))?;

        Ok(home_dir.join(".prepmate").join("client.toml"))
    }
}
