//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the application
//! configuration from the configuration file
//! (`~/.config/gradnet/config.toml`).

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use gradnet_core::config::AppConfig;
use gradnet_core::error::Result;

/// Configuration service that loads and caches the app configuration.
///
/// The file is optional: a missing file yields the defaults, and a file
/// that fails to parse is logged and ignored. Uses RwLock for
/// thread-safe lazy loading.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<AppConfig>>>,
    /// Path of the configuration file.
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Creates a new ConfigService over the default config path.
    ///
    /// The configuration is loaded lazily on first access to avoid
    /// blocking during initialization.
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            path: Self::default_config_path(),
        }
    }

    /// Creates a ConfigService reading from an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config: Arc::new(RwLock::new(None)),
            path: Some(path),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> AppConfig {
        // Check if already cached
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = match self.load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("[ConfigService] Falling back to defaults: {}", e);
                AppConfig::default()
            }
        };

        // Cache it
        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    /// Loads AppConfig from the config file; missing file means defaults.
    fn load_config(&self) -> Result<AppConfig> {
        let Some(path) = &self.path else {
            return Ok(AppConfig::default());
        };
        if !path.exists() {
            tracing::debug!("[ConfigService] No config file at {:?}, using defaults", path);
            return Ok(AppConfig::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| gradnet_core::GradnetError::config(format!("read {path:?}: {e}")))?;
        let config = toml::from_str(&raw)?;
        tracing::debug!("[ConfigService] Loaded config from {:?}", path);
        Ok(config)
    }

    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gradnet").join("config.toml"))
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
