//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values, then validates the result.

use crate::config::RegistryConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use extreg_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `RegistryConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `EXTREG_LOGGING__LEVEL`)
    pub fn load(&self) -> Result<RegistryConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(RegistryConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let config: RegistryConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_registry_config(&config)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &RegistryConfig, path: P) -> Result<()> {
        let toml_string = toml::to_string_pretty(config)
            .config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a registry configuration
///
/// Also used by contexts built from configurations that never went through
/// the loader.
pub fn validate_registry_config(config: &RegistryConfig) -> Result<()> {
    validate_namespace_config(config)?;
    validate_resource_config(config)?;
    validate_logging_config(config)?;
    Ok(())
}

fn validate_namespace_config(config: &RegistryConfig) -> Result<()> {
    let prefixes = config.namespaces.ordered();
    for prefix in prefixes {
        if prefix.is_empty() {
            return Err(Error::configuration("Descriptor namespace cannot be empty"));
        }
        if !prefix.ends_with('/') {
            return Err(Error::configuration(format!(
                "Descriptor namespace {prefix} must end with '/'"
            )));
        }
    }
    for (index, prefix) in prefixes.iter().enumerate() {
        if prefixes[index + 1..].contains(prefix) {
            return Err(Error::configuration(format!(
                "Descriptor namespace {prefix} is configured twice"
            )));
        }
    }
    Ok(())
}

fn validate_resource_config(config: &RegistryConfig) -> Result<()> {
    if let Some(missing) = config.resources.roots.iter().find(|root| !root.is_dir()) {
        return Err(Error::configuration(format!(
            "Resource root {} is not a directory",
            missing.display()
        )));
    }
    Ok(())
}

fn validate_logging_config(config: &RegistryConfig) -> Result<()> {
    parse_log_level(&config.logging.level).map(|_| ())
}
