//! Configuration types

use crate::constants::DEFAULT_LOG_LEVEL;
use extreg_domain::constants::{
    INTERNAL_DESCRIPTOR_DIR, LEGACY_DESCRIPTOR_DIR, STABLE_DESCRIPTOR_DIR, TEST_DESCRIPTOR_DIR,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration of an extension context
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RegistryConfig {
    /// Where descriptor resources are read from
    pub resources: ResourceConfig,

    /// Descriptor namespace prefixes
    pub namespaces: NamespaceConfig,

    /// Component scanning
    pub scan: ScanConfig,

    /// Logging
    pub logging: LoggingConfig,
}

/// Descriptor resource locations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResourceConfig {
    /// Directories searched for descriptor files, in order
    pub roots: Vec<PathBuf>,

    /// Include the embedded built-in descriptors ahead of the roots
    pub builtins: bool,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            builtins: true,
        }
    }
}

/// Descriptor namespace prefixes, in precedence order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NamespaceConfig {
    /// Internal-priority namespace
    pub internal: String,

    /// Stable namespace
    pub stable: String,

    /// Test-override namespace
    pub test: String,

    /// Legacy-compatibility namespace
    pub legacy: String,
}

impl NamespaceConfig {
    /// Prefixes in the order descriptors are read
    pub fn ordered(&self) -> [&str; 4] {
        [&self.internal, &self.stable, &self.test, &self.legacy]
    }
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            internal: INTERNAL_DESCRIPTOR_DIR.to_string(),
            stable: STABLE_DESCRIPTOR_DIR.to_string(),
            test: TEST_DESCRIPTOR_DIR.to_string(),
            legacy: LEGACY_DESCRIPTOR_DIR.to_string(),
        }
    }
}

/// Component scanning configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    /// Type namespaces scanned for component-marked types
    pub namespaces: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily-rolling file in addition to stdout
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}
