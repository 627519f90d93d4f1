//! Configuration
//!
//! Registry configuration is layered with figment: built-in defaults, then
//! an optional `extreg.toml`, then `EXTREG_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    LoggingConfig, NamespaceConfig, RegistryConfig, ResourceConfig, ScanConfig,
};
