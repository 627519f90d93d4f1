//! # extreg
//!
//! Runtime extension registry: service categories declare their providers
//! in descriptor files, each provider is built once on first request, and
//! every value the registry builds has its marked attributes injected.
//!
//! ## Example
//!
//! ```ignore
//! use extreg::{ExtensionContext, ServiceContract};
//!
//! pub trait CacheService: Send + Sync {
//!     fn label(&self) -> &str;
//! }
//!
//! impl ServiceContract for dyn CacheService {
//!     const NAME: &'static str = "pkg.CacheService";
//! }
//!
//! // META-INF/extreg/pkg.CacheService:
//! //   fast=pkg.FastCache
//!
//! let context = extreg::context_from_file("extreg.toml")?;
//! let fast = context.providers_loader::<dyn CacheService>()?.get_provider("fast")?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Descriptors, markers, instances, ports and errors
//! - `infrastructure` - Cache, registries, injection engine, config and logging

use std::path::Path;

/// Domain layer - descriptors, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use extreg_domain::*;
}

/// Infrastructure layer - contexts, registries, injection, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use extreg_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the registration macro
pub use extreg_domain::contract_binding;

// Re-export the runtime entry points
pub use infrastructure::config::{ConfigLoader, RegistryConfig};
pub use infrastructure::logging::init_logging;
pub use infrastructure::{
    CategoryRegistry, ComponentScanner, EmbeddedResources, ExtensionContext, StaticTypeCatalog,
};

/// Load configuration from `path` (plus defaults and environment) and build
/// a context from it
///
/// A missing file leaves the defaults in place.
pub fn context_from_file<P: AsRef<Path>>(path: P) -> Result<ExtensionContext> {
    let config = ConfigLoader::new().with_config_path(path).load()?;
    ExtensionContext::from_config(&config)
}
