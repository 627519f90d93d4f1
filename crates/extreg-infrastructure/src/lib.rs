//! # extreg Infrastructure Layer
//!
//! Runtime machinery behind the registry vocabulary of `extreg-domain`.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Global alias, type, instance and registry tables |
//! | [`catalog`] | Link-time and explicitly built type catalogs |
//! | [`resources`] | Embedded, directory and layered descriptor resources |
//! | [`loader`] | Descriptor parsing and per-category registries |
//! | [`injection`] | Injection adapter, built-in providers, wrappers, engine |
//! | [`context`] | Shared per-process state and registry creation |
//! | [`scan`] | Component scanning |
//! | [`config`] | Figment-based configuration |
//! | [`logging`] | Tracing subscriber setup |
//! | [`error_ext`] | Context for foreign errors |
//! | [`constants`] | Infrastructure constants |

pub mod cache;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod context;
pub mod error_ext;
pub mod injection;
pub mod loader;
pub mod logging;
pub mod resources;
pub mod scan;

pub use cache::GlobalCache;
pub use catalog::{LinkedTypeCatalog, StaticTypeCatalog};
pub use config::{ConfigLoader, RegistryConfig};
pub use context::{ExtensionContext, ExtensionContextBuilder};
pub use error_ext::ErrorContext;
pub use injection::{InjectionAdapter, InjectionEngine, InjectionReport};
pub use loader::CategoryRegistry;
pub use resources::{DirectoryResources, EmbeddedResources, LayeredResources};
pub use scan::ComponentScanner;
