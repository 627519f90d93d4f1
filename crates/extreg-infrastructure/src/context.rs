//! Extension context
//!
//! Everything the registries of one process share: the global cache, the
//! type catalog, the descriptor resources and namespace layout, and the
//! injection engine. Contexts are independent of one another, so tests
//! build isolated ones instead of sharing process-wide statics.
//!
//! ```ignore
//! let context = ExtensionContext::builder()
//!     .with_catalog(StaticTypeCatalog::with_builtins().with(&CACHE_SERVICE_CONTRACT))
//!     .with_resources(EmbeddedResources::with_builtins().with(path, "fast=pkg.FastCache"))
//!     .build();
//!
//! let fast = context.providers_loader::<dyn CacheService>()?.get_provider("fast")?;
//! ```

use std::sync::Arc;

use extreg_domain::constants::INJECTION_CATEGORY_NAME;
use extreg_domain::error::{Error, Result};
use extreg_domain::ports::{InjectionProvider, ResourceLoader, ServiceContract, TypeCatalog};
use extreg_domain::value_objects::{ErasedValue, Instance, TypeHandle, registry_alias};
use parking_lot::Mutex;
use tracing::{debug, error};

use crate::cache::GlobalCache;
use crate::catalog::LinkedTypeCatalog;
use crate::config::loader::validate_registry_config;
use crate::config::{NamespaceConfig, RegistryConfig, ScanConfig};
use crate::injection::{InjectionAdapter, InjectionEngine, InjectionReport};
use crate::loader::CategoryRegistry;
use crate::resources::{DirectoryResources, EmbeddedResources, LayeredResources};
use crate::scan::ComponentScanner;

/// Shared state of every registry in one process
///
/// Cloning is cheap; clones share the same cache.
#[derive(Clone)]
pub struct ExtensionContext {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    cache: Arc<GlobalCache>,
    catalog: Arc<dyn TypeCatalog>,
    resources: Arc<dyn ResourceLoader>,
    namespaces: NamespaceConfig,
    scan: ScanConfig,
    engine: InjectionEngine,
    // Held only while a registry is created, never across a bootstrap
    creation_lock: Mutex<()>,
}

impl ExtensionContext {
    /// Context over the link-time catalog and the built-in descriptors
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building a context
    pub fn builder() -> ExtensionContextBuilder {
        ExtensionContextBuilder::default()
    }

    /// Context described by a configuration
    ///
    /// Resources are the embedded built-ins (if enabled) followed by the
    /// configured directories; types come from the link-time catalog.
    pub fn from_config(config: &RegistryConfig) -> Result<Self> {
        validate_registry_config(config)?;

        let mut resources = LayeredResources::new();
        if config.resources.builtins {
            resources = resources.with(EmbeddedResources::with_builtins());
        }
        if !config.resources.roots.is_empty() {
            resources = resources.with(DirectoryResources::new(&config.resources.roots));
        }

        Ok(Self::builder()
            .with_resources(resources)
            .with_namespaces(config.namespaces.clone())
            .with_scan(config.scan.clone())
            .build())
    }

    /// The global cache
    pub fn cache(&self) -> &Arc<GlobalCache> {
        &self.inner.cache
    }

    /// The type catalog
    pub fn catalog(&self) -> &Arc<dyn TypeCatalog> {
        &self.inner.catalog
    }

    /// The descriptor resources
    pub fn resources(&self) -> &Arc<dyn ResourceLoader> {
        &self.inner.resources
    }

    /// The descriptor namespace layout
    pub fn namespaces(&self) -> &NamespaceConfig {
        &self.inner.namespaces
    }

    /// The injection engine
    pub fn engine(&self) -> &InjectionEngine {
        &self.inner.engine
    }

    /// Registry of category `C`, created on first request
    ///
    /// Creating the registry of any category other than the injection
    /// category first bootstraps the injection adapter.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidCategory`] if `C::NAME` is not a catalogued contract
    /// carrying the service category marker.
    pub fn providers_loader<C: ?Sized + ServiceContract>(
        &self,
    ) -> Result<Arc<CategoryRegistry<C>>> {
        let category = self.validate_category(C::NAME)?;
        let alias = registry_alias(C::NAME);
        if let Some(registry) = self.lookup_registry::<C>(&alias)? {
            return Ok(registry);
        }

        let adapter = if C::NAME == INJECTION_CATEGORY_NAME {
            None
        } else {
            Some(self.bootstrap()?)
        };

        let _guard = self.inner.creation_lock.lock();
        if let Some(registry) = self.lookup_registry::<C>(&alias)? {
            return Ok(registry);
        }
        let registry: Arc<ErasedValue> =
            Arc::new(CategoryRegistry::<C>::new(self.clone(), category, adapter));
        let published = self.inner.cache.add_registry_if_absent(&alias, registry);
        debug!(category = C::NAME, "Created category registry");
        downcast_registry::<C>(published)
    }

    /// Bootstrap the injection category, once
    pub fn bootstrap(&self) -> Result<Arc<InjectionAdapter>> {
        if let Some(adapter) = self.inner.cache.adapter() {
            return Ok(adapter);
        }
        self.providers_loader::<dyn InjectionProvider>()?
            .load_injection_adapter()
    }

    /// Populate a value of type `handle` under construction
    pub fn inject(&self, handle: TypeHandle, target: &mut ErasedValue) -> InjectionReport {
        self.inner.engine.inject(handle, target)
    }

    /// Construct, inject and publish a value of `handle` under `alias`
    ///
    /// If another thread publishes under the alias first, its instance is
    /// returned and the value built here is dropped.
    ///
    /// # Errors
    ///
    /// [`Error::MissingConstructor`] if the type cannot be constructed and
    /// [`Error::Instantiation`] if its constructor panics.
    pub fn instantiate(&self, alias: &str, handle: TypeHandle) -> Result<Instance> {
        let construct = handle.constructor().ok_or_else(|| {
            let err = Error::missing_constructor(handle.name());
            error!(error = %err, alias, "Cannot construct provider");
            err
        })?;
        let mut value = std::panic::catch_unwind(construct).map_err(|panic| {
            let err = Error::instantiation(alias, panic_message(panic.as_ref()));
            error!(error = %err, "Provider constructor panicked");
            err
        })?;

        let report = self.inject(handle, &mut *value);
        debug!(
            alias,
            injected = report.injected.len(),
            skipped = report.skipped.len(),
            "Constructed instance"
        );
        Ok(self
            .inner
            .cache
            .add_instance_if_absent(alias, Instance::from_boxed(handle, value)))
    }

    /// Scan the configured namespaces for components
    pub fn scan_components(&self) -> Result<Vec<String>> {
        ComponentScanner::new(self).scan(&self.inner.scan.namespaces)
    }

    fn validate_category(&self, name: &str) -> Result<TypeHandle> {
        let invalid = |reason: &str| {
            let err = Error::invalid_category(name, reason);
            error!(error = %err, "Rejected service category");
            err
        };
        let handle = self
            .inner
            .catalog
            .resolve(name)
            .ok_or_else(|| invalid("not a catalogued type"))?;
        if !handle.is_contract() {
            return Err(invalid("not a contract type"));
        }
        if !handle.is_service_category() {
            return Err(invalid("missing the service category marker"));
        }
        Ok(handle)
    }

    fn lookup_registry<C: ?Sized + ServiceContract>(
        &self,
        alias: &str,
    ) -> Result<Option<Arc<CategoryRegistry<C>>>> {
        self.inner
            .cache
            .lookup_registry(alias)
            .map(downcast_registry::<C>)
            .transpose()
    }
}

impl Default for ExtensionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExtensionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionContext")
            .field("cache", &self.inner.cache)
            .field("namespaces", &self.inner.namespaces)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ExtensionContext`]
#[derive(Default)]
pub struct ExtensionContextBuilder {
    catalog: Option<Arc<dyn TypeCatalog>>,
    resources: Option<Arc<dyn ResourceLoader>>,
    namespaces: NamespaceConfig,
    scan: ScanConfig,
}

impl ExtensionContextBuilder {
    /// Use a type catalog (default: [`LinkedTypeCatalog`])
    pub fn with_catalog<T: TypeCatalog + 'static>(mut self, catalog: T) -> Self {
        self.catalog = Some(Arc::new(catalog));
        self
    }

    /// Use a shared type catalog
    pub fn with_shared_catalog(mut self, catalog: Arc<dyn TypeCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Use a resource loader (default: [`EmbeddedResources::with_builtins`])
    pub fn with_resources<R: ResourceLoader + 'static>(mut self, resources: R) -> Self {
        self.resources = Some(Arc::new(resources));
        self
    }

    /// Use a shared resource loader
    pub fn with_shared_resources(mut self, resources: Arc<dyn ResourceLoader>) -> Self {
        self.resources = Some(resources);
        self
    }

    /// Use a descriptor namespace layout
    pub fn with_namespaces(mut self, namespaces: NamespaceConfig) -> Self {
        self.namespaces = namespaces;
        self
    }

    /// Use a component scanning configuration
    pub fn with_scan(mut self, scan: ScanConfig) -> Self {
        self.scan = scan;
        self
    }

    /// Build the context with a fresh, empty cache
    pub fn build(self) -> ExtensionContext {
        let cache = Arc::new(GlobalCache::new());
        let catalog = self
            .catalog
            .unwrap_or_else(|| Arc::new(LinkedTypeCatalog::new()));
        let resources = self
            .resources
            .unwrap_or_else(|| Arc::new(EmbeddedResources::with_builtins()));
        let engine = InjectionEngine::new(cache.clone(), catalog.clone());
        ExtensionContext {
            inner: Arc::new(ContextInner {
                cache,
                catalog,
                resources,
                namespaces: self.namespaces,
                scan: self.scan,
                engine,
                creation_lock: Mutex::new(()),
            }),
        }
    }
}

fn downcast_registry<C: ?Sized + ServiceContract>(
    registry: Arc<ErasedValue>,
) -> Result<Arc<CategoryRegistry<C>>> {
    registry
        .downcast::<CategoryRegistry<C>>()
        .map_err(|_| Error::type_mismatch(std::any::type_name::<CategoryRegistry<C>>(), C::NAME))
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    panic
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "constructor panicked".to_string())
}
