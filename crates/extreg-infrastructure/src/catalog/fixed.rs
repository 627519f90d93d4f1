//! Explicitly built type catalog

use extreg_domain::ports::{INJECTION_PROVIDER_CONTRACT, TypeCatalog, in_namespace};
use extreg_domain::value_objects::{HOLDER_TYPE, TypeDescriptor, TypeHandle};
use indexmap::IndexMap;

use crate::injection::{
    ALIAS_INJECTION_PROVIDER_TYPE, CONTRACT_INJECTION_PROVIDER_TYPE, INJECTION_ADAPTER_TYPE,
};

/// Catalog holding exactly the descriptors it was given
///
/// ```ignore
/// let catalog = StaticTypeCatalog::with_builtins()
///     .with(&CACHE_SERVICE_CONTRACT)
///     .with(&FAST_CACHE_TYPE);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticTypeCatalog {
    types: IndexMap<&'static str, TypeHandle>,
}

impl StaticTypeCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog seeded with the injection category, its built-in providers
    /// and the `Holder` wrapper
    pub fn with_builtins() -> Self {
        Self::new()
            .with(&INJECTION_PROVIDER_CONTRACT)
            .with(&INJECTION_ADAPTER_TYPE)
            .with(&ALIAS_INJECTION_PROVIDER_TYPE)
            .with(&CONTRACT_INJECTION_PROVIDER_TYPE)
            .with(&HOLDER_TYPE)
    }

    /// Add a descriptor, replacing any descriptor of the same name
    pub fn with(mut self, descriptor: &'static TypeDescriptor) -> Self {
        self.register(descriptor);
        self
    }

    /// Add a descriptor in place
    pub fn register(&mut self, descriptor: &'static TypeDescriptor) {
        self.types
            .insert(descriptor.name, TypeHandle::new(descriptor));
    }

    /// Number of catalogued types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeCatalog for StaticTypeCatalog {
    fn enumerate(&self, namespace: &str) -> Vec<TypeHandle> {
        self.types
            .values()
            .filter(|handle| in_namespace(handle.name(), namespace))
            .copied()
            .collect()
    }

    fn resolve(&self, name: &str) -> Option<TypeHandle> {
        self.types.get(name).copied()
    }
}
