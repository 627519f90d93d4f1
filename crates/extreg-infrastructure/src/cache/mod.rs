//! Global cache
//!
//! The single source of truth for which type is bound under which alias and
//! which instance has been published for it, across every category of one
//! [`ExtensionContext`](crate::context::ExtensionContext).
//!
//! | Map | Key | Value |
//! |-----|-----|-------|
//! | types | alias | [`TypeHandle`] |
//! | aliases | [`TypeHandle`] | alias |
//! | instances | alias | [`Instance`] |
//! | instances by type | [`TypeHandle`] | first [`Instance`] published for it |
//! | registries | `category@` | the category's registry |
//!
//! Every mutation is insert-if-absent and nothing is ever removed, so a
//! value observed once stays observable.

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;
use extreg_domain::error::{Error, Result};
use extreg_domain::ports::InstanceLookup;
use extreg_domain::value_objects::{ErasedValue, Instance, TypeHandle};
use parking_lot::Mutex;
use tracing::debug;

use crate::injection::InjectionAdapter;

/// Process-scoped alias, type and instance tables
#[derive(Default)]
pub struct GlobalCache {
    types: DashMap<String, TypeHandle>,
    aliases: DashMap<TypeHandle, String>,
    instances: DashMap<String, Instance>,
    instances_by_type: DashMap<TypeHandle, Instance>,
    // Kept apart from the instance maps so injection never resolves a registry
    registries: DashMap<String, Arc<ErasedValue>>,
    // Serializes the two-map type insert
    type_lock: Mutex<()>,
    adapter_type: OnceLock<TypeHandle>,
    adapter: OnceLock<Arc<InjectionAdapter>>,
}

impl GlobalCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `alias` to `handle` unless either is already bound
    ///
    /// Returns whether the binding was recorded. Both directions are
    /// published together; a reader never sees one without the other.
    pub fn add_type_if_absent(&self, alias: &str, handle: TypeHandle) -> bool {
        let _guard = self.type_lock.lock();
        if self.types.contains_key(alias) || self.aliases.contains_key(&handle) {
            return false;
        }
        self.aliases.insert(handle, alias.to_string());
        self.types.insert(alias.to_string(), handle);
        debug!(alias, type_name = handle.name(), "Bound provider type");
        true
    }

    /// Publish `instance` under `alias` unless one is already published
    ///
    /// Returns the instance that ends up published, which is the earlier one
    /// if the alias was already taken.
    pub fn add_instance_if_absent(&self, alias: &str, instance: Instance) -> Instance {
        let published = self
            .instances
            .entry(alias.to_string())
            .or_insert_with(|| instance.clone())
            .clone();
        if published.ptr_eq(&instance) {
            self.instances_by_type
                .entry(instance.handle())
                .or_insert(instance);
            debug!(alias, "Published instance");
        }
        published
    }

    /// Type bound under an alias
    pub fn lookup_type(&self, alias: &str) -> Option<TypeHandle> {
        self.types.get(alias).map(|entry| *entry.value())
    }

    /// Alias a type is bound under
    pub fn lookup_alias(&self, handle: &TypeHandle) -> Option<String> {
        self.aliases.get(handle).map(|entry| entry.value().clone())
    }

    /// Instance published under an alias
    pub fn lookup_instance(&self, alias: &str) -> Option<Instance> {
        self.instances.get(alias).map(|entry| entry.value().clone())
    }

    /// First instance published for a type
    pub fn lookup_instance_by_type(&self, handle: &TypeHandle) -> Option<Instance> {
        self.instances_by_type
            .get(handle)
            .map(|entry| entry.value().clone())
    }

    /// Publish a category registry unless one is already published
    ///
    /// Returns the registry that ends up published.
    pub fn add_registry_if_absent(&self, alias: &str, registry: Arc<ErasedValue>) -> Arc<ErasedValue> {
        self.registries
            .entry(alias.to_string())
            .or_insert(registry)
            .clone()
    }

    /// Registry published under a `category@` alias
    pub fn lookup_registry(&self, alias: &str) -> Option<Arc<ErasedValue>> {
        self.registries.get(alias).map(|entry| entry.value().clone())
    }

    /// Number of bound types
    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    /// Number of published instances
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    /// Record the unique adapter type
    ///
    /// Recording the same type again is a no-op; a different type is
    /// [`Error::DuplicateAdapter`].
    pub fn bind_adapter_type(&self, handle: TypeHandle) -> Result<()> {
        let bound = *self.adapter_type.get_or_init(|| handle);
        if bound == handle {
            Ok(())
        } else {
            Err(Error::duplicate_adapter(bound.name(), handle.name()))
        }
    }

    /// The adapter type, once recorded
    pub fn adapter_type(&self) -> Option<TypeHandle> {
        self.adapter_type.get().copied()
    }

    /// Publish the adapter instance, keeping an earlier one if present
    pub fn publish_adapter(&self, adapter: Arc<InjectionAdapter>) -> Arc<InjectionAdapter> {
        self.adapter.get_or_init(|| adapter).clone()
    }

    /// The published adapter, if bootstrap has completed
    pub fn adapter(&self) -> Option<Arc<InjectionAdapter>> {
        self.adapter.get().cloned()
    }
}

impl InstanceLookup for GlobalCache {
    fn lookup_instance(&self, alias: &str) -> Option<Instance> {
        GlobalCache::lookup_instance(self, alias)
    }

    fn lookup_instance_by_type(&self, handle: &TypeHandle) -> Option<Instance> {
        GlobalCache::lookup_instance_by_type(self, handle)
    }
}

impl std::fmt::Debug for GlobalCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalCache")
            .field("types", &self.types.len())
            .field("instances", &self.instances.len())
            .field("registries", &self.registries.len())
            .field("adapter_type", &self.adapter_type.get())
            .field("adapter_published", &self.adapter.get().is_some())
            .finish()
    }
}
