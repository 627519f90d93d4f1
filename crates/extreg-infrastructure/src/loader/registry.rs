//! Per-category provider registry
//!
//! A [`CategoryRegistry`] discovers the providers of one service category
//! from descriptor resources, binds them in the [`GlobalCache`], and builds
//! each provider at most once, on first request.
//!
//! ## Discovery
//!
//! Descriptor files named after the category are read under each namespace
//! prefix in precedence order (internal, stable, test, legacy). Each line is
//! resolved through the type catalog and classified:
//!
//! | Classification | Effect |
//! |----------------|--------|
//! | Adapter-marked | Recorded as the process-wide adapter type, bound like a plain provider |
//! | Wrapper | The line's value type is bound under its derived alias; nothing is recorded |
//! | Extension-marked | Recorded only; never bound or built |
//! | Plain | Bound under `category#local_name` once it has a constructor and a name |
//!
//! ## Locking
//!
//! Each registry owns a reentrant lock, so a provider built while the lock
//! is held may ask its own category for another provider on the same thread.
//!
//! [`GlobalCache`]: crate::cache::GlobalCache

use std::marker::PhantomData;
use std::sync::Arc;

use extreg_domain::constants::INJECTION_CATEGORY_NAME;
use extreg_domain::error::{Error, Result};
use extreg_domain::ports::{InjectionProvider, ServiceContract};
use extreg_domain::value_objects::{
    Instance, ProviderKind, ProviderRecord, TypeHandle, derived_alias, provider_alias,
};
use indexmap::IndexMap;
use parking_lot::ReentrantMutex;
use tracing::{debug, error, info};

use crate::context::ExtensionContext;
use crate::injection::{InjectionAdapter, WrapperDescriptor};
use crate::loader::descriptor::{DescriptorEntry, parse_descriptor};

/// Registry of the providers of service category `C`
///
/// Obtained from [`ExtensionContext::providers_loader`]; there is one per
/// category and context.
///
/// ```ignore
/// let caches = context.providers_loader::<dyn CacheService>()?;
/// let fast: Arc<dyn CacheService> = caches.get_provider("fast")?;
/// ```
pub struct CategoryRegistry<C: ?Sized + ServiceContract> {
    context: ExtensionContext,
    category: TypeHandle,
    adapter: Option<Arc<InjectionAdapter>>,
    lock: ReentrantMutex<()>,
    _contract: PhantomData<fn() -> Arc<C>>,
}

impl<C: ?Sized + ServiceContract> CategoryRegistry<C> {
    pub(crate) fn new(
        context: ExtensionContext,
        category: TypeHandle,
        adapter: Option<Arc<InjectionAdapter>>,
    ) -> Self {
        Self {
            context,
            category,
            adapter,
            lock: ReentrantMutex::new(()),
            _contract: PhantomData,
        }
    }

    /// The category contract
    pub fn category(&self) -> TypeHandle {
        self.category
    }

    /// The injection adapter resolved when the registry was created
    ///
    /// `None` for the injection category itself.
    pub fn adapter(&self) -> Option<&Arc<InjectionAdapter>> {
        self.adapter.as_ref()
    }

    /// Provider by local name, built and injected on first request
    pub fn get_provider(&self, local_name: &str) -> Result<Arc<C>> {
        let cache = self.context.cache();
        let alias = provider_alias(C::NAME, local_name);

        let handle = match cache.lookup_type(&alias) {
            Some(handle) => handle,
            None => {
                self.load_all_providers()?;
                cache
                    .lookup_type(&alias)
                    .ok_or_else(|| fatal(Error::provider_not_found(&alias)))?
            }
        };
        if handle.is_adapter() {
            self.context.bootstrap()?;
        }

        let instance = match cache.lookup_instance(&alias) {
            Some(instance) => instance,
            None => {
                let _guard = self.lock.lock();
                match cache.lookup_instance(&alias) {
                    Some(instance) => instance,
                    None => self.context.instantiate(&alias, handle)?,
                }
            }
        };
        instance.expect_view::<C>()
    }

    /// Provider by local name, only if it has already been built
    pub fn get_existing_provider(&self, local_name: &str) -> Option<Arc<C>> {
        self.context
            .cache()
            .lookup_instance(&provider_alias(C::NAME, local_name))
            .and_then(|instance| instance.view::<C>())
    }

    /// Every plain provider of the category, built as needed, in discovery order
    pub fn get_providers(&self) -> Result<Vec<(String, Arc<C>)>> {
        self.load_all_providers()?
            .into_iter()
            .filter(|record| record.kind == ProviderKind::Plain)
            .map(|record| {
                let provider = self.get_provider(&record.local_name)?;
                Ok((record.local_name, provider))
            })
            .collect()
    }

    /// Local names of the category's plain providers, in discovery order
    pub fn provider_names(&self) -> Result<Vec<String>> {
        Ok(self
            .load_all_providers()?
            .into_iter()
            .filter(|record| record.kind == ProviderKind::Plain)
            .map(|record| record.local_name)
            .collect())
    }

    /// Whether a type is bound for the local name
    ///
    /// Only consults the cache; discovery is not triggered.
    pub fn has_provider(&self, local_name: &str) -> bool {
        self.context
            .cache()
            .lookup_type(&provider_alias(C::NAME, local_name))
            .is_some()
    }

    /// Read every descriptor of the category and bind its providers
    ///
    /// Entries whose alias is already bound are not resolved again, so
    /// repeated discovery returns the same records.
    ///
    /// # Errors
    ///
    /// [`Error::NoProviders`] if no namespace holds a single entry for the
    /// category, or the first configuration error met while resolving one.
    pub fn load_all_providers(&self) -> Result<Vec<ProviderRecord>> {
        let _guard = self.lock.lock();
        let mut records: IndexMap<String, ProviderRecord> = IndexMap::new();
        let mut entries = 0_usize;

        for prefix in self.context.namespaces().ordered() {
            let path = format!("{prefix}{}", C::NAME);
            for resource in self.context.resources().load(&path)? {
                debug!(category = C::NAME, location = %resource.location, "Reading descriptor");
                for entry in parse_descriptor(&resource) {
                    entries += 1;
                    if let Some(record) = self.load_provider_type(&entry)? {
                        collect_record(&mut records, record)?;
                    }
                }
            }
        }

        if entries == 0 {
            return Err(fatal(Error::no_providers(C::NAME)));
        }
        debug!(category = C::NAME, providers = records.len(), "Discovered providers");
        Ok(records.into_values().collect())
    }

    /// Resolve and bind the provider of one descriptor entry
    ///
    /// Returns `None` for wrapper lines, which bind their value type but
    /// are not providers themselves.
    pub fn load_provider_type(&self, entry: &DescriptorEntry) -> Result<Option<ProviderRecord>> {
        let cache = self.context.cache();
        let alias = provider_alias(C::NAME, &entry.local_name);
        if let Some(handle) = cache.lookup_type(&alias) {
            debug!(alias, "Provider already bound");
            return Ok(Some(ProviderRecord {
                alias,
                local_name: entry.local_name.clone(),
                handle,
                kind: bound_kind(handle),
            }));
        }

        let handle = self.resolve_reference(&entry.reference.name, entry)?;
        if !handle.implements(C::NAME) {
            return Err(fatal(Error::contract_violation(handle.name(), C::NAME)));
        }

        let kind = if handle.is_adapter() {
            cache.bind_adapter_type(handle).map_err(fatal)?;
            ProviderKind::Adapter
        } else if let Some(wrapper) = WrapperDescriptor::classify(handle) {
            self.bind_wrapped_value(&wrapper, entry)?;
            return Ok(None);
        } else if handle.is_extension() {
            ProviderKind::Extension
        } else if handle.constructor().is_none() {
            return Err(fatal(Error::missing_constructor(handle.name())));
        } else {
            ProviderKind::Plain
        };

        let mut local_name = handle
            .provider_name()
            .map_or_else(|| entry.local_name.clone(), str::to_string);
        if local_name.is_empty() {
            if kind != ProviderKind::Extension {
                return Err(fatal(Error::missing_alias(handle.name(), C::NAME)));
            }
            local_name = derived_alias(handle.name());
        }
        let alias = provider_alias(C::NAME, &local_name);

        if kind == ProviderKind::Extension {
            debug!(alias, "Recorded extension provider");
        } else {
            self.bind(&alias, handle)?;
        }
        Ok(Some(ProviderRecord {
            alias,
            local_name,
            handle,
            kind,
        }))
    }

    fn resolve_reference(&self, name: &str, entry: &DescriptorEntry) -> Result<TypeHandle> {
        self.context.catalog().resolve(name).ok_or_else(|| {
            fatal(Error::unknown_type(format!(
                "{name} ({}:{})",
                entry.location, entry.line
            )))
        })
    }

    fn bind_wrapped_value(&self, wrapper: &WrapperDescriptor, entry: &DescriptorEntry) -> Result<()> {
        let Some(value_type) = entry.reference.argument.as_deref() else {
            debug!(
                wrapper = wrapper.handle.name(),
                location = %entry.location,
                "Wrapper declared without a value type"
            );
            return Ok(());
        };
        let value_handle = self.resolve_reference(value_type, entry)?;
        let alias = derived_alias(value_type);
        self.context.cache().add_type_if_absent(&alias, value_handle);
        debug!(wrapper = wrapper.handle.name(), alias, "Bound wrapped value type");
        Ok(())
    }

    // Insert-if-absent, then verify that the binding is the one requested
    fn bind(&self, alias: &str, handle: TypeHandle) -> Result<()> {
        let cache = self.context.cache();
        cache.add_type_if_absent(alias, handle);
        if let Some(existing) = cache.lookup_alias(&handle).filter(|bound| bound != alias) {
            return Err(fatal(Error::duplicate_provider(handle.name(), existing, alias)));
        }
        if let Some(bound) = cache.lookup_type(alias).filter(|bound| *bound != handle) {
            return Err(fatal(Error::alias_conflict(alias, bound.name(), handle.name())));
        }
        Ok(())
    }

    fn materialize(&self, record: &ProviderRecord) -> Result<Instance> {
        match self.context.cache().lookup_instance(&record.alias) {
            Some(instance) => Ok(instance),
            None => self.context.instantiate(&record.alias, record.handle),
        }
    }
}

impl CategoryRegistry<dyn InjectionProvider> {
    /// Bootstrap the injection category and publish its adapter
    ///
    /// Builds the adapter and every plain provider of the category, then
    /// registers the plain providers with the adapter as delegates in
    /// discovery order. Nothing built here is injected, since no adapter
    /// is published until the end. If any delegate fails to build, none
    /// is registered and a later call retries.
    ///
    /// # Errors
    ///
    /// [`Error::NoAdapter`] if no adapter-marked provider is declared.
    pub fn load_injection_adapter(&self) -> Result<Arc<InjectionAdapter>> {
        let cache = self.context.cache();
        if let Some(adapter) = cache.adapter() {
            return Ok(adapter);
        }
        let _guard = self.lock.lock();
        if let Some(adapter) = cache.adapter() {
            return Ok(adapter);
        }

        info!("Bootstrapping injection adapter");
        let records = self.load_all_providers()?;
        let adapter_record = records
            .iter()
            .find(|record| record.kind == ProviderKind::Adapter)
            .ok_or_else(|| fatal(Error::no_adapter(INJECTION_CATEGORY_NAME)))?;
        let adapter = self
            .materialize(adapter_record)?
            .expect_type::<InjectionAdapter>()
            .map_err(fatal)?;

        // No delegate is attached until all of them are built
        let mut delegates = Vec::new();
        for record in records
            .iter()
            .filter(|record| record.kind == ProviderKind::Plain)
        {
            let delegate = self
                .materialize(record)?
                .expect_view::<dyn InjectionProvider>()
                .map_err(fatal)?;
            delegates.push((record, delegate));
        }
        for (record, delegate) in delegates {
            adapter.add_delegate(delegate);
            debug!(alias = %record.alias, "Registered injection delegate");
        }

        let published = cache.publish_adapter(adapter);
        info!(
            adapter = %adapter_record.alias,
            delegates = published.delegate_count(),
            "Injection adapter published"
        );
        Ok(published)
    }
}

impl<C: ?Sized + ServiceContract> std::fmt::Debug for CategoryRegistry<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CategoryRegistry")
            .field("category", &self.category)
            .field("has_adapter", &self.adapter.is_some())
            .finish_non_exhaustive()
    }
}

fn collect_record(records: &mut IndexMap<String, ProviderRecord>, record: ProviderRecord) -> Result<()> {
    if let Some(existing) = records
        .values()
        .find(|existing| existing.handle == record.handle && existing.alias != record.alias)
    {
        return Err(fatal(Error::duplicate_provider(
            record.handle.name(),
            &existing.alias,
            &record.alias,
        )));
    }
    records.entry(record.alias.clone()).or_insert(record);
    Ok(())
}

fn bound_kind(handle: TypeHandle) -> ProviderKind {
    if handle.is_adapter() {
        ProviderKind::Adapter
    } else {
        ProviderKind::Plain
    }
}

fn fatal(err: Error) -> Error {
    error!(error = %err, "Extension registry error");
    err
}
