//! Component scanning
//!
//! Components are concrete types carrying [`Marker::Component`] that are
//! not providers of any category. Scanning a namespace binds each one under
//! its alias (the marker's value, else the derived alias of its name), then
//! builds, injects and publishes them so that a component's dependencies
//! are published before it.
//!
//! [`Marker::Component`]: extreg_domain::value_objects::Marker::Component

use std::collections::{BTreeSet, HashSet};

use extreg_domain::error::{Error, Result};
use extreg_domain::value_objects::{TypeHandle, derived_alias};
use indexmap::IndexMap;
use tracing::{debug, error, info, warn};

use crate::cache::GlobalCache;
use crate::context::ExtensionContext;

/// Discovers and publishes components of an [`ExtensionContext`]
#[derive(Debug, Clone, Copy)]
pub struct ComponentScanner<'a> {
    context: &'a ExtensionContext,
}

impl<'a> ComponentScanner<'a> {
    /// Scanner over a context
    pub fn new(context: &'a ExtensionContext) -> Self {
        Self { context }
    }

    /// Publish every component under the given type namespaces
    ///
    /// Returns the aliases published, in publication order. Components
    /// already published under their alias are kept and still reported.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateComponent`] if two components share an alias or a
    /// component's alias is bound to another type;
    /// [`Error::DuplicateProvider`] if a component's type is already bound
    /// under another alias, for instance as a provider; any error of the
    /// injection bootstrap or of construction.
    pub fn scan<S: AsRef<str>>(&self, namespaces: &[S]) -> Result<Vec<String>> {
        self.context.bootstrap()?;

        let components = self.discover(namespaces)?;
        let order = self.dependency_order(&components);

        let cache = self.context.cache();
        let mut published = Vec::with_capacity(order.len());
        for index in order {
            let Some((alias, handle)) = components.get_index(index) else {
                continue;
            };
            cache.add_type_if_absent(alias, *handle);
            if let Some(err) = binding_conflict(cache, alias, *handle) {
                error!(error = %err, type_name = handle.name(), "Rejected component");
                return Err(err);
            }
            if cache.lookup_instance(alias).is_none() {
                self.context.instantiate(alias, *handle)?;
            }
            published.push(alias.clone());
        }

        info!(components = published.len(), "Component scan complete");
        Ok(published)
    }

    fn discover<S: AsRef<str>>(&self, namespaces: &[S]) -> Result<IndexMap<String, TypeHandle>> {
        let cache = self.context.cache();
        let mut seen = HashSet::new();
        let mut components = IndexMap::new();

        for namespace in namespaces {
            for handle in self.context.catalog().enumerate(namespace.as_ref()) {
                if handle.is_contract() || !seen.insert(handle) {
                    continue;
                }
                let Some(explicit) = handle.component() else {
                    continue;
                };
                let alias = explicit.map_or_else(|| derived_alias(handle.name()), str::to_string);
                let conflict = if components.contains_key(&alias) {
                    Some(Error::duplicate_component(&alias))
                } else {
                    binding_conflict(cache, &alias, handle)
                };
                if let Some(err) = conflict {
                    error!(error = %err, type_name = handle.name(), "Rejected component");
                    return Err(err);
                }
                debug!(alias, type_name = handle.name(), "Discovered component");
                components.insert(alias, handle);
            }
        }
        Ok(components)
    }

    // Kahn's algorithm, always releasing the earliest-discovered ready component
    fn dependency_order(&self, components: &IndexMap<String, TypeHandle>) -> Vec<usize> {
        let engine = self.context.engine();
        let count = components.len();
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];
        let mut pending = vec![0_usize; count];

        for (index, handle) in components.values().enumerate() {
            let mut needs = BTreeSet::new();
            for point in engine.injection_points(*handle) {
                if let Some(by_name) = components.get_index_of(&point.name) {
                    needs.insert(by_name);
                }
                if let Some(value_type) = point.value_type() {
                    needs.extend(
                        components
                            .values()
                            .position(|candidate| candidate.name() == value_type),
                    );
                }
            }
            needs.remove(&index);
            pending[index] = needs.len();
            for dependency in needs {
                dependents[dependency].push(index);
            }
        }

        let mut ready: BTreeSet<usize> = (0..count).filter(|index| pending[*index] == 0).collect();
        let mut order = Vec::with_capacity(count);
        while let Some(index) = ready.pop_first() {
            order.push(index);
            for dependent in &dependents[index] {
                pending[*dependent] -= 1;
                if pending[*dependent] == 0 {
                    ready.insert(*dependent);
                }
            }
        }

        if order.len() < count {
            let cyclic: Vec<&str> = (0..count)
                .filter(|index| !order.contains(index))
                .filter_map(|index| components.get_index(index).map(|(alias, _)| alias.as_str()))
                .collect();
            warn!(?cyclic, "Component dependency cycle, building in discovery order");
            order.extend((0..count).filter(|index| pending[*index] > 0));
        }
        order
    }
}

// One type, one alias: the alias must be free or bound to `handle`, and
// `handle` must not be bound under any other alias
fn binding_conflict(cache: &GlobalCache, alias: &str, handle: TypeHandle) -> Option<Error> {
    if let Some(existing) = cache.lookup_alias(&handle).filter(|bound| bound != alias) {
        return Some(Error::duplicate_provider(handle.name(), existing, alias));
    }
    cache
        .lookup_type(alias)
        .filter(|bound| *bound != handle)
        .map(|_| Error::duplicate_component(alias))
}
