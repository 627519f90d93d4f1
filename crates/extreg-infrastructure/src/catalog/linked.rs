//! Link-time type catalog

use std::sync::OnceLock;

use extreg_domain::ports::{TypeCatalog, in_namespace};
use extreg_domain::registry::TYPE_DESCRIPTORS;
use extreg_domain::value_objects::TypeHandle;
use indexmap::IndexMap;
use tracing::warn;

/// Catalog over the [`TYPE_DESCRIPTORS`] distributed slice
///
/// The name index is built on first use. If two descriptors share a name
/// the first one in slice order wins.
#[derive(Debug, Default)]
pub struct LinkedTypeCatalog {
    index: OnceLock<IndexMap<&'static str, TypeHandle>>,
}

impl LinkedTypeCatalog {
    /// Create a catalog; the slice is not read until the first lookup
    pub fn new() -> Self {
        Self::default()
    }

    fn index(&self) -> &IndexMap<&'static str, TypeHandle> {
        self.index.get_or_init(|| {
            let mut index = IndexMap::with_capacity(TYPE_DESCRIPTORS.len());
            for descriptor in TYPE_DESCRIPTORS {
                if index.contains_key(descriptor.name) {
                    warn!(type_name = descriptor.name, "Ignoring duplicate type descriptor");
                    continue;
                }
                index.insert(descriptor.name, TypeHandle::new(descriptor));
            }
            index
        })
    }
}

impl TypeCatalog for LinkedTypeCatalog {
    fn enumerate(&self, namespace: &str) -> Vec<TypeHandle> {
        self.index()
            .values()
            .filter(|handle| in_namespace(handle.name(), namespace))
            .copied()
            .collect()
    }

    fn resolve(&self, name: &str) -> Option<TypeHandle> {
        self.index().get(name).copied()
    }
}
