//! Injection capability contract
//!
//! `dyn InjectionProvider` is itself a service category: its providers are
//! discovered from descriptor files like any other category, except that
//! one of them is the adapter that chains all the others.

use crate::constants::INJECTION_CATEGORY_NAME;
use crate::ports::contract::ServiceContract;
use crate::registry::TYPE_DESCRIPTORS;
use crate::value_objects::{Instance, Marker, TypeDescriptor, TypeHandle};

/// Read access to published instances
pub trait InstanceLookup: Send + Sync {
    /// Instance published under an alias
    fn lookup_instance(&self, alias: &str) -> Option<Instance>;

    /// Instance published for a type
    fn lookup_instance_by_type(&self, handle: &TypeHandle) -> Option<Instance>;
}

/// One attribute the injection engine wants a value for
pub struct InjectionRequest<'a> {
    /// Declared type of the attribute or parameter
    pub target: TypeHandle,
    /// Resolution name
    pub name: &'a str,
    /// Published instances
    pub lookup: &'a dyn InstanceLookup,
}

impl std::fmt::Debug for InjectionRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectionRequest")
            .field("target", &self.target)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Supplies values for injected attributes
pub trait InjectionProvider: Send + Sync {
    /// Resolve a value, or `None` if this provider has nothing for the request
    fn resolve(&self, request: &InjectionRequest<'_>) -> Option<Instance>;
}

impl ServiceContract for dyn InjectionProvider {
    const NAME: &'static str = INJECTION_CATEGORY_NAME;
}

/// Descriptor of the injection capability contract
#[linkme::distributed_slice(TYPE_DESCRIPTORS)]
pub static INJECTION_PROVIDER_CONTRACT: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::ServiceCategory],
    ..TypeDescriptor::contract(INJECTION_CATEGORY_NAME)
};
