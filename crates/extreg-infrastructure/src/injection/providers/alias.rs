//! Alias lookup injection provider

use extreg_domain::contract_binding;
use extreg_domain::ports::{InjectionProvider, InjectionRequest};
use extreg_domain::registry::TYPE_DESCRIPTORS;
use extreg_domain::value_objects::{Instance, TypeDescriptor};

use crate::constants::ALIAS_INJECTION_TYPE_NAME;

/// Resolves published instances by alias, then by type
#[derive(Debug, Default, Clone, Copy)]
pub struct AliasInjectionProvider;

impl InjectionProvider for AliasInjectionProvider {
    fn resolve(&self, request: &InjectionRequest<'_>) -> Option<Instance> {
        request
            .lookup
            .lookup_instance(request.name)
            .or_else(|| request.lookup.lookup_instance_by_type(&request.target))
    }
}

/// Descriptor of [`AliasInjectionProvider`]
#[linkme::distributed_slice(TYPE_DESCRIPTORS)]
pub static ALIAS_INJECTION_PROVIDER_TYPE: TypeDescriptor = TypeDescriptor {
    implements: &[contract_binding!(AliasInjectionProvider => dyn InjectionProvider)],
    constructor: Some(|| Box::new(AliasInjectionProvider)),
    ..TypeDescriptor::concrete(ALIAS_INJECTION_TYPE_NAME)
};
