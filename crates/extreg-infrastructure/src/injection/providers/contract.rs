//! Service category injection provider

use extreg_domain::contract_binding;
use extreg_domain::ports::{InjectionProvider, InjectionRequest};
use extreg_domain::registry::TYPE_DESCRIPTORS;
use extreg_domain::value_objects::{Instance, TypeDescriptor, provider_alias};

use crate::constants::CONTRACT_INJECTION_TYPE_NAME;

/// Resolves an attribute typed as a service category to the provider of
/// that category whose local name is the request name
///
/// Only providers that are already materialized are considered; the
/// provider never triggers discovery or construction.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContractInjectionProvider;

impl InjectionProvider for ContractInjectionProvider {
    fn resolve(&self, request: &InjectionRequest<'_>) -> Option<Instance> {
        if !request.target.is_contract() || !request.target.is_service_category() {
            return None;
        }
        request
            .lookup
            .lookup_instance(&provider_alias(request.target.name(), request.name))
    }
}

/// Descriptor of [`ContractInjectionProvider`]
#[linkme::distributed_slice(TYPE_DESCRIPTORS)]
pub static CONTRACT_INJECTION_PROVIDER_TYPE: TypeDescriptor = TypeDescriptor {
    implements: &[contract_binding!(ContractInjectionProvider => dyn InjectionProvider)],
    constructor: Some(|| Box::new(ContractInjectionProvider)),
    ..TypeDescriptor::concrete(CONTRACT_INJECTION_TYPE_NAME)
};
