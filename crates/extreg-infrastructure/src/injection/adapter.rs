//! Injection adapter
//!
//! The adapter-marked provider of the injection category. It owns no
//! resolution logic of its own: every other provider discovered for the
//! category is registered with it as a delegate, and requests are offered
//! to the delegates in registration order until one answers.

use std::sync::Arc;

use extreg_domain::contract_binding;
use extreg_domain::ports::{InjectionProvider, InjectionRequest};
use extreg_domain::registry::TYPE_DESCRIPTORS;
use extreg_domain::value_objects::{Instance, Marker, TypeDescriptor};
use parking_lot::RwLock;

use crate::constants::INJECTION_ADAPTER_TYPE_NAME;

/// Chain of injection providers
#[derive(Default)]
pub struct InjectionAdapter {
    delegates: RwLock<Vec<Arc<dyn InjectionProvider>>>,
}

impl InjectionAdapter {
    /// Adapter with no delegates
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a delegate; earlier delegates take precedence
    pub fn add_delegate(&self, delegate: Arc<dyn InjectionProvider>) {
        self.delegates.write().push(delegate);
    }

    /// Number of registered delegates
    pub fn delegate_count(&self) -> usize {
        self.delegates.read().len()
    }
}

impl InjectionProvider for InjectionAdapter {
    fn resolve(&self, request: &InjectionRequest<'_>) -> Option<Instance> {
        let delegates = self.delegates.read().clone();
        delegates
            .iter()
            .find_map(|delegate| delegate.resolve(request))
    }
}

impl std::fmt::Debug for InjectionAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectionAdapter")
            .field("delegates", &self.delegate_count())
            .finish()
    }
}

/// Descriptor of [`InjectionAdapter`]
#[linkme::distributed_slice(TYPE_DESCRIPTORS)]
pub static INJECTION_ADAPTER_TYPE: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::Adapter],
    implements: &[contract_binding!(InjectionAdapter => dyn InjectionProvider)],
    constructor: Some(|| Box::new(InjectionAdapter::new())),
    ..TypeDescriptor::concrete(INJECTION_ADAPTER_TYPE_NAME)
};
