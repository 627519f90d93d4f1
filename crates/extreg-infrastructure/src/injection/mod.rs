//! Injection
//!
//! The injection category's adapter and built-in providers, the structural
//! wrapper test, and the engine that populates new values through them.

pub mod adapter;
pub mod engine;
pub mod providers;
pub mod wrapper;

pub use adapter::{INJECTION_ADAPTER_TYPE, InjectionAdapter};
pub use engine::{InjectionEngine, InjectionPass, InjectionPoint, InjectionReport, Resolution};
pub use providers::{
    ALIAS_INJECTION_PROVIDER_TYPE, AliasInjectionProvider, CONTRACT_INJECTION_PROVIDER_TYPE,
    ContractInjectionProvider,
};
pub use wrapper::{WrapperDescriptor, attribute_name_from_setter, is_wrapper};
