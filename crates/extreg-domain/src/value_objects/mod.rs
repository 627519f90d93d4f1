//! Value objects
//!
//! Immutable building blocks shared by every layer: type descriptors and
//! handles, published instances, the built-in wrapper, and provider
//! records produced by descriptor parsing.

pub mod descriptor;
pub mod holder;
pub mod instance;
pub mod provider;

pub use descriptor::{
    AttributeDescriptor, Constructor, ContractBinding, ContractView, ErasedValue, Injector,
    Marker, MemberMarker, MethodDescriptor, TypeDescriptor, TypeHandle, TypeKind, TypeRef,
    Visibility, derived_alias, simple_name,
};
pub use holder::{HOLDER_TYPE, Holder};
pub use instance::{Instance, downcast_target};
pub use provider::{ProviderKind, ProviderRecord, provider_alias, registry_alias};
