//! # extreg Domain Layer
//!
//! Vocabulary shared by the registry core and every provider crate:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Registry error type |
//! | [`constants`] | Alias separators, built-in names, descriptor namespaces |
//! | [`value_objects`] | Type descriptors, handles, instances, the `Holder` wrapper |
//! | [`ports`] | Service contract, injection, catalog and resource ports |
//! | [`registry`] | Link-time descriptor slice and `contract_binding!` |

pub mod constants;
pub mod error;
pub mod ports;
pub mod registry;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{
    InjectionProvider, InjectionRequest, InstanceLookup, Resource, ResourceLoader,
    ServiceContract, TypeCatalog,
};
pub use value_objects::{Holder, Instance, TypeDescriptor, TypeHandle};
