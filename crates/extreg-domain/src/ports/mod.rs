//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the registry core and the
//! collaborators it consumes or exposes.
//!
//! ## Organization
//!
//! - **contract** - Marker trait tying a trait-object type to its category name
//! - **injection** - The injection capability contract and its request type
//! - **catalog** - Type enumeration and resolution (the "class loader")
//! - **resources** - Descriptor resource loading

/// Service category contracts
pub mod contract;
/// Type enumeration and resolution
pub mod catalog;
/// Injection capability contract
pub mod injection;
/// Descriptor resource loading
pub mod resources;

pub use catalog::{TypeCatalog, in_namespace};
pub use contract::ServiceContract;
pub use injection::{
    INJECTION_PROVIDER_CONTRACT, InjectionProvider, InjectionRequest, InstanceLookup,
};
pub use resources::{Resource, ResourceLoader};
