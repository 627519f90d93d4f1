//! Provider discovery and category registries

pub mod descriptor;
pub mod registry;

pub use descriptor::{DescriptorEntry, TypeReference, parse_descriptor, parse_line};
pub use registry::CategoryRegistry;
