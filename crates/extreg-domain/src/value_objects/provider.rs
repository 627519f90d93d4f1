//! Provider records and alias rules

use crate::constants::{PROVIDER_ALIAS_SEPARATOR, REGISTRY_ALIAS_SUFFIX};
use crate::value_objects::descriptor::TypeHandle;

/// How a discovered provider participates in its category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// The unique injection adapter
    Adapter,
    /// An ordinary, constructible provider
    Plain,
    /// Reserved extension point; recorded but never instantiated
    Extension,
}

/// One provider discovered from a descriptor line
///
/// Immutable once resolved. `local_name` is the name after any provider
/// marker override, so `alias == provider_alias(category, local_name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRecord {
    /// Category-qualified alias
    pub alias: String,
    /// Local name within the category
    pub local_name: String,
    /// Implementation type
    pub handle: TypeHandle,
    /// Role in the category
    pub kind: ProviderKind,
}

/// Alias of a provider within a category: `category#local_name`
pub fn provider_alias(category: &str, local_name: &str) -> String {
    format!("{category}{PROVIDER_ALIAS_SEPARATOR}{local_name}")
}

/// Synthetic alias of a category's registry: `category@`
pub fn registry_alias(category: &str) -> String {
    format!("{category}{REGISTRY_ALIAS_SUFFIX}")
}
