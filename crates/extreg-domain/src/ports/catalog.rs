//! Type catalog port

use crate::constants::NAMESPACE_SEPARATOR;
use crate::value_objects::TypeHandle;

/// Enumerates and resolves registered types
///
/// This is the registry's only view of "which types exist". Implementations
/// may be backed by link-time registration tables or built explicitly.
pub trait TypeCatalog: Send + Sync {
    /// Every type visible under a namespace prefix
    fn enumerate(&self, namespace: &str) -> Vec<TypeHandle>;

    /// Resolve a fully qualified type name
    fn resolve(&self, name: &str) -> Option<TypeHandle>;
}

/// Whether a qualified name lies in a namespace
///
/// The empty namespace contains every name; otherwise the name must equal
/// the namespace or continue it past a separator, so `pkg` contains
/// `pkg.FastCache` but not `pkgs.Other`.
pub fn in_namespace(name: &str, namespace: &str) -> bool {
    if namespace.is_empty() {
        return true;
    }
    match name.strip_prefix(namespace) {
        Some(rest) => rest.is_empty() || rest.starts_with(NAMESPACE_SEPARATOR),
        None => false,
    }
}
