//! Service category contracts

/// Ties a contract type, usually `dyn Trait`, to its category's qualified name
///
/// The name is the key under which the category's descriptor files are
/// looked up and the prefix of every provider alias in the category. The
/// contract must also be catalogued as a [`TypeKind::Contract`] descriptor
/// carrying [`Marker::ServiceCategory`].
///
/// ```ignore
/// pub trait CacheService: Send + Sync {
///     fn name(&self) -> &str;
/// }
///
/// impl ServiceContract for dyn CacheService {
///     const NAME: &'static str = "pkg.CacheService";
/// }
/// ```
///
/// [`TypeKind::Contract`]: crate::value_objects::TypeKind::Contract
/// [`Marker::ServiceCategory`]: crate::value_objects::Marker::ServiceCategory
pub trait ServiceContract: Send + Sync + 'static {
    /// Fully qualified category name
    const NAME: &'static str;
}
