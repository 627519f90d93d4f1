//! Type Registration
//!
//! Every type the registry can discover is described by a static
//! [`TypeDescriptor`] submitted to the [`TYPE_DESCRIPTORS`] distributed
//! slice. The link-time catalog walks this slice; explicit catalogs used in
//! tests take descriptors directly.
//!
//! ```ignore
//! use extreg_domain::registry::TYPE_DESCRIPTORS;
//!
//! #[linkme::distributed_slice(TYPE_DESCRIPTORS)]
//! static FAST_CACHE_TYPE: TypeDescriptor = TypeDescriptor {
//!     implements: &[contract_binding!(FastCache => dyn CacheService)],
//!     constructor: Some(|| Box::new(FastCache::default())),
//!     ..TypeDescriptor::concrete("pkg.FastCache")
//! };
//! ```

use crate::value_objects::TypeDescriptor;

/// All link-time registered type descriptors
#[linkme::distributed_slice]
pub static TYPE_DESCRIPTORS: [TypeDescriptor] = [..];

/// Build a [`ContractBinding`](crate::value_objects::ContractBinding) of a
/// concrete type to a contract it implements
///
/// ```ignore
/// implements: &[contract_binding!(FastCache => dyn CacheService)],
/// ```
#[macro_export]
macro_rules! contract_binding {
    ($concrete:ty => $contract:ty) => {
        $crate::value_objects::ContractBinding {
            contract: <$contract as $crate::ports::ServiceContract>::NAME,
            view: |value: &::std::sync::Arc<$crate::value_objects::ErasedValue>| {
                value.clone().downcast::<$concrete>().ok().map(|concrete| {
                    let view: ::std::sync::Arc<$contract> = concrete;
                    ::std::boxed::Box::new(view)
                        as ::std::boxed::Box<$crate::value_objects::ErasedValue>
                })
            },
        }
    };
}
