//! Shared instances

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::ports::ServiceContract;
use crate::value_objects::descriptor::{ErasedValue, TypeHandle};
use crate::value_objects::holder::Holder;

/// A published, shared value together with the type it was built from
///
/// Cloning is cheap and preserves identity: every clone points at the same
/// allocation, which is what "singleton" means throughout the registry.
#[derive(Clone)]
pub struct Instance {
    handle: TypeHandle,
    value: Arc<ErasedValue>,
}

impl Instance {
    /// Wrap a shared value
    pub fn new(handle: TypeHandle, value: Arc<ErasedValue>) -> Self {
        Self { handle, value }
    }

    /// Publish an owned value built by a constructor
    pub fn from_boxed(handle: TypeHandle, value: Box<ErasedValue>) -> Self {
        Self {
            handle,
            value: Arc::from(value),
        }
    }

    /// The type this instance was built from
    pub fn handle(&self) -> TypeHandle {
        self.handle
    }

    /// The shared, type-erased value
    pub fn value(&self) -> &Arc<ErasedValue> {
        &self.value
    }

    /// Whether two instances share the same allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }

    /// Concrete typed access
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.value.clone().downcast::<T>().ok()
    }

    /// Concrete typed access, failing with a type mismatch
    pub fn expect_type<T: Any + Send + Sync>(&self) -> Result<Arc<T>> {
        self.downcast::<T>()
            .ok_or_else(|| Error::type_mismatch(std::any::type_name::<T>(), self.handle.name()))
    }

    /// View of the instance through a contract it implements
    pub fn view<C: ?Sized + ServiceContract>(&self) -> Option<Arc<C>> {
        let binding = self.handle.binding(C::NAME)?;
        let erased = (binding.view)(&self.value)?;
        erased.downcast::<Arc<C>>().ok().map(|view| *view)
    }

    /// Contract view, failing with a type mismatch
    pub fn expect_view<C: ?Sized + ServiceContract>(&self) -> Result<Arc<C>> {
        self.view::<C>()
            .ok_or_else(|| Error::type_mismatch(C::NAME, self.handle.name()))
    }

    /// Narrow an erased wrapper to a typed [`Holder`]
    pub fn expect_holder<T: Any + Send + Sync>(&self) -> Result<Holder<T>> {
        self.value
            .downcast_ref::<Holder<ErasedValue>>()
            .and_then(Holder::downcast::<T>)
            .ok_or_else(|| {
                Error::type_mismatch(
                    format!("Holder<{}>", std::any::type_name::<T>()),
                    self.handle.name(),
                )
            })
    }

    /// Narrow an erased wrapper to a [`Holder`] of a contract
    pub fn expect_holder_view<C: ?Sized + ServiceContract>(&self) -> Result<Holder<C>> {
        self.value
            .downcast_ref::<Holder<ErasedValue>>()
            .and_then(Holder::view::<C>)
            .ok_or_else(|| Error::type_mismatch(format!("Holder<{}>", C::NAME), self.handle.name()))
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type", &self.handle.name())
            .finish_non_exhaustive()
    }
}

/// Mutable access to a value under construction, failing with a type mismatch
pub fn downcast_target<T: Any>(target: &mut ErasedValue) -> Result<&mut T> {
    target
        .downcast_mut::<T>()
        .ok_or_else(|| Error::type_mismatch(std::any::type_name::<T>(), "value under construction"))
}
