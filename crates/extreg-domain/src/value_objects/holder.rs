//! Single-value wrapper
//!
//! [`Holder`] is the built-in wrapper type. The injection engine builds
//! wrappers type-erased (`Holder<dyn Any + Send + Sync>`), fills them with a
//! resolved instance, and hands them to setters that narrow them with
//! [`Holder::downcast`] when they know the concrete type, or with
//! [`Holder::view`] when they only know a contract.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::constants::HOLDER_TYPE_NAME;
use crate::error::Result;
use crate::ports::ServiceContract;
use crate::registry::TYPE_DESCRIPTORS;
use crate::value_objects::descriptor::{
    AttributeDescriptor, ErasedValue, MethodDescriptor, TypeDescriptor, TypeHandle, TypeRef,
};
use crate::value_objects::instance::{Instance, downcast_target};

/// Holds at most one shared value
pub struct Holder<T: ?Sized> {
    value: Option<Arc<T>>,
    // Type the value was built from, when filled from an `Instance`
    origin: Option<TypeHandle>,
}

impl<T: ?Sized> Holder<T> {
    /// Empty holder
    pub fn new() -> Self {
        Self {
            value: None,
            origin: None,
        }
    }

    /// Holder filled with a value
    pub fn with(value: Arc<T>) -> Self {
        Self {
            value: Some(value),
            origin: None,
        }
    }

    /// Replace the held value
    pub fn set(&mut self, value: Arc<T>) {
        self.value = Some(value);
        self.origin = None;
    }

    /// The held value
    pub fn get(&self) -> Option<Arc<T>> {
        self.value.clone()
    }

    /// Whether a value is held
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

impl Holder<ErasedValue> {
    /// Replace the held value with a published instance, keeping its type
    pub fn fill(&mut self, instance: Instance) {
        self.value = Some(instance.value().clone());
        self.origin = Some(instance.handle());
    }

    /// The held instance, if the holder was filled from one
    pub fn instance(&self) -> Option<Instance> {
        let value = self.value.clone()?;
        self.origin.map(|handle| Instance::new(handle, value))
    }

    /// Narrow an erased holder; `None` if the held value is not a `T`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Holder<T>> {
        match &self.value {
            Some(value) => value.clone().downcast::<T>().ok().map(|value| Holder {
                value: Some(value),
                origin: self.origin,
            }),
            None => Some(Holder::new()),
        }
    }

    /// Narrow an erased holder to a contract its value implements
    ///
    /// `None` if the holder was not filled from an instance or the
    /// instance's type does not implement `C`.
    pub fn view<C: ?Sized + ServiceContract>(&self) -> Option<Holder<C>> {
        if self.value.is_none() {
            return Some(Holder::new());
        }
        let instance = self.instance()?;
        instance.view::<C>().map(|value| Holder {
            value: Some(value),
            origin: self.origin,
        })
    }
}

impl<T: ?Sized> Default for Holder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Holder<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            origin: self.origin,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Holder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Holder")
            .field("is_set", &self.is_set())
            .field("origin", &self.origin.map(|handle| handle.name()))
            .finish()
    }
}

fn set_erased(target: &mut ErasedValue, value: Instance) -> Result<()> {
    downcast_target::<Holder<ErasedValue>>(target)?.fill(value);
    Ok(())
}

/// Descriptor of [`Holder`]
#[linkme::distributed_slice(TYPE_DESCRIPTORS)]
pub static HOLDER_TYPE: TypeDescriptor = TypeDescriptor {
    type_params: &["T"],
    constructor: Some(|| Box::new(Holder::<ErasedValue>::new())),
    attributes: &[AttributeDescriptor::private("value", TypeRef::of("T"))],
    methods: &[
        MethodDescriptor::public("get"),
        MethodDescriptor {
            parameters: &[TypeRef::of("T")],
            invoke: Some(set_erased),
            ..MethodDescriptor::public("set")
        },
    ],
    ..TypeDescriptor::concrete(HOLDER_TYPE_NAME)
};
