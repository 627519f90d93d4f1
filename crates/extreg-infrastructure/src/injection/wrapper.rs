//! Structural wrapper classification
//!
//! A wrapper is a generic single-value container such as `Holder<T>`. It
//! is recognised by shape rather than by marker: exactly one attribute,
//! exactly one type parameter, the attribute declared as that parameter,
//! and exactly one getter and one setter for it.

use extreg_domain::value_objects::{AttributeDescriptor, MethodDescriptor, TypeHandle};

use crate::constants::{GETTER_PREFIX, SETTER_PREFIX};

/// A type classified as a wrapper
#[derive(Debug, Clone, Copy)]
pub struct WrapperDescriptor {
    /// The wrapper type
    pub handle: TypeHandle,
    /// Its single attribute
    pub attribute: &'static AttributeDescriptor,
    /// Reads the attribute
    pub getter: &'static MethodDescriptor,
    /// Writes the attribute
    pub setter: &'static MethodDescriptor,
}

impl WrapperDescriptor {
    /// Classify a type, `None` if it is not a wrapper
    pub fn classify(handle: TypeHandle) -> Option<Self> {
        let descriptor = handle.descriptor();
        let ([attribute], [parameter]) = (descriptor.attributes, descriptor.type_params) else {
            return None;
        };
        if attribute.declared_type.name != *parameter {
            return None;
        }

        let mut getters = descriptor.methods.iter().filter(|method| {
            method.parameters.is_empty()
                && is_accessor(GETTER_PREFIX, attribute.name, method.name)
        });
        let mut setters = descriptor.methods.iter().filter(|method| {
            matches!(method.parameters, [only] if only.name == *parameter)
                && is_accessor(SETTER_PREFIX, attribute.name, method.name)
        });
        let (Some(getter), None) = (getters.next(), getters.next()) else {
            return None;
        };
        let (Some(setter), None) = (setters.next(), setters.next()) else {
            return None;
        };

        Some(Self {
            handle,
            attribute,
            getter,
            setter,
        })
    }
}

/// Whether a type is a wrapper
pub fn is_wrapper(handle: TypeHandle) -> bool {
    WrapperDescriptor::classify(handle).is_some()
}

// `get`, `get_value` and `getValue` all access `value`
fn is_accessor(prefix: &str, attribute: &str, method: &str) -> bool {
    let Some(rest) = method.strip_prefix(prefix) else {
        return false;
    };
    if rest.is_empty() {
        return true;
    }
    if let Some(snake) = rest.strip_prefix('_') {
        return snake == attribute;
    }
    let mut chars = attribute.chars();
    match chars.next() {
        Some(first) => rest == first.to_uppercase().chain(chars).collect::<String>(),
        None => false,
    }
}

/// Attribute name a setter writes, if the method is named like a setter
///
/// `set_fast_cache` writes `fast_cache` and `setFastCache` writes
/// `fastCache`. A bare `set` writes nothing, and neither do words that
/// merely start with `set`, such as `setup` or `settle`.
pub fn attribute_name_from_setter(method: &str) -> Option<String> {
    let rest = method.strip_prefix(SETTER_PREFIX)?;
    if let Some(snake) = rest.strip_prefix('_') {
        return (!snake.is_empty()).then(|| snake.to_string());
    }
    let mut chars = rest.chars();
    let first = chars.next().filter(|first| first.is_uppercase())?;
    Some(first.to_lowercase().chain(chars).collect())
}
