//! Type descriptors
//!
//! Compile-time registration tables describing every type the registry can
//! discover, construct, or inject. A descriptor plays the part a runtime
//! class object plays in reflective containers: it names the type, lists
//! its markers, generic parameters and contract bindings, and exposes its
//! attributes and methods as plain function pointers.
//!
//! Descriptors are `'static` and usually declared as statics submitted to
//! [`TYPE_DESCRIPTORS`](crate::registry::TYPE_DESCRIPTORS):
//!
//! ```ignore
//! #[linkme::distributed_slice(TYPE_DESCRIPTORS)]
//! static FAST_CACHE_TYPE: TypeDescriptor = TypeDescriptor {
//!     implements: &[contract_binding!(FastCache => dyn CacheService)],
//!     constructor: Some(|| Box::new(FastCache::default())),
//!     ..TypeDescriptor::concrete("pkg.FastCache")
//! };
//! ```

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::constants::NAMESPACE_SEPARATOR;
use crate::error::Result;
use crate::value_objects::instance::Instance;

/// Type-erased, owned value under construction
pub type ErasedValue = dyn Any + Send + Sync;

/// Zero-argument constructor
pub type Constructor = fn() -> Box<ErasedValue>;

/// Assigns or passes a resolved value to a target under construction
///
/// Used both for single-argument method invocation and for forced
/// attribute assignment. Implementations downcast the target and value and
/// report [`Error::TypeMismatch`](crate::Error::TypeMismatch) on failure.
pub type Injector = fn(&mut ErasedValue, Instance) -> Result<()>;

/// Produces a contract view (`Box<Arc<dyn Contract>>`) of a concrete value
pub type ContractView = fn(&Arc<ErasedValue>) -> Option<Box<ErasedValue>>;

/// Whether a descriptor describes a contract or an implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Abstract capability contract (trait)
    Contract,
    /// Concrete, possibly constructible type
    Concrete,
}

/// Declarative markers a type may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// The contract is a service category
    ServiceCategory,
    /// The type is the injection adapter of its category
    Adapter,
    /// The type is a provider, optionally overriding its local name
    Provider(Option<&'static str>),
    /// Reserved for future provider kinds, optionally overriding its local name
    Extension(Option<&'static str>),
    /// The type is a standalone component, optionally naming its alias
    Component(Option<&'static str>),
}

/// Declarative markers an attribute or method may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberMarker {
    /// The attribute is injected, optionally under an explicit name
    Injectable(Option<&'static str>),
    /// Never inject through this member
    DisableInject,
}

/// Member visibility as seen by the injection engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Externally accessible
    Public,
    /// Encapsulated
    Private,
}

/// Reference to a (possibly generic) type by qualified name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRef {
    /// Qualified name, or the name of a generic parameter
    pub name: &'static str,
    /// Generic arguments, outermost first
    pub args: &'static [&'static str],
}

impl TypeRef {
    /// Reference a non-generic type
    pub const fn of(name: &'static str) -> Self {
        Self { name, args: &[] }
    }

    /// Reference a generic type applied to arguments
    pub const fn generic(name: &'static str, args: &'static [&'static str]) -> Self {
        Self { name, args }
    }
}

/// Binding of a concrete type to a contract it implements
#[derive(Clone, Copy)]
pub struct ContractBinding {
    /// Qualified name of the contract
    pub contract: &'static str,
    /// View of a concrete value as the contract
    pub view: ContractView,
}

impl fmt::Debug for ContractBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContractBinding")
            .field("contract", &self.contract)
            .finish_non_exhaustive()
    }
}

/// Declared attribute of a type
#[derive(Clone, Copy)]
pub struct AttributeDescriptor {
    /// Attribute name
    pub name: &'static str,
    /// Declared type
    pub declared_type: TypeRef,
    /// Visibility
    pub visibility: Visibility,
    /// Markers
    pub markers: &'static [MemberMarker],
    /// Forced assignment, bypassing encapsulation
    pub assign: Option<Injector>,
}

impl AttributeDescriptor {
    /// Private, unmarked attribute without an assigner
    pub const fn private(name: &'static str, declared_type: TypeRef) -> Self {
        Self {
            name,
            declared_type,
            visibility: Visibility::Private,
            markers: &[],
            assign: None,
        }
    }

    /// Whether injection is disabled for this attribute
    pub fn is_injection_disabled(&self) -> bool {
        self.markers.contains(&MemberMarker::DisableInject)
    }

    /// The injectable marker, with its explicit name if any
    pub fn injectable(&self) -> Option<Option<&'static str>> {
        self.markers.iter().find_map(|marker| match marker {
            MemberMarker::Injectable(name) => Some(*name),
            MemberMarker::DisableInject => None,
        })
    }
}

impl fmt::Debug for AttributeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeDescriptor")
            .field("name", &self.name)
            .field("declared_type", &self.declared_type)
            .field("visibility", &self.visibility)
            .field("markers", &self.markers)
            .finish_non_exhaustive()
    }
}

/// Declared method of a type
#[derive(Clone, Copy)]
pub struct MethodDescriptor {
    /// Method name
    pub name: &'static str,
    /// Parameter types
    pub parameters: &'static [TypeRef],
    /// Visibility
    pub visibility: Visibility,
    /// Markers
    pub markers: &'static [MemberMarker],
    /// Invocation for single-argument methods
    pub invoke: Option<Injector>,
}

impl MethodDescriptor {
    /// Public method with no parameters, markers or invocation
    ///
    /// Setters fill in the rest with struct update syntax:
    ///
    /// ```ignore
    /// MethodDescriptor {
    ///     parameters: &[TypeRef::of("pkg.FastCache")],
    ///     invoke: Some(set_fast_cache),
    ///     ..MethodDescriptor::public("set_fast_cache")
    /// }
    /// ```
    pub const fn public(name: &'static str) -> Self {
        Self {
            name,
            parameters: &[],
            visibility: Visibility::Public,
            markers: &[],
            invoke: None,
        }
    }

    /// Whether injection is disabled for this method
    pub fn is_injection_disabled(&self) -> bool {
        self.markers.contains(&MemberMarker::DisableInject)
    }
}

impl fmt::Debug for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("name", &self.name)
            .field("parameters", &self.parameters)
            .field("visibility", &self.visibility)
            .field("markers", &self.markers)
            .finish_non_exhaustive()
    }
}

/// Registration table for one type
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    /// Fully qualified, dot-separated name
    pub name: &'static str,
    /// Contract or concrete
    pub kind: TypeKind,
    /// Type-level markers
    pub markers: &'static [Marker],
    /// Generic parameter names
    pub type_params: &'static [&'static str],
    /// Contracts this type implements
    pub implements: &'static [ContractBinding],
    /// Zero-argument constructor
    pub constructor: Option<Constructor>,
    /// Declared attributes
    pub attributes: &'static [AttributeDescriptor],
    /// Declared methods
    pub methods: &'static [MethodDescriptor],
}

impl TypeDescriptor {
    /// Descriptor of a contract type
    pub const fn contract(name: &'static str) -> Self {
        Self {
            name,
            kind: TypeKind::Contract,
            markers: &[],
            type_params: &[],
            implements: &[],
            constructor: None,
            attributes: &[],
            methods: &[],
        }
    }

    /// Descriptor of a concrete type with no members
    pub const fn concrete(name: &'static str) -> Self {
        Self {
            kind: TypeKind::Concrete,
            ..Self::contract(name)
        }
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("markers", &self.markers)
            .field("type_params", &self.type_params)
            .field("implements", &self.implements)
            .field("constructible", &self.constructor.is_some())
            .field("attributes", &self.attributes)
            .field("methods", &self.methods)
            .finish()
    }
}

/// Opaque handle to a registered type
///
/// Handles compare and hash by qualified name, so two handles obtained
/// from different catalogs for the same name are the same type.
#[derive(Clone, Copy)]
pub struct TypeHandle(&'static TypeDescriptor);

impl TypeHandle {
    /// Wrap a descriptor
    pub const fn new(descriptor: &'static TypeDescriptor) -> Self {
        Self(descriptor)
    }

    /// The underlying descriptor
    pub fn descriptor(&self) -> &'static TypeDescriptor {
        self.0
    }

    /// Fully qualified name
    pub fn name(&self) -> &'static str {
        self.0.name
    }

    /// Name after the last namespace separator
    pub fn simple_name(&self) -> &'static str {
        simple_name(self.0.name)
    }

    /// Whether this is a contract type
    pub fn is_contract(&self) -> bool {
        self.0.kind == TypeKind::Contract
    }

    /// Whether the type carries the service category marker
    pub fn is_service_category(&self) -> bool {
        self.has_marker(&Marker::ServiceCategory)
    }

    /// Whether the type carries the adapter marker
    pub fn is_adapter(&self) -> bool {
        self.has_marker(&Marker::Adapter)
    }

    /// Whether the type carries the reserved extension marker
    pub fn is_extension(&self) -> bool {
        self.0
            .markers
            .iter()
            .any(|marker| matches!(marker, Marker::Extension(_)))
    }

    /// Non-empty local name declared through the provider or extension marker
    pub fn provider_name(&self) -> Option<&'static str> {
        self.0.markers.iter().find_map(|marker| match marker {
            Marker::Provider(Some(name)) | Marker::Extension(Some(name)) if !name.is_empty() => {
                Some(*name)
            }
            _ => None,
        })
    }

    /// Component marker, with its declared alias if any
    pub fn component(&self) -> Option<Option<&'static str>> {
        self.0.markers.iter().find_map(|marker| match marker {
            Marker::Component(name) => Some(name.filter(|name| !name.is_empty())),
            _ => None,
        })
    }

    /// Binding to the named contract, if the type implements it
    pub fn binding(&self, contract: &str) -> Option<&'static ContractBinding> {
        self.0
            .implements
            .iter()
            .find(|binding| binding.contract == contract)
    }

    /// Whether the type implements the named contract
    pub fn implements(&self, contract: &str) -> bool {
        self.binding(contract).is_some()
    }

    /// Zero-argument constructor
    pub fn constructor(&self) -> Option<Constructor> {
        self.0.constructor
    }

    /// Declared attributes
    pub fn attributes(&self) -> &'static [AttributeDescriptor] {
        self.0.attributes
    }

    /// Declared methods
    pub fn methods(&self) -> &'static [MethodDescriptor] {
        self.0.methods
    }

    /// Declared attribute by name
    pub fn attribute(&self, name: &str) -> Option<&'static AttributeDescriptor> {
        self.0
            .attributes
            .iter()
            .find(|attribute| attribute.name == name)
    }

    fn has_marker(&self, marker: &Marker) -> bool {
        self.0.markers.contains(marker)
    }
}

impl PartialEq for TypeHandle {
    fn eq(&self, other: &Self) -> bool {
        self.0.name == other.0.name
    }
}

impl Eq for TypeHandle {}

impl Hash for TypeHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.name.hash(state);
    }
}

impl fmt::Debug for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeHandle").field(&self.0.name).finish()
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name)
    }
}

/// Name after the last namespace separator
pub fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit_once(NAMESPACE_SEPARATOR)
        .map_or(qualified, |(_, simple)| simple)
}

/// Alias derived from a type name: its simple name with a lower-cased first letter
///
/// `pkg.FastCache` derives `fastCache`.
pub fn derived_alias(qualified: &str) -> String {
    let simple = simple_name(qualified);
    let mut chars = simple.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
