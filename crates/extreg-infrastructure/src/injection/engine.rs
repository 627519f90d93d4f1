//! Attribute injection engine
//!
//! Populates a freshly constructed, not yet published value in two passes:
//!
//! 1. **Setter pass**: public single-argument methods named `set_x` or
//!    `setX` receive the value resolved for attribute `x`.
//! 2. **Marker pass**: non-public attributes carrying
//!    [`MemberMarker::Injectable`](extreg_domain::value_objects::MemberMarker)
//!    are assigned the value resolved for the marker's name, or for the
//!    derived alias of their declared type.
//!
//! Members marked `DisableInject` are left alone by both passes. When the
//! declared type is a wrapper, a fresh wrapper is built around the value
//! resolved for the wrapped type's derived alias and passed instead.
//!
//! Values come from the published [`InjectionAdapter`]. Before the adapter
//! is published, injection does nothing. An attribute that cannot be
//! resolved or assigned is skipped and reported, never treated as an error.

use std::sync::Arc;

use extreg_domain::error::Error;
use extreg_domain::ports::{InjectionProvider, InjectionRequest, TypeCatalog};
use extreg_domain::value_objects::{
    ErasedValue, Injector, Instance, TypeHandle, TypeRef, Visibility, derived_alias,
};
use tracing::debug;

use crate::cache::GlobalCache;
use crate::injection::wrapper::{WrapperDescriptor, attribute_name_from_setter};

/// Which pass found an injection point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectionPass {
    /// Setter method
    Setter,
    /// Marked attribute
    Marker,
}

/// How the value of an injection point is obtained
#[derive(Debug, Clone, Copy)]
pub enum Resolution {
    /// Resolve a value of the declared type directly
    Direct {
        /// Declared type name
        target: &'static str,
    },
    /// Resolve the wrapped type's value and pass it inside a new wrapper
    Wrapped {
        /// The declared wrapper type
        wrapper: WrapperDescriptor,
        /// Generic argument of the declaration, if it had one
        value_type: Option<&'static str>,
    },
}

/// One member the engine will try to populate
#[derive(Debug, Clone)]
pub struct InjectionPoint {
    /// Pass that found the member
    pub pass: InjectionPass,
    /// Attribute name, as reported
    pub attribute: String,
    /// Name offered to the injection providers
    pub name: String,
    /// How the value is obtained
    pub resolution: Resolution,
    apply: Option<Injector>,
}

impl InjectionPoint {
    /// Type whose value is looked up
    pub fn value_type(&self) -> Option<&'static str> {
        match self.resolution {
            Resolution::Direct { target } => Some(target),
            Resolution::Wrapped { value_type, .. } => value_type,
        }
    }
}

/// Outcome of injecting one value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InjectionReport {
    /// Attributes that received a value
    pub injected: Vec<String>,
    /// Attributes left untouched because resolution or assignment failed
    pub skipped: Vec<String>,
}

impl InjectionReport {
    /// Whether every injection point received a value
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
enum SkipReason {
    #[error("type {0} is not catalogued")]
    UnknownType(String),
    #[error("no injection provider supplied a value")]
    Unresolved,
    #[error("member has no injector")]
    NotInjectable,
    #[error("wrapper declared without a value type")]
    UnboundWrapper,
    #[error("wrapper {0} has no zero-argument constructor")]
    NotConstructible(&'static str),
    #[error(transparent)]
    Rejected(#[from] Error),
}

/// Injects attributes through the published injection adapter
pub struct InjectionEngine {
    cache: Arc<GlobalCache>,
    catalog: Arc<dyn TypeCatalog>,
}

impl InjectionEngine {
    /// Engine over a context's cache and catalog
    pub fn new(cache: Arc<GlobalCache>, catalog: Arc<dyn TypeCatalog>) -> Self {
        Self { cache, catalog }
    }

    /// Populate `target`, a value of type `handle` under construction
    pub fn inject(&self, handle: TypeHandle, target: &mut ErasedValue) -> InjectionReport {
        let mut report = InjectionReport::default();
        let Some(adapter) = self.cache.adapter() else {
            debug!(type_name = handle.name(), "No injection adapter published yet, not injecting");
            return report;
        };

        for point in self.injection_points(handle) {
            match self.apply(adapter.as_ref(), &point, target) {
                Ok(()) => {
                    debug!(
                        type_name = handle.name(),
                        attribute = %point.attribute,
                        name = %point.name,
                        "Injected attribute"
                    );
                    report.injected.push(point.attribute);
                }
                Err(reason) => {
                    debug!(
                        type_name = handle.name(),
                        attribute = %point.attribute,
                        name = %point.name,
                        %reason,
                        "Skipped attribute"
                    );
                    report.skipped.push(point.attribute);
                }
            }
        }
        report
    }

    /// Members of `handle` the two passes will try to populate, in order
    pub fn injection_points(&self, handle: TypeHandle) -> Vec<InjectionPoint> {
        let mut points = Vec::new();

        for method in handle.methods() {
            if method.visibility != Visibility::Public || method.is_injection_disabled() {
                continue;
            }
            let [parameter] = method.parameters else {
                continue;
            };
            let Some(attribute) = attribute_name_from_setter(method.name) else {
                continue;
            };
            if handle
                .attribute(&attribute)
                .is_some_and(|declared| declared.is_injection_disabled())
            {
                continue;
            }
            let resolution = self.resolution_for(parameter);
            let name = match resolution {
                Resolution::Direct { .. } => attribute.clone(),
                Resolution::Wrapped { value_type, .. } => {
                    value_type.map(derived_alias).unwrap_or_default()
                }
            };
            points.push(InjectionPoint {
                pass: InjectionPass::Setter,
                attribute,
                name,
                resolution,
                apply: method.invoke,
            });
        }

        for attribute in handle.attributes() {
            let Some(explicit) = attribute.injectable() else {
                continue;
            };
            if attribute.visibility == Visibility::Public || attribute.is_injection_disabled() {
                continue;
            }
            let resolution = self.resolution_for(&attribute.declared_type);
            let name = match (explicit.filter(|name| !name.is_empty()), resolution) {
                (Some(name), _) => name.to_string(),
                (None, Resolution::Direct { target }) => derived_alias(target),
                (None, Resolution::Wrapped { value_type, .. }) => {
                    value_type.map(derived_alias).unwrap_or_default()
                }
            };
            points.push(InjectionPoint {
                pass: InjectionPass::Marker,
                attribute: attribute.name.to_string(),
                name,
                resolution,
                apply: attribute.assign,
            });
        }

        points
    }

    fn resolution_for(&self, declared: &TypeRef) -> Resolution {
        match self
            .catalog
            .resolve(declared.name)
            .and_then(WrapperDescriptor::classify)
        {
            Some(wrapper) => Resolution::Wrapped {
                wrapper,
                value_type: declared.args.first().copied(),
            },
            None => Resolution::Direct {
                target: declared.name,
            },
        }
    }

    fn apply(
        &self,
        adapter: &dyn InjectionProvider,
        point: &InjectionPoint,
        target: &mut ErasedValue,
    ) -> Result<(), SkipReason> {
        let apply = point.apply.ok_or(SkipReason::NotInjectable)?;
        let value = match point.resolution {
            Resolution::Direct { target } => self.resolve(adapter, target, &point.name)?,
            Resolution::Wrapped {
                wrapper,
                value_type,
            } => {
                let value_type = value_type.ok_or(SkipReason::UnboundWrapper)?;
                let inner = self.resolve(adapter, value_type, &point.name)?;
                let construct = wrapper
                    .handle
                    .constructor()
                    .ok_or(SkipReason::NotConstructible(wrapper.handle.name()))?;
                let fill = wrapper.setter.invoke.ok_or(SkipReason::NotInjectable)?;
                let mut filled = construct();
                fill(&mut *filled, inner)?;
                Instance::from_boxed(wrapper.handle, filled)
            }
        };
        apply(target, value)?;
        Ok(())
    }

    fn resolve(
        &self,
        adapter: &dyn InjectionProvider,
        type_name: &str,
        name: &str,
    ) -> Result<Instance, SkipReason> {
        let target = self
            .catalog
            .resolve(type_name)
            .ok_or_else(|| SkipReason::UnknownType(type_name.to_string()))?;
        let request = InjectionRequest {
            target,
            name,
            lookup: self.cache.as_ref(),
        };
        adapter.resolve(&request).ok_or(SkipReason::Unresolved)
    }
}

impl std::fmt::Debug for InjectionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InjectionEngine")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
