//! Shared fixtures: a `pkg.CacheService` category, its providers, and a
//! few components wired to each other.
//!
//! Descriptors here are plain statics handed to a [`StaticTypeCatalog`],
//! so every test builds an isolated context.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use extreg_domain::contract_binding;
use extreg_domain::error::Result;
use extreg_domain::ports::{InjectionProvider, InjectionRequest, ServiceContract};
use extreg_domain::value_objects::{
    AttributeDescriptor, ErasedValue, Holder, Instance, Marker, MemberMarker, MethodDescriptor,
    TypeDescriptor, TypeRef, downcast_target,
};
use extreg_domain::constants::{INJECTION_CATEGORY_NAME, STABLE_DESCRIPTOR_DIR, TEST_DESCRIPTOR_DIR};
use extreg_infrastructure::{EmbeddedResources, ExtensionContext, StaticTypeCatalog};

pub const CACHE_CATEGORY: &str = "pkg.CacheService";

// ============================================================================
// CATEGORY
// ============================================================================

pub trait CacheService: Send + Sync + std::fmt::Debug {
    fn label(&self) -> &str;
}

impl ServiceContract for dyn CacheService {
    const NAME: &'static str = CACHE_CATEGORY;
}

pub static CACHE_SERVICE_CONTRACT: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::ServiceCategory],
    ..TypeDescriptor::contract(CACHE_CATEGORY)
};

pub trait Unmarked: Send + Sync {}

impl ServiceContract for dyn Unmarked {
    const NAME: &'static str = "pkg.Unmarked";
}

pub static UNMARKED_CONTRACT: TypeDescriptor = TypeDescriptor::contract("pkg.Unmarked");

/// Names a concrete type instead of a contract
pub trait Misfiled: Send + Sync {}

impl ServiceContract for dyn Misfiled {
    const NAME: &'static str = "pkg.FastCache";
}

pub trait Uncatalogued: Send + Sync {}

impl ServiceContract for dyn Uncatalogued {
    const NAME: &'static str = "pkg.Uncatalogued";
}

// ============================================================================
// PROVIDERS
// ============================================================================

#[derive(Debug, Default)]
pub struct FastCache;

impl CacheService for FastCache {
    fn label(&self) -> &str {
        "fast"
    }
}

pub static FAST_CACHE_TYPE: TypeDescriptor = TypeDescriptor {
    implements: &[contract_binding!(FastCache => dyn CacheService)],
    constructor: Some(|| Box::new(FastCache)),
    ..TypeDescriptor::concrete("pkg.FastCache")
};

#[derive(Debug, Default)]
pub struct SlowCache;

impl CacheService for SlowCache {
    fn label(&self) -> &str {
        "slow"
    }
}

pub static SLOW_CACHE_TYPE: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::Provider(Some("slow"))],
    implements: &[contract_binding!(SlowCache => dyn CacheService)],
    constructor: Some(|| Box::new(SlowCache)),
    ..TypeDescriptor::concrete("pkg.SlowCache")
};

/// Claims the local name `fast` through its provider marker
#[derive(Debug, Default)]
pub struct ImpostorCache;

impl CacheService for ImpostorCache {
    fn label(&self) -> &str {
        "impostor"
    }
}

pub static IMPOSTOR_CACHE_TYPE: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::Provider(Some("fast"))],
    implements: &[contract_binding!(ImpostorCache => dyn CacheService)],
    constructor: Some(|| Box::new(ImpostorCache)),
    ..TypeDescriptor::concrete("pkg.ImpostorCache")
};

/// Only the concurrency test builds this type
pub static COUNTED_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
pub struct CountedCache;

impl CacheService for CountedCache {
    fn label(&self) -> &str {
        "counted"
    }
}

pub static COUNTED_CACHE_TYPE: TypeDescriptor = TypeDescriptor {
    implements: &[contract_binding!(CountedCache => dyn CacheService)],
    constructor: Some(|| {
        COUNTED_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(std::time::Duration::from_millis(5));
        Box::new(CountedCache)
    }),
    ..TypeDescriptor::concrete("pkg.CountedCache")
};

#[derive(Debug)]
pub struct PanickingCache;

impl CacheService for PanickingCache {
    fn label(&self) -> &str {
        "panicking"
    }
}

pub static PANICKING_CACHE_TYPE: TypeDescriptor = TypeDescriptor {
    implements: &[contract_binding!(PanickingCache => dyn CacheService)],
    constructor: Some(|| panic!("cache backend unavailable")),
    ..TypeDescriptor::concrete("pkg.PanickingCache")
};

/// Implements the category but cannot be constructed
pub static ABSTRACT_CACHE_TYPE: TypeDescriptor = TypeDescriptor {
    implements: &[contract_binding!(FastCache => dyn CacheService)],
    ..TypeDescriptor::concrete("pkg.AbstractCache")
};

/// Reserved extension provider
pub static RESERVED_CACHE_TYPE: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::Extension(None)],
    implements: &[contract_binding!(FastCache => dyn CacheService)],
    ..TypeDescriptor::concrete("pkg.ReservedCache")
};

/// Implements nothing
pub static STRANGER_TYPE: TypeDescriptor = TypeDescriptor {
    constructor: Some(|| Box::new(FastCache)),
    ..TypeDescriptor::concrete("pkg.Stranger")
};

/// Delegating wrapper: holds one value and serves the category itself
#[derive(Debug)]
pub struct LazyCache {
    value: Holder<ErasedValue>,
}

impl CacheService for LazyCache {
    fn label(&self) -> &str {
        if self.value.is_set() { "lazy-filled" } else { "lazy-empty" }
    }
}

fn lazy_set(target: &mut ErasedValue, value: Instance) -> Result<()> {
    downcast_target::<LazyCache>(target)?.value.fill(value);
    Ok(())
}

pub static LAZY_CACHE_TYPE: TypeDescriptor = TypeDescriptor {
    type_params: &["T"],
    implements: &[contract_binding!(LazyCache => dyn CacheService)],
    constructor: Some(|| {
        Box::new(LazyCache {
            value: Holder::new(),
        })
    }),
    attributes: &[AttributeDescriptor::private("value", TypeRef::of("T"))],
    methods: &[
        MethodDescriptor::public("get"),
        MethodDescriptor {
            parameters: &[TypeRef::of("T")],
            invoke: Some(lazy_set),
            ..MethodDescriptor::public("set")
        },
    ],
    ..TypeDescriptor::concrete("pkg.LazyCache")
};

// ============================================================================
// INJECTION PROVIDERS
// ============================================================================

/// Answers every request named `fixedClock` with a clock of its own
pub struct FixedClockProvider;

impl InjectionProvider for FixedClockProvider {
    fn resolve(&self, request: &InjectionRequest<'_>) -> Option<Instance> {
        (request.name == "fixedClock").then(|| {
            Instance::new(
                request.target,
                Arc::new(Clock { ticks: 42 }) as Arc<ErasedValue>,
            )
        })
    }
}

pub static FIXED_CLOCK_PROVIDER_TYPE: TypeDescriptor = TypeDescriptor {
    implements: &[contract_binding!(FixedClockProvider => dyn InjectionProvider)],
    constructor: Some(|| Box::new(FixedClockProvider)),
    ..TypeDescriptor::concrete("pkg.FixedClockProvider")
};

/// Fails its first construction only
pub static FLAKY_PROVIDER_FAILED: AtomicBool = AtomicBool::new(false);

pub struct FlakyProvider;

impl InjectionProvider for FlakyProvider {
    fn resolve(&self, _request: &InjectionRequest<'_>) -> Option<Instance> {
        None
    }
}

pub static FLAKY_PROVIDER_TYPE: TypeDescriptor = TypeDescriptor {
    implements: &[contract_binding!(FlakyProvider => dyn InjectionProvider)],
    constructor: Some(|| {
        if !FLAKY_PROVIDER_FAILED.swap(true, Ordering::SeqCst) {
            panic!("provider backend not ready");
        }
        Box::new(FlakyProvider)
    }),
    ..TypeDescriptor::concrete("pkg.FlakyProvider")
};

/// A second, different adapter-marked type
pub static ROGUE_ADAPTER_TYPE: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::Adapter],
    implements: &[contract_binding!(FixedClockProvider => dyn InjectionProvider)],
    constructor: Some(|| Box::new(FixedClockProvider)),
    ..TypeDescriptor::concrete("pkg.RogueAdapter")
};

// ============================================================================
// COMPONENTS
// ============================================================================

#[derive(Debug, Default)]
pub struct Clock {
    pub ticks: u64,
}

pub static CLOCK_TYPE: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::Component(None)],
    constructor: Some(|| Box::new(Clock { ticks: 7 })),
    ..TypeDescriptor::concrete("pkg.Clock")
};

/// Exercises every injection path against [`Clock`] and `pkg.CacheService`
#[derive(Default)]
pub struct Dashboard {
    pub clock: Option<Arc<Clock>>,
    pub held: Holder<Clock>,
    pub cache: Option<Arc<dyn CacheService>>,
    pub fixed: Option<Arc<Clock>>,
    pub audit: Option<Arc<Clock>>,
    pub backup: Option<Arc<Clock>>,
    pub spare: Option<Arc<Clock>>,
}

fn dashboard(target: &mut ErasedValue) -> Result<&mut Dashboard> {
    downcast_target::<Dashboard>(target)
}

fn set_clock(target: &mut ErasedValue, value: Instance) -> Result<()> {
    dashboard(target)?.clock = Some(value.expect_type::<Clock>()?);
    Ok(())
}

fn set_held(target: &mut ErasedValue, value: Instance) -> Result<()> {
    dashboard(target)?.held = value.expect_holder::<Clock>()?;
    Ok(())
}

fn assign_cache(target: &mut ErasedValue, value: Instance) -> Result<()> {
    dashboard(target)?.cache = Some(value.expect_view::<dyn CacheService>()?);
    Ok(())
}

fn assign_fixed(target: &mut ErasedValue, value: Instance) -> Result<()> {
    dashboard(target)?.fixed = Some(value.expect_type::<Clock>()?);
    Ok(())
}

fn assign_audit(target: &mut ErasedValue, value: Instance) -> Result<()> {
    dashboard(target)?.audit = Some(value.expect_type::<Clock>()?);
    Ok(())
}

fn set_backup(target: &mut ErasedValue, value: Instance) -> Result<()> {
    dashboard(target)?.backup = Some(value.expect_type::<Clock>()?);
    Ok(())
}

fn set_spare(target: &mut ErasedValue, value: Instance) -> Result<()> {
    dashboard(target)?.spare = Some(value.expect_type::<Clock>()?);
    Ok(())
}

pub static DASHBOARD_TYPE: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::Component(None)],
    constructor: Some(|| Box::new(Dashboard::default())),
    attributes: &[
        AttributeDescriptor {
            markers: &[MemberMarker::Injectable(Some("fast"))],
            assign: Some(assign_cache),
            ..AttributeDescriptor::private("cache", TypeRef::of(CACHE_CATEGORY))
        },
        AttributeDescriptor {
            markers: &[MemberMarker::Injectable(Some("fixedClock"))],
            assign: Some(assign_fixed),
            ..AttributeDescriptor::private("fixed", TypeRef::of("pkg.Clock"))
        },
        AttributeDescriptor {
            markers: &[MemberMarker::Injectable(None), MemberMarker::DisableInject],
            assign: Some(assign_audit),
            ..AttributeDescriptor::private("audit", TypeRef::of("pkg.Clock"))
        },
        AttributeDescriptor {
            markers: &[MemberMarker::DisableInject],
            ..AttributeDescriptor::private("backup", TypeRef::of("pkg.Clock"))
        },
    ],
    methods: &[
        MethodDescriptor {
            parameters: &[TypeRef::of("pkg.Clock")],
            invoke: Some(set_clock),
            ..MethodDescriptor::public("set_clock")
        },
        MethodDescriptor {
            parameters: &[TypeRef::generic("extreg.Holder", &["pkg.Clock"])],
            invoke: Some(set_held),
            ..MethodDescriptor::public("set_held")
        },
        MethodDescriptor {
            parameters: &[TypeRef::of("pkg.Clock")],
            invoke: Some(set_backup),
            ..MethodDescriptor::public("set_backup")
        },
        MethodDescriptor {
            parameters: &[TypeRef::of("pkg.Clock")],
            markers: &[MemberMarker::DisableInject],
            invoke: Some(set_spare),
            ..MethodDescriptor::public("setSpare")
        },
    ],
    ..TypeDescriptor::concrete("pkg.Dashboard")
};

/// `pkg.Ping` and `pkg.Pong` need each other
#[derive(Default)]
pub struct Ping {
    pub pong: Option<Arc<Pong>>,
}

#[derive(Default)]
pub struct Pong {
    pub ping: Option<Arc<Ping>>,
}

fn set_pong(target: &mut ErasedValue, value: Instance) -> Result<()> {
    downcast_target::<Ping>(target)?.pong = Some(value.expect_type::<Pong>()?);
    Ok(())
}

fn set_ping(target: &mut ErasedValue, value: Instance) -> Result<()> {
    downcast_target::<Pong>(target)?.ping = Some(value.expect_type::<Ping>()?);
    Ok(())
}

pub static PING_TYPE: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::Component(None)],
    constructor: Some(|| Box::new(Ping::default())),
    methods: &[MethodDescriptor {
        parameters: &[TypeRef::of("cyclic.Pong")],
        invoke: Some(set_pong),
        ..MethodDescriptor::public("setPong")
    }],
    ..TypeDescriptor::concrete("cyclic.Ping")
};

pub static PONG_TYPE: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::Component(None)],
    constructor: Some(|| Box::new(Pong::default())),
    methods: &[MethodDescriptor {
        parameters: &[TypeRef::of("cyclic.Ping")],
        invoke: Some(set_ping),
        ..MethodDescriptor::public("setPing")
    }],
    ..TypeDescriptor::concrete("cyclic.Pong")
};

/// Named explicitly; collides with `pkg.Clock`'s derived alias
pub static SHADOW_CLOCK_TYPE: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::Component(Some("clock"))],
    constructor: Some(|| Box::new(Clock { ticks: 0 })),
    ..TypeDescriptor::concrete("shadow.ShadowClock")
};

/// Takes any cache through a holder of the category
#[derive(Default)]
pub struct CacheClient {
    pub backing: Holder<dyn CacheService>,
}

fn set_backing(target: &mut ErasedValue, value: Instance) -> Result<()> {
    downcast_target::<CacheClient>(target)?.backing =
        value.expect_holder_view::<dyn CacheService>()?;
    Ok(())
}

pub static CACHE_CLIENT_TYPE: TypeDescriptor = TypeDescriptor {
    constructor: Some(|| Box::new(CacheClient::default())),
    methods: &[MethodDescriptor {
        parameters: &[TypeRef::generic("extreg.Holder", &[CACHE_CATEGORY])],
        invoke: Some(set_backing),
        ..MethodDescriptor::public("set_backing")
    }],
    ..TypeDescriptor::concrete("client.CacheClient")
};

/// Lookalike setters only
#[derive(Default)]
pub struct Workbench {
    pub touched: bool,
}

fn touch(target: &mut ErasedValue, _value: Instance) -> Result<()> {
    downcast_target::<Workbench>(target)?.touched = true;
    Ok(())
}

pub static WORKBENCH_TYPE: TypeDescriptor = TypeDescriptor {
    constructor: Some(|| Box::new(Workbench::default())),
    methods: &[
        MethodDescriptor {
            parameters: &[TypeRef::of("pkg.Clock")],
            invoke: Some(touch),
            ..MethodDescriptor::public("setup")
        },
        MethodDescriptor {
            parameters: &[TypeRef::of("pkg.Clock")],
            invoke: Some(touch),
            ..MethodDescriptor::public("settle")
        },
    ],
    ..TypeDescriptor::concrete("client.Workbench")
};

/// A component that also serves the cache category
#[derive(Debug, Default)]
pub struct DualCache;

impl CacheService for DualCache {
    fn label(&self) -> &str {
        "dual"
    }
}

pub static DUAL_CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

pub static DUAL_CACHE_TYPE: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::Component(None)],
    implements: &[contract_binding!(DualCache => dyn CacheService)],
    constructor: Some(|| {
        DUAL_CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        Box::new(DualCache)
    }),
    ..TypeDescriptor::concrete("dual.DualCache")
};

// ============================================================================
// CONTEXT BUILDERS
// ============================================================================

/// Built-ins plus every fixture type, dashboard discovered before its clock
pub fn fixture_catalog() -> StaticTypeCatalog {
    StaticTypeCatalog::with_builtins()
        .with(&CACHE_SERVICE_CONTRACT)
        .with(&UNMARKED_CONTRACT)
        .with(&FAST_CACHE_TYPE)
        .with(&SLOW_CACHE_TYPE)
        .with(&IMPOSTOR_CACHE_TYPE)
        .with(&COUNTED_CACHE_TYPE)
        .with(&PANICKING_CACHE_TYPE)
        .with(&ABSTRACT_CACHE_TYPE)
        .with(&RESERVED_CACHE_TYPE)
        .with(&STRANGER_TYPE)
        .with(&LAZY_CACHE_TYPE)
        .with(&FIXED_CLOCK_PROVIDER_TYPE)
        .with(&ROGUE_ADAPTER_TYPE)
        .with(&FLAKY_PROVIDER_TYPE)
        .with(&DASHBOARD_TYPE)
        .with(&CLOCK_TYPE)
        .with(&PING_TYPE)
        .with(&PONG_TYPE)
        .with(&SHADOW_CLOCK_TYPE)
        .with(&CACHE_CLIENT_TYPE)
        .with(&WORKBENCH_TYPE)
        .with(&DUAL_CACHE_TYPE)
}

/// Path of the stable descriptor of the cache category
pub fn cache_descriptor_path() -> String {
    format!("{STABLE_DESCRIPTOR_DIR}{CACHE_CATEGORY}")
}

/// Path of the test-override descriptor of the injection category
pub fn injection_override_path() -> String {
    format!("{TEST_DESCRIPTOR_DIR}{INJECTION_CATEGORY_NAME}")
}

/// Isolated context whose cache category is declared by `descriptor`
pub fn context_with_caches(descriptor: &str) -> ExtensionContext {
    ExtensionContext::builder()
        .with_catalog(fixture_catalog())
        .with_resources(EmbeddedResources::with_builtins().with(cache_descriptor_path(), descriptor))
        .build()
}

/// Isolated context with arbitrary resources
pub fn context_with_resources(resources: EmbeddedResources) -> ExtensionContext {
    ExtensionContext::builder()
        .with_catalog(fixture_catalog())
        .with_resources(resources)
        .build()
}
