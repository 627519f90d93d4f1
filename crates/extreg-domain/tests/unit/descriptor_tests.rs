//! Tests for type descriptors and handles

use std::collections::HashSet;

use extreg_domain::constants::{HOLDER_TYPE_NAME, INJECTION_CATEGORY_NAME};
use extreg_domain::ports::INJECTION_PROVIDER_CONTRACT;
use extreg_domain::registry::TYPE_DESCRIPTORS;
use extreg_domain::value_objects::{
    AttributeDescriptor, HOLDER_TYPE, Marker, MemberMarker, TypeDescriptor, TypeHandle, TypeKind,
    TypeRef, derived_alias, provider_alias, simple_name,
};

static NAMED_CONTRACT: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::ServiceCategory],
    ..TypeDescriptor::contract("pkg.CacheService")
};

static ADAPTER: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::Adapter],
    ..TypeDescriptor::concrete("pkg.CacheAdapter")
};

static RESERVED: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::Extension(Some("later"))],
    ..TypeDescriptor::concrete("pkg.Reserved")
};

static COMPONENT: TypeDescriptor = TypeDescriptor {
    markers: &[Marker::Component(Some("board"))],
    attributes: &[
        AttributeDescriptor {
            markers: &[MemberMarker::Injectable(Some("fast"))],
            ..AttributeDescriptor::private("cache", TypeRef::of("pkg.CacheService"))
        },
        AttributeDescriptor {
            markers: &[MemberMarker::DisableInject, MemberMarker::Injectable(None)],
            ..AttributeDescriptor::private("audit", TypeRef::of("pkg.Clock"))
        },
    ],
    ..TypeDescriptor::concrete("pkg.Dashboard")
};

static SAME_NAME: TypeDescriptor = TypeDescriptor::concrete("pkg.Dashboard");

#[test]
fn test_contract_markers() {
    let contract = TypeHandle::new(&NAMED_CONTRACT);
    assert!(contract.is_contract());
    assert!(contract.is_service_category());
    assert_eq!(contract.descriptor().kind, TypeKind::Contract);

    let adapter = TypeHandle::new(&ADAPTER);
    assert!(adapter.is_adapter());
    assert!(!adapter.is_contract());
    assert!(!adapter.is_extension());

    let reserved = TypeHandle::new(&RESERVED);
    assert!(reserved.is_extension());
    assert_eq!(reserved.provider_name(), Some("later"));
}

#[test]
fn test_member_markers() {
    let dashboard = TypeHandle::new(&COMPONENT);
    assert_eq!(dashboard.component(), Some(Some("board")));
    assert_eq!(dashboard.attributes().len(), 2);

    let cache = dashboard.attribute("cache").unwrap();
    assert_eq!(cache.injectable(), Some(Some("fast")));
    assert!(!cache.is_injection_disabled());

    let audit = dashboard.attribute("audit").unwrap();
    assert_eq!(audit.injectable(), Some(None));
    assert!(audit.is_injection_disabled());

    assert!(dashboard.attribute("missing").is_none());
}

#[test]
fn test_handles_compare_by_name() {
    let first = TypeHandle::new(&COMPONENT);
    let second = TypeHandle::new(&SAME_NAME);
    assert_eq!(first, second);

    let set: HashSet<TypeHandle> = [first, second, TypeHandle::new(&ADAPTER)].into();
    assert_eq!(set.len(), 2);
    assert_eq!(first.to_string(), "pkg.Dashboard");
}

#[test]
fn test_name_rules() {
    assert_eq!(simple_name("pkg.sub.FastCache"), "FastCache");
    assert_eq!(simple_name("FastCache"), "FastCache");
    assert_eq!(derived_alias("pkg.sub.FastCache"), "fastCache");
    assert_eq!(derived_alias("pkg.URLCache"), "uRLCache");
    assert_eq!(
        provider_alias(INJECTION_CATEGORY_NAME, "spi"),
        "extreg.InjectionProvider#spi"
    );
}

#[test]
fn test_builtin_descriptors_are_linked() {
    let names: Vec<&str> = TYPE_DESCRIPTORS.iter().map(|descriptor| descriptor.name).collect();
    assert!(names.contains(&HOLDER_TYPE_NAME));
    assert!(names.contains(&INJECTION_CATEGORY_NAME));

    assert!(TypeHandle::new(&INJECTION_PROVIDER_CONTRACT).is_service_category());
    let holder = TypeHandle::new(&HOLDER_TYPE);
    assert_eq!(holder.descriptor().type_params, &["T"]);
    assert!(holder.constructor().is_some());
}
