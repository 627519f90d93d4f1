//! Tests for the type catalogs

use extreg_domain::constants::{HOLDER_TYPE_NAME, INJECTION_CATEGORY_NAME};
use extreg_domain::ports::TypeCatalog;
use extreg_infrastructure::constants::{
    ALIAS_INJECTION_TYPE_NAME, CONTRACT_INJECTION_TYPE_NAME, INJECTION_ADAPTER_TYPE_NAME,
};
use extreg_infrastructure::{LinkedTypeCatalog, StaticTypeCatalog};

use crate::test_utils::{CLOCK_TYPE, DASHBOARD_TYPE, PING_TYPE, fixture_catalog};

#[test]
fn test_linked_catalog_resolves_builtins() {
    let catalog = LinkedTypeCatalog::new();

    for name in [
        INJECTION_CATEGORY_NAME,
        HOLDER_TYPE_NAME,
        INJECTION_ADAPTER_TYPE_NAME,
        ALIAS_INJECTION_TYPE_NAME,
        CONTRACT_INJECTION_TYPE_NAME,
    ] {
        let handle = catalog.resolve(name);
        assert!(handle.is_some(), "{name} should be catalogued");
        assert_eq!(handle.unwrap().name(), name);
    }
    assert!(catalog.resolve("extreg.Missing").is_none());
}

#[test]
fn test_linked_catalog_enumerates_by_namespace() {
    let catalog = LinkedTypeCatalog::new();

    let injection: Vec<&str> = catalog
        .enumerate("extreg.injection")
        .iter()
        .map(|handle| handle.name())
        .collect();
    assert_eq!(injection.len(), 3);
    assert!(injection.contains(&INJECTION_ADAPTER_TYPE_NAME));

    assert!(catalog.enumerate("extreg").len() >= 5);
    assert!(catalog.enumerate("extreg.inj").is_empty());
}

#[test]
fn test_static_catalog_builtins() {
    let catalog = StaticTypeCatalog::with_builtins();
    assert_eq!(catalog.len(), 5);
    assert!(!catalog.resolve(HOLDER_TYPE_NAME).unwrap().is_contract());
    assert!(catalog.resolve(INJECTION_CATEGORY_NAME).unwrap().is_service_category());
    assert!(StaticTypeCatalog::new().is_empty());
}

#[test]
fn test_static_catalog_enumerates_in_registration_order() {
    let catalog = StaticTypeCatalog::new()
        .with(&DASHBOARD_TYPE)
        .with(&PING_TYPE)
        .with(&CLOCK_TYPE);

    let names: Vec<&str> = catalog
        .enumerate("pkg")
        .iter()
        .map(|handle| handle.name())
        .collect();
    assert_eq!(names, vec!["pkg.Dashboard", "pkg.Clock"]);
    assert_eq!(catalog.enumerate("").len(), 3);
}

#[test]
fn test_static_catalog_registration_replaces_by_name() {
    let mut catalog = fixture_catalog();
    let before = catalog.len();
    catalog.register(&CLOCK_TYPE);
    assert_eq!(catalog.len(), before);
}
