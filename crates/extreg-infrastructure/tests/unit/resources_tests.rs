//! Tests for descriptor resources and descriptor parsing

use std::fs;

use extreg_domain::constants::{INJECTION_CATEGORY_NAME, INTERNAL_DESCRIPTOR_DIR};
use extreg_domain::ports::ResourceLoader;
use extreg_infrastructure::loader::parse_descriptor;
use extreg_infrastructure::{DirectoryResources, EmbeddedResources, LayeredResources};
use tempfile::TempDir;

use crate::test_utils::cache_descriptor_path;

fn write_descriptor(root: &TempDir, path: &str, content: &str) {
    let file = root.path().join(path);
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(file, content).unwrap();
}

#[test]
fn test_builtin_injection_descriptor() {
    let path = format!("{INTERNAL_DESCRIPTOR_DIR}{INJECTION_CATEGORY_NAME}");
    let resources = EmbeddedResources::with_builtins().load(&path).unwrap();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].location, format!("embedded:{path}"));

    let entries = parse_descriptor(&resources[0]);
    let names: Vec<&str> = entries.iter().map(|entry| entry.local_name.as_str()).collect();
    assert_eq!(names, vec!["adapter", "spi", "contract"]);
    assert_eq!(entries[0].reference.name, "extreg.injection.InjectionAdapter");
}

#[test]
fn test_embedded_resources_keep_every_insert() {
    let resources = EmbeddedResources::new()
        .with("a/pkg.CacheService", "fast=pkg.FastCache")
        .with("a/pkg.CacheService", "slow=pkg.SlowCache");

    let loaded = resources.load("a/pkg.CacheService").unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].content, "slow=pkg.SlowCache");
    assert!(resources.load("a/pkg.Other").unwrap().is_empty());
}

#[test]
fn test_directory_resources_in_root_order() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let empty = TempDir::new().unwrap();
    write_descriptor(&first, &cache_descriptor_path(), "fast=pkg.FastCache\n");
    write_descriptor(&second, &cache_descriptor_path(), "slow=pkg.SlowCache\n");

    let resources = DirectoryResources::new([first.path(), empty.path(), second.path()]);
    assert_eq!(resources.roots().len(), 3);

    let loaded = resources.load(&cache_descriptor_path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].content, "fast=pkg.FastCache\n");
    assert_eq!(loaded[1].content, "slow=pkg.SlowCache\n");
    assert!(loaded[0].location.ends_with("pkg.CacheService"));
}

#[test]
fn test_missing_directory_resource_is_empty() {
    let root = TempDir::new().unwrap();
    let resources = DirectoryResources::new([root.path()]);
    assert!(resources.load(&cache_descriptor_path()).unwrap().is_empty());
}

#[test]
fn test_layered_resources_concatenate() {
    let root = TempDir::new().unwrap();
    write_descriptor(&root, &cache_descriptor_path(), "slow=pkg.SlowCache");

    let layered = LayeredResources::new()
        .with(EmbeddedResources::new().with(cache_descriptor_path(), "fast=pkg.FastCache"))
        .with(DirectoryResources::new([root.path()]));
    assert_eq!(layered.len(), 2);
    assert!(LayeredResources::new().is_empty());

    let loaded = layered.load(&cache_descriptor_path()).unwrap();
    let contents: Vec<&str> = loaded.iter().map(|resource| resource.content.as_str()).collect();
    assert_eq!(contents, vec!["fast=pkg.FastCache", "slow=pkg.SlowCache"]);
}
