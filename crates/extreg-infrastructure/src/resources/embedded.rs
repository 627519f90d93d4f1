//! In-memory descriptor resources

use extreg_domain::constants::{INJECTION_CATEGORY_NAME, INTERNAL_DESCRIPTOR_DIR};
use extreg_domain::error::Result;
use extreg_domain::ports::{Resource, ResourceLoader};
use indexmap::IndexMap;

use crate::constants::{BUILTIN_INJECTION_DESCRIPTOR, EMBEDDED_RESOURCE_LOCATION};

/// Descriptor text keyed by resource path
///
/// Several texts may be added under one path; they are returned in the
/// order they were added, like the same file found in several roots.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    entries: IndexMap<String, Vec<String>>,
}

impl EmbeddedResources {
    /// No resources
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in injection category descriptor
    pub fn with_builtins() -> Self {
        Self::new().with(
            format!("{INTERNAL_DESCRIPTOR_DIR}{INJECTION_CATEGORY_NAME}"),
            BUILTIN_INJECTION_DESCRIPTOR,
        )
    }

    /// Add descriptor text at a path
    pub fn with<P: Into<String>, C: Into<String>>(mut self, path: P, content: C) -> Self {
        self.insert(path, content);
        self
    }

    /// Add descriptor text at a path in place
    pub fn insert<P: Into<String>, C: Into<String>>(&mut self, path: P, content: C) {
        self.entries
            .entry(path.into())
            .or_default()
            .push(content.into());
    }
}

impl ResourceLoader for EmbeddedResources {
    fn load(&self, path: &str) -> Result<Vec<Resource>> {
        let resources = self
            .entries
            .get(path)
            .map(|contents| {
                contents
                    .iter()
                    .map(|content| {
                        Resource::new(format!("{EMBEDDED_RESOURCE_LOCATION}:{path}"), content.as_str())
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(resources)
    }
}
