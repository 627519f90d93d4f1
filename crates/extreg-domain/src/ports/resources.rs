//! Descriptor resource port

use crate::error::Result;

/// Contents of one descriptor resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Where the resource was found, for diagnostics
    pub location: String,
    /// Full text
    pub content: String,
}

impl Resource {
    /// Create a resource
    pub fn new<L: Into<String>, C: Into<String>>(location: L, content: C) -> Self {
        Self {
            location: location.into(),
            content: content.into(),
        }
    }
}

/// Loads every resource visible at a relative path
///
/// A path such as `META-INF/extreg/pkg.CacheService` may exist in several
/// roots; all of them are returned, in root order. A missing resource is
/// an empty result, not an error.
pub trait ResourceLoader: Send + Sync {
    /// Load all resources at `path`
    fn load(&self, path: &str) -> Result<Vec<Resource>>;
}
