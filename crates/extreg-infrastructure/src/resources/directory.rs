//! File system descriptor resources

use std::path::{Path, PathBuf};

use extreg_domain::error::Result;
use extreg_domain::ports::{Resource, ResourceLoader};
use tracing::debug;

use crate::error_ext::ErrorContext;

/// Reads `root/path` under each root, in root order
#[derive(Debug, Clone, Default)]
pub struct DirectoryResources {
    roots: Vec<PathBuf>,
}

impl DirectoryResources {
    /// Loader over the given roots
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self {
            roots: roots
                .into_iter()
                .map(|root| root.as_ref().to_path_buf())
                .collect(),
        }
    }

    /// Configured roots
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl ResourceLoader for DirectoryResources {
    fn load(&self, path: &str) -> Result<Vec<Resource>> {
        let mut resources = Vec::new();
        for root in &self.roots {
            let file = root.join(path);
            if !file.is_file() {
                continue;
            }
            let content = std::fs::read_to_string(&file)
                .with_io_context(|| format!("Failed to read descriptor {}", file.display()))?;
            debug!(location = %file.display(), "Read descriptor resource");
            resources.push(Resource::new(file.display().to_string(), content));
        }
        Ok(resources)
    }
}
