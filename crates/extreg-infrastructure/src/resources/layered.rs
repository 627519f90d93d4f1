//! Layered descriptor resources

use std::sync::Arc;

use extreg_domain::error::Result;
use extreg_domain::ports::{Resource, ResourceLoader};

/// Concatenates the resources of several loaders, in layer order
#[derive(Clone, Default)]
pub struct LayeredResources {
    layers: Vec<Arc<dyn ResourceLoader>>,
}

impl LayeredResources {
    /// No layers
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer
    pub fn with<L: ResourceLoader + 'static>(mut self, layer: L) -> Self {
        self.layers.push(Arc::new(layer));
        self
    }

    /// Append a shared layer
    pub fn with_shared(mut self, layer: Arc<dyn ResourceLoader>) -> Self {
        self.layers.push(layer);
        self
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether there are no layers
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl ResourceLoader for LayeredResources {
    fn load(&self, path: &str) -> Result<Vec<Resource>> {
        let mut resources = Vec::new();
        for layer in &self.layers {
            resources.extend(layer.load(path)?);
        }
        Ok(resources)
    }
}

impl std::fmt::Debug for LayeredResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredResources")
            .field("layers", &self.layers.len())
            .finish()
    }
}
