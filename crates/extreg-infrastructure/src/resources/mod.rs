//! Descriptor resource loaders
//!
//! | Loader | Reads from |
//! |--------|------------|
//! | [`EmbeddedResources`] | In-memory text, including the built-in descriptors |
//! | [`DirectoryResources`] | `root/path` under each configured root directory |
//! | [`LayeredResources`] | Other loaders, concatenated in order |

mod directory;
mod embedded;
mod layered;

pub use directory::DirectoryResources;
pub use embedded::EmbeddedResources;
pub use layered::LayeredResources;
