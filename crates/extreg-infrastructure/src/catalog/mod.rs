//! Type catalogs
//!
//! | Catalog | Source of types |
//! |---------|-----------------|
//! | [`LinkedTypeCatalog`] | Every descriptor submitted to `TYPE_DESCRIPTORS` at link time |
//! | [`StaticTypeCatalog`] | Descriptors registered explicitly, for isolated contexts |

mod fixed;
mod linked;

pub use fixed::StaticTypeCatalog;
pub use linked::LinkedTypeCatalog;
