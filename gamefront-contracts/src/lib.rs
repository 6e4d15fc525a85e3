//! Trait surfaces that describe the storefront's external collaborators.
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod identified;

pub use catalog::{FeaturedSource, PageSource};
#[cfg(feature = "mock")]
pub use catalog::{MockFeaturedSource, MockPageSource};
pub use error::{CatalogError, CatalogResult};
pub use identified::Identified;

/// Frequently used trait combinators for engine and host crates.
pub mod prelude {
    pub use super::catalog::{FeaturedSource, PageSource};
    pub use super::error::{CatalogError, CatalogResult};
    pub use super::identified::Identified;
}
