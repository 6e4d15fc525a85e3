//! Configuration loading for the Gamefront storefront.
#![allow(missing_docs)]

pub mod error;
pub mod storefront;

pub use error::{ConfigGuardRailError, ConfigLoadError};
pub use storefront::{ConfigSource, StorefrontConfig};
