//! Command-line host for the Gamefront storefront engines.
//!
//! The `gamefront` binary wires the carousel, feed and stagger engines to a
//! [`FixtureCatalog`](gamefront_core::FixtureCatalog) and drives them the way
//! the storefront home page would, printing what happened.
#![allow(missing_docs)]

pub mod browse;

pub use browse::{BrowseOptions, BrowseReport, run_browse};
