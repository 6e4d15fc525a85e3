//! # Gamefront Core
//!
//! Engines behind the Gamefront storefront's home page: the featured banner
//! carousel, the infinite game feed and the staggered entrance of feed cards.
//!
//! ## Overview
//!
//! - **Carousel**: seamless looping navigation over a tripled banner strip,
//!   with drag/swipe gestures, silent re-centering and auto-advance
//! - **Feed**: de-duplicated pagination with a bounded duplicate-page retry,
//!   end-of-content detection and reset
//! - **Stagger**: per-item entrance visibility released on a timed cadence
//! - **Host glue**: hover pausing, click-through routes and the scroll
//!   sentinel guard
//!
//! The carousel and stagger are synchronous and driven by [`tick`] calls
//! against an injected [`Clock`](time::Clock). The feed and banner loader are
//! async and never hold their state lock across a fetch.
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use gamefront_core::{
//!     FixtureCatalog, PaginatedFeedEngine,
//!     settings::FeedSettings,
//! };
//!
//! async fn scroll_to_end() {
//!     let catalog = Arc::new(FixtureCatalog::generated(5, 20, 4));
//!     let feed = PaginatedFeedEngine::new(catalog, FeedSettings::default());
//!
//!     feed.load_initial().await;
//!     while feed.has_more() {
//!         feed.load_more().await;
//!     }
//!     println!("{} games", feed.len());
//! }
//! ```
//!
//! [`tick`]: carousel::CarouselEngine::tick

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Featured-banner loading with slow-load indicator handling
pub mod banners;

/// Infinite looping banner carousel
pub mod carousel;

/// Fixture-backed catalog for tests, demos and the CLI
pub mod catalog;

/// Compiled defaults
pub mod constants;

/// Error types
pub mod error;

/// Paginated feed
pub mod feed;

/// Glue between host UI signals and the engines
pub mod host;

/// Runtime-tunable settings
pub mod settings;

/// Staggered entrance visibility
pub mod stagger;

/// Clock abstraction
pub mod time;

/// Cancellable one-shot timers
pub mod timers;

/// Viewport breakpoints
pub mod viewport;

pub use banners::{BannerLoadState, FeaturedBannerLoader};
pub use carousel::{CarouselDriver, CarouselEngine, CarouselEvent, Direction, DragOutcome};
pub use catalog::FixtureCatalog;
pub use error::{FeedError, NavigationError};
pub use feed::{FeedSnapshot, LoadOutcome, PaginatedFeedEngine};
pub use stagger::VisibilityStagger;
pub use viewport::Breakpoint;

pub use gamefront_contracts as contracts;
pub use gamefront_model as model;
