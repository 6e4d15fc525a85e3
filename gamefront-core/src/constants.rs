//! Storefront engine constants
//!
//! Compiled defaults for carousel, feed and stagger behavior. Runtime
//! overrides live in [`crate::settings`]; tuning the defaults should happen
//! here so every consumer updates consistently.

/// Featured-banner carousel defaults.
pub mod carousel {
    /// Horizontal drag distance (logical px) a gesture must exceed to count
    /// as a swipe rather than an accidental movement.
    pub const SWIPE_THRESHOLD_PX: f32 = 50.0;
    /// Delay before a drifted virtual index is silently re-centered, letting
    /// the in-flight slide transition finish first.
    pub const RECENTER_DELAY_MS: u64 = 50;
    /// Auto-advance cadence.
    pub const AUTO_ADVANCE_INTERVAL_MS: u64 = 5_000;
    /// Number of copies of the banner list rendered side by side.
    pub const COPIES: usize = 3;
}

/// Paginated feed defaults.
pub mod feed {
    /// Pages tried within one load-more call before giving up on finding
    /// unseen items.
    pub const MAX_ATTEMPTS: u32 = 3;
    /// Delay between a reset clearing state and the fresh initial load.
    pub const RESET_DEBOUNCE_MS: u64 = 100;
    /// Delay before the first load after mount, avoiding a loading flash.
    pub const INITIAL_DELAY_MS: u64 = 100;
    /// First page of the upstream listing.
    pub const FIRST_PAGE: u32 = 1;
}

/// Entrance stagger defaults.
pub mod stagger {
    pub const INITIAL_DELAY_MS: u64 = 100;
    pub const STAGGER_DELAY_MS: u64 = 100;
}

/// Featured banner loading defaults.
pub mod banners {
    /// Loads slower than this show a loading indicator.
    pub const SLOW_LOAD_THRESHOLD_MS: u64 = 1_000;
    /// Fast loads keep the loading state at least this long.
    pub const MIN_LOADING_MS: u64 = 500;
}

/// Viewport breakpoints (CSS px widths).
pub mod viewport {
    /// Widths up to and including this are mobile.
    pub const MOBILE_MAX_WIDTH: f32 = 640.0;
    /// Widths up to and including this (and above mobile) are tablet.
    pub const TABLET_MAX_WIDTH: f32 = 1024.0;
}
