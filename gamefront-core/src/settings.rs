//! Runtime-tunable settings for the storefront engines.
//!
//! Every struct deserializes with `#[serde(default)]`, so a config file only
//! needs to name the values it overrides. Defaults come from
//! [`crate::constants`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{banners, carousel, feed, stagger};

/// Featured carousel behavior.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Drag distance a gesture must exceed to navigate.
    pub swipe_threshold_px: f32,
    /// Delay (ms) before a drifted virtual index is re-centered.
    pub recenter_delay_ms: u64,
    /// Whether the carousel rotates on its own.
    pub auto_advance: bool,
    /// Rotation cadence (ms) when `auto_advance` is on.
    pub auto_advance_interval_ms: u64,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            swipe_threshold_px: carousel::SWIPE_THRESHOLD_PX,
            recenter_delay_ms: carousel::RECENTER_DELAY_MS,
            auto_advance: true,
            auto_advance_interval_ms: carousel::AUTO_ADVANCE_INTERVAL_MS,
        }
    }
}

impl CarouselSettings {
    pub fn recenter_delay(&self) -> Duration {
        Duration::from_millis(self.recenter_delay_ms)
    }

    pub fn auto_advance_interval(&self) -> Duration {
        Duration::from_millis(self.auto_advance_interval_ms)
    }
}

/// Paginated feed behavior.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Pages tried per load-more before declaring end of content.
    pub max_attempts: u32,
    /// Delay (ms) between a reset and the fresh initial load.
    pub reset_debounce_ms: u64,
    /// Delay (ms) before the first load after mount.
    pub initial_delay_ms: u64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            max_attempts: feed::MAX_ATTEMPTS,
            reset_debounce_ms: feed::RESET_DEBOUNCE_MS,
            initial_delay_ms: feed::INITIAL_DELAY_MS,
        }
    }
}

impl FeedSettings {
    pub fn reset_debounce(&self) -> Duration {
        Duration::from_millis(self.reset_debounce_ms)
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }
}

/// Entrance stagger timing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StaggerSettings {
    pub initial_delay_ms: u64,
    pub stagger_delay_ms: u64,
    /// Clear the whole visibility map whenever the list changes. When off,
    /// ids that are already visible stay visible and only new ids stagger in.
    pub reset_on_change: bool,
    /// Without `reset_on_change`, time each new id by its index in the whole
    /// list (`initial + index * stagger`) instead of counting from the first
    /// hidden id.
    pub list_position_timing: bool,
}

impl Default for StaggerSettings {
    fn default() -> Self {
        Self {
            initial_delay_ms: stagger::INITIAL_DELAY_MS,
            stagger_delay_ms: stagger::STAGGER_DELAY_MS,
            reset_on_change: true,
            list_position_timing: false,
        }
    }
}

impl StaggerSettings {
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_delay_ms)
    }

    pub fn stagger_delay(&self) -> Duration {
        Duration::from_millis(self.stagger_delay_ms)
    }
}

/// Featured banner loading presentation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BannerSettings {
    pub slow_load_threshold_ms: u64,
    pub min_loading_ms: u64,
}

impl Default for BannerSettings {
    fn default() -> Self {
        Self {
            slow_load_threshold_ms: banners::SLOW_LOAD_THRESHOLD_MS,
            min_loading_ms: banners::MIN_LOADING_MS,
        }
    }
}

impl BannerSettings {
    pub fn slow_load_threshold(&self) -> Duration {
        Duration::from_millis(self.slow_load_threshold_ms)
    }

    pub fn min_loading(&self) -> Duration {
        Duration::from_millis(self.min_loading_ms)
    }
}
