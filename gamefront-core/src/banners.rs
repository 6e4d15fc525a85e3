//! Featured banner loading

use std::fmt;
use std::sync::Arc;

use gamefront_contracts::FeaturedSource;
use gamefront_model::BannerSet;
use parking_lot::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::settings::BannerSettings;

/// Presentation state of the featured banner area.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BannerLoadState {
    #[default]
    Idle,
    /// Fetch in flight, or a fast load being held briefly.
    Loading { show_indicator: bool },
    Ready(BannerSet),
    /// Nothing to show; the host renders its "Unable to load the content"
    /// placeholder.
    Empty,
}

impl BannerLoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, BannerLoadState::Loading { .. })
    }

    pub fn show_indicator(&self) -> bool {
        matches!(self, BannerLoadState::Loading { show_indicator: true })
    }

    pub fn banners(&self) -> Option<&BannerSet> {
        match self {
            BannerLoadState::Ready(set) => Some(set),
            _ => None,
        }
    }
}

/// Loads featured games and turns them into a fresh [`BannerSet`].
///
/// A slow fetch flips the loading indicator on once the slow-load threshold
/// passes. A fast one keeps the loading state for the minimum loading time
/// so the placeholder does not flash.
pub struct FeaturedBannerLoader<S: FeaturedSource> {
    source: Arc<S>,
    settings: BannerSettings,
    state: Mutex<BannerLoadState>,
}

impl<S: FeaturedSource> fmt::Debug for FeaturedBannerLoader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeaturedBannerLoader")
            .field("settings", &self.settings)
            .field("state", &*self.state.lock())
            .finish()
    }
}

impl<S: FeaturedSource> FeaturedBannerLoader<S> {
    pub fn new(source: Arc<S>, settings: BannerSettings) -> Self {
        Self {
            source,
            settings,
            state: Mutex::new(BannerLoadState::Idle),
        }
    }

    pub fn state(&self) -> BannerLoadState {
        self.state.lock().clone()
    }

    /// Fetch and format the featured banners.
    ///
    /// Never fails: errors and empty responses are logged and produce an
    /// empty set.
    pub async fn load(&self) -> BannerSet {
        self.set_state(BannerLoadState::Loading {
            show_indicator: false,
        });
        let started = Instant::now();

        let fetch = self.source.fetch_featured();
        tokio::pin!(fetch);
        let result = tokio::select! {
            result = &mut fetch => result,
            _ = tokio::time::sleep(self.settings.slow_load_threshold()) => {
                debug!("featured banners slow to load, showing indicator");
                self.set_state(BannerLoadState::Loading { show_indicator: true });
                fetch.await
            }
        };
        let elapsed = started.elapsed();

        let banners = match result {
            Ok(games) if games.is_empty() => {
                info!("no featured games available");
                BannerSet::empty()
            }
            Ok(games) => {
                let set = BannerSet::from_games(&games);
                info!(count = set.len(), ?elapsed, "loaded featured banners");
                set
            }
            Err(err) => {
                warn!("error fetching featured games: {err}");
                BannerSet::empty()
            }
        };

        if elapsed <= self.settings.slow_load_threshold() {
            tokio::time::sleep(self.settings.min_loading()).await;
        }

        self.set_state(if banners.is_empty() {
            BannerLoadState::Empty
        } else {
            BannerLoadState::Ready(banners.clone())
        });
        banners
    }

    fn set_state(&self, state: BannerLoadState) {
        *self.state.lock() = state;
    }
}
