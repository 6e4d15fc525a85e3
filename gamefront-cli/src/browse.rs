//! Simulated browsing session
//!
//! Loads the featured banners and the first feed page side by side, rotates
//! the carousel on a manual clock for a simulated span, then scrolls the feed
//! until it reports end of content.

use std::sync::Arc;
use std::time::Duration;

use gamefront_config::StorefrontConfig;
use gamefront_core::carousel::CarouselEvent;
use gamefront_core::feed::LoadOutcome;
use gamefront_core::host::{BannerView, FeedView};
use gamefront_core::contracts::PageSource;
use gamefront_core::time::{Clock, ManualClock};
use gamefront_core::{
    Breakpoint, CarouselEngine, FeaturedBannerLoader, FixtureCatalog, PaginatedFeedEngine,
};
use serde::Serialize;
use tracing::{debug, info};

/// Knobs for a browsing session.
#[derive(Debug, Clone)]
pub struct BrowseOptions {
    /// Simulated time the carousel rotates for.
    pub rotate_for: Duration,
    /// Tick granularity of the simulated carousel clock.
    pub step: Duration,
    /// Viewport width used to pick the breakpoint.
    pub viewport_width: f32,
    /// Upper bound on sentinel triggers while scrolling.
    pub max_scrolls: usize,
}

impl Default for BrowseOptions {
    fn default() -> Self {
        Self {
            rotate_for: Duration::from_secs(30),
            step: Duration::from_millis(100),
            viewport_width: 1280.0,
            max_scrolls: 1_000,
        }
    }
}

/// What the session observed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowseReport {
    pub breakpoint: Breakpoint,
    pub banners: usize,
    pub auto_advances: usize,
    pub recenters: usize,
    pub final_banner: Option<String>,
    pub final_route: Option<String>,
    pub feed_items: usize,
    pub feed_pages: u32,
    pub scrolls: usize,
    pub revealed: usize,
    pub end_of_content: bool,
    pub error: Option<String>,
}

pub async fn run_browse(
    config: &StorefrontConfig,
    catalog: FixtureCatalog,
    options: &BrowseOptions,
) -> BrowseReport {
    let catalog = Arc::new(catalog);
    let clock = ManualClock::new();
    let breakpoint = Breakpoint::from_width(options.viewport_width);

    let loader =
        FeaturedBannerLoader::new(Arc::clone(&catalog), config.banners.clone());
    let feed = Arc::new(PaginatedFeedEngine::new(
        Arc::clone(&catalog),
        config.feed.clone(),
    ));
    let mut feed_view =
        FeedView::new(feed, config.stagger.clone(), Arc::new(clock.clone()));

    let (banners, mounted) = futures::join!(loader.load(), feed_view.mount());
    debug!(?mounted, "feed mounted");

    let engine =
        CarouselEngine::new(config.carousel.clone(), Arc::new(clock.clone()));
    let mut banner_view = BannerView::new(engine, breakpoint);
    banner_view.show(&banners);

    let mut auto_advances = 0;
    let mut recenters = 0;
    let mut elapsed = Duration::ZERO;
    let step = options.step.max(Duration::from_millis(1));
    while elapsed < options.rotate_for {
        clock.advance(step);
        elapsed += step;
        for event in banner_view.tick() {
            match event {
                CarouselEvent::AutoAdvanced { .. } => auto_advances += 1,
                CarouselEvent::Recentered { .. } => recenters += 1,
            }
        }
        feed_view.tick();
    }
    info!(auto_advances, recenters, "carousel rotation finished");

    let mut scrolls = 0;
    while scrolls < options.max_scrolls && feed_view.snapshot().can_load_more() {
        scrolls += 1;
        let outcome = feed_view.on_sentinel_visible().await;
        debug!(?outcome, "sentinel triggered");
        if outcome == LoadOutcome::Failed {
            break;
        }
    }
    settle_stagger(&clock, &mut feed_view);
    banner_view.teardown();

    let snapshot = feed_view.snapshot();
    let revealed = feed_view.stagger().visible_count();
    let final_banner = banner_view
        .engine()
        .current_banner()
        .map(|banner| banner.title.clone());

    BrowseReport {
        breakpoint,
        banners: banners.len(),
        auto_advances,
        recenters,
        final_banner,
        final_route: banner_view.on_click(),
        feed_items: snapshot.items.len(),
        feed_pages: snapshot.page_cursor,
        scrolls,
        revealed,
        end_of_content: snapshot.end_of_content,
        error: snapshot.error_message(),
    }
}

/// Advance the clock until every pending entrance reveal has fired.
fn settle_stagger<S: PageSource>(clock: &ManualClock, view: &mut FeedView<S>) {
    while let Some(deadline) = view.stagger().next_deadline() {
        let now = clock.now();
        if deadline > now {
            clock.advance(deadline - now);
        }
        view.tick();
    }
}
