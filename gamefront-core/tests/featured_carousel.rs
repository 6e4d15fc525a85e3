mod support;

use std::sync::Arc;
use std::time::Duration;

use gamefront_core::carousel::{CarouselEvent, Transition};
use gamefront_core::host::BannerView;
use gamefront_core::settings::{BannerSettings, CarouselSettings};
use gamefront_core::{
    BannerLoadState, Breakpoint, CarouselDriver, CarouselEngine, FeaturedBannerLoader,
    FixtureCatalog,
};
use parking_lot::Mutex;
use support::{manual_clock, page};

#[tokio::test(start_paused = true)]
async fn loaded_banners_drive_a_looping_carousel() {
    let catalog = FixtureCatalog::new(page(&[10, 20, 30, 40]), Vec::new());
    let loader = FeaturedBannerLoader::new(Arc::new(catalog), BannerSettings::default());
    let banners = loader.load().await;
    assert!(matches!(loader.state(), BannerLoadState::Ready(_)));

    let (clock, shared) = manual_clock();
    let engine = CarouselEngine::new(
        CarouselSettings {
            auto_advance: false,
            ..CarouselSettings::default()
        },
        shared,
    );
    let mut view = BannerView::new(engine, Breakpoint::Desktop);
    assert!(view.show(&banners));
    assert!(!view.show(&banners));

    // Walk backwards past the start of the strip and let re-centering settle.
    let mut shown = Vec::new();
    for _ in 0..9 {
        view.engine_mut().prev();
        shown.push(view.on_click());
        clock.advance(Duration::from_millis(60));
        for event in view.tick() {
            if let CarouselEvent::Recentered { from, to } = event {
                assert_eq!(from.rem_euclid(4), to.rem_euclid(4));
                assert_eq!(view.engine().transition(), Transition::Instant);
            }
        }
    }

    let routes: Vec<_> = shown.into_iter().flatten().collect();
    assert_eq!(
        routes,
        vec![
            "/games/40", "/games/30", "/games/20", "/games/10", "/games/40", "/games/30",
            "/games/20", "/games/10", "/games/40",
        ]
    );
    let virtual_index = view.engine().virtual_index();
    assert!((2..10).contains(&virtual_index));
}

#[tokio::test(start_paused = true)]
async fn failed_featured_load_leaves_carousel_inert() {
    let catalog = FixtureCatalog::generated(1, 3, 0).failing_featured();
    let loader = FeaturedBannerLoader::new(Arc::new(catalog), BannerSettings::default());
    let banners = loader.load().await;
    assert_eq!(loader.state(), BannerLoadState::Empty);

    let mut engine = CarouselEngine::with_system_clock(CarouselSettings::default());
    engine.initialize(&banners);
    engine.next();
    assert!(engine.current_banner().is_none());
    assert!(engine.next_deadline().is_none());
}

#[tokio::test(start_paused = true)]
async fn driver_rotates_until_shutdown() {
    let catalog = FixtureCatalog::generated(1, 3, 0);
    let loader = FeaturedBannerLoader::new(Arc::new(catalog), BannerSettings::default());
    let banners = loader.load().await;

    let mut engine = CarouselEngine::with_system_clock(CarouselSettings::default());
    engine.initialize(&banners);
    let engine = Arc::new(Mutex::new(engine));
    let (driver, mut events) =
        CarouselDriver::spawn(Arc::clone(&engine), Duration::from_millis(20));

    let mut seen = Vec::new();
    for _ in 0..4 {
        if let Some(CarouselEvent::AutoAdvanced { real_index }) = events.recv().await {
            seen.push(real_index);
        }
    }
    assert_eq!(seen, vec![1, 2, 0, 1]);

    driver.shutdown().await;
    assert!(engine.lock().is_torn_down());
    assert!(events.recv().await.is_none());
}
