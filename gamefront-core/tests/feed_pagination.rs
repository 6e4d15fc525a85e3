mod support;

use std::sync::Arc;

use gamefront_core::feed::{EndReason, LoadOutcome, SkipReason};
use gamefront_core::settings::FeedSettings;
use gamefront_core::{FeedError, FixtureCatalog, PaginatedFeedEngine};
use support::{ids, page};

fn feed(catalog: FixtureCatalog) -> PaginatedFeedEngine<FixtureCatalog> {
    PaginatedFeedEngine::new(Arc::new(catalog), FeedSettings::default())
}

#[tokio::test]
async fn scrolling_an_overlapping_catalog_collects_every_game_once() {
    let catalog = FixtureCatalog::generated(6, 10, 3);
    let expected = catalog.unique_games();
    let feed = feed(catalog);

    assert_eq!(feed.load_initial().await, LoadOutcome::Loaded { count: 10 });
    let mut appended = 0;
    while feed.has_more() {
        match feed.load_more().await {
            LoadOutcome::Appended { count, .. } => appended += count,
            LoadOutcome::EndOfContent(EndReason::EmptyPage) => break,
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    assert_eq!(feed.len(), expected);
    assert_eq!(appended + 10, expected);
    assert_eq!(feed.page_cursor(), 6);

    let snapshot = feed.snapshot();
    let mut seen = ids(&snapshot.items);
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), snapshot.items.len());
}

#[tokio::test]
async fn duplicate_run_longer_than_retry_budget_ends_pagination() {
    let catalog = FixtureCatalog::new(
        Vec::new(),
        vec![
            page(&[1, 2, 3]),
            page(&[1, 2]),
            page(&[3]),
            page(&[2, 3]),
            page(&[4, 5]),
        ],
    );
    let feed = feed(catalog);
    feed.load_initial().await;

    assert_eq!(
        feed.load_more().await,
        LoadOutcome::EndOfContent(EndReason::DuplicatePages)
    );
    assert_eq!(ids(&feed.items()), vec!["1", "2", "3"]);
    assert_eq!(
        feed.load_more().await,
        LoadOutcome::Skipped(SkipReason::EndOfContent)
    );
}

#[tokio::test]
async fn larger_retry_budget_reaches_past_a_duplicate_run() {
    let catalog = FixtureCatalog::new(
        Vec::new(),
        vec![
            page(&[1, 2, 3]),
            page(&[1, 2]),
            page(&[3]),
            page(&[2, 3]),
            page(&[4, 5]),
        ],
    );
    let settings = FeedSettings {
        max_attempts: 4,
        ..FeedSettings::default()
    };
    let feed = PaginatedFeedEngine::new(Arc::new(catalog), settings);
    feed.load_initial().await;

    assert_eq!(
        feed.load_more().await,
        LoadOutcome::Appended { page: 5, count: 2 }
    );
    assert_eq!(ids(&feed.items()), vec!["1", "2", "3", "4", "5"]);
}

#[tokio::test]
async fn failed_page_surfaces_message_and_can_be_retried_by_reset() {
    let catalog = FixtureCatalog::generated(3, 4, 0).failing_page(2);
    let feed = feed(catalog);
    feed.load_initial().await;

    assert_eq!(feed.load_more().await, LoadOutcome::Failed);
    let error = feed.error();
    assert!(matches!(error, Some(FeedError::LoadMoreFailed { page: 2, .. })));
    assert_eq!(
        error.map(|e| e.to_string()).as_deref(),
        Some("Failed to load more games. Please try again later.")
    );
    assert_eq!(feed.len(), 4);
}

#[tokio::test(start_paused = true)]
async fn reset_after_end_of_content_starts_over() {
    let feed = feed(FixtureCatalog::generated(2, 3, 0));
    feed.load_initial().await;
    while feed.has_more() {
        feed.load_more().await;
    }
    assert_eq!(feed.len(), 6);

    assert_eq!(feed.reset().await, LoadOutcome::Loaded { count: 3 });
    assert!(feed.has_more());
    assert_eq!(feed.page_cursor(), 1);
    assert_eq!(ids(&feed.items()), vec!["1", "2", "3"]);
}

#[tokio::test(start_paused = true)]
async fn overlapping_resets_only_load_once() {
    let feed = Arc::new(feed(FixtureCatalog::generated(2, 3, 0)));

    let first = tokio::spawn({
        let feed = Arc::clone(&feed);
        async move { feed.reset().await }
    });
    tokio::task::yield_now().await;
    let second = feed.reset().await;

    assert_eq!(second, LoadOutcome::Loaded { count: 3 });
    assert_eq!(
        first.await.unwrap(),
        LoadOutcome::Skipped(SkipReason::Superseded)
    );
}
