//! Infinite-scroll feed view glue

use std::sync::Arc;

use gamefront_contracts::{Identified, PageSource};
use tracing::debug;

use crate::feed::{FeedSnapshot, LoadOutcome, PaginatedFeedEngine, SkipReason};
use crate::settings::StaggerSettings;
use crate::stagger::VisibilityStagger;
use crate::time::SharedClock;

type ItemId<S> = <<S as PageSource>::Item as Identified>::Id;

/// Couples a feed engine with the scroll sentinel and entrance stagger.
pub struct FeedView<S: PageSource> {
    feed: Arc<PaginatedFeedEngine<S>>,
    stagger: VisibilityStagger<ItemId<S>>,
}

impl<S: PageSource> std::fmt::Debug for FeedView<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedView")
            .field("feed", &self.feed)
            .field("stagger", &self.stagger)
            .finish()
    }
}

impl<S: PageSource> FeedView<S> {
    pub fn new(
        feed: Arc<PaginatedFeedEngine<S>>,
        stagger: StaggerSettings,
        clock: SharedClock,
    ) -> Self {
        Self {
            feed,
            stagger: VisibilityStagger::new(stagger, clock),
        }
    }

    pub fn feed(&self) -> &Arc<PaginatedFeedEngine<S>> {
        &self.feed
    }

    pub fn stagger(&self) -> &VisibilityStagger<ItemId<S>> {
        &self.stagger
    }

    pub fn snapshot(&self) -> FeedSnapshot<S::Item> {
        self.feed.snapshot()
    }

    /// Initial load after mount.
    pub async fn mount(&mut self) -> LoadOutcome {
        let outcome = self.feed.mount().await;
        self.sync_visibility();
        outcome
    }

    /// The scroll sentinel came into view.
    ///
    /// The request is only forwarded while the feed is idle and has more to
    /// give; the engine applies the same guard again.
    pub async fn on_sentinel_visible(&mut self) -> LoadOutcome {
        let snapshot = self.feed.snapshot();
        if snapshot.loading {
            debug!("sentinel visible while loading, ignoring");
            return LoadOutcome::Skipped(SkipReason::Loading);
        }
        if !snapshot.has_more() {
            debug!("sentinel visible at end of content, ignoring");
            return LoadOutcome::Skipped(SkipReason::EndOfContent);
        }

        let outcome = self.feed.load_more().await;
        self.sync_visibility();
        outcome
    }

    /// Retry affordance shown next to a feed error.
    pub async fn retry(&mut self) -> LoadOutcome {
        self.stagger.detach();
        let outcome = self.feed.reset().await;
        self.sync_visibility();
        outcome
    }

    /// Re-attach the stagger if the feed's item list changed.
    pub fn sync_visibility(&mut self) -> bool {
        let ids: Vec<ItemId<S>> = self
            .feed
            .with_state(|state| state.items().iter().map(|item| item.id().clone()).collect());
        self.stagger.sync(&ids)
    }

    pub fn is_visible(&self, id: &ItemId<S>) -> bool {
        self.stagger.is_visible(id)
    }

    /// Fire due entrance reveals.
    pub fn tick(&mut self) -> Vec<ItemId<S>> {
        self.stagger.tick()
    }

    pub fn teardown(&mut self) {
        self.stagger.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::FeedSettings;
    use crate::time::ManualClock;
    use gamefront_contracts::MockPageSource;
    use gamefront_model::{Game, GameId};
    use mockall::predicate::eq;
    use std::time::Duration;

    fn games(ids: &[u64]) -> Vec<Game> {
        ids.iter().map(|id| Game::new(*id, format!("Game {id}"))).collect()
    }

    fn view(source: MockPageSource) -> (FeedView<MockPageSource>, ManualClock) {
        let clock = ManualClock::new();
        let feed = Arc::new(PaginatedFeedEngine::new(
            Arc::new(source),
            FeedSettings::default(),
        ));
        let stagger = StaggerSettings {
            reset_on_change: false,
            ..StaggerSettings::default()
        };
        (FeedView::new(feed, stagger, Arc::new(clock.clone())), clock)
    }

    #[tokio::test]
    async fn sentinel_is_ignored_at_end_of_content() {
        let mut source = MockPageSource::new();
        source
            .expect_fetch_page()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(games(&[1])));
        source
            .expect_fetch_page()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(Vec::new()));
        let (mut view, _) = view(source);

        view.feed().load_initial().await;
        view.on_sentinel_visible().await;
        assert!(!view.snapshot().has_more());

        assert_eq!(
            view.on_sentinel_visible().await,
            LoadOutcome::Skipped(SkipReason::EndOfContent)
        );
    }

    #[tokio::test]
    async fn appended_items_stagger_in_after_existing_ones() {
        let mut source = MockPageSource::new();
        source
            .expect_fetch_page()
            .with(eq(1))
            .returning(|_| Ok(games(&[1, 2])));
        source
            .expect_fetch_page()
            .with(eq(2))
            .returning(|_| Ok(games(&[3])));
        let (mut view, clock) = view(source);

        view.feed().load_initial().await;
        assert!(view.sync_visibility());
        clock.advance(Duration::from_millis(200));
        assert_eq!(view.tick().len(), 2);

        assert_eq!(
            view.on_sentinel_visible().await,
            LoadOutcome::Appended { page: 2, count: 1 }
        );
        let three = GameId::from(3u64);
        assert!(view.is_visible(&GameId::from(1u64)));
        assert!(!view.is_visible(&three));
        clock.advance(Duration::from_millis(100));
        assert_eq!(view.tick(), vec![three.clone()]);
        assert!(view.is_visible(&three));
    }

    #[tokio::test(start_paused = true)]
    async fn retry_reloads_after_error() {
        let mut source = MockPageSource::new();
        let mut calls = 0;
        source.expect_fetch_page().with(eq(1)).returning(move |_| {
            calls += 1;
            if calls == 1 {
                Err(gamefront_contracts::CatalogError::unavailable("down"))
            } else {
                Ok(games(&[8, 9]))
            }
        });
        let (mut view, _) = view(source);

        view.feed().load_initial().await;
        assert!(view.snapshot().error.is_some());

        assert_eq!(view.retry().await, LoadOutcome::Loaded { count: 2 });
        assert!(view.snapshot().error.is_none());
        assert_eq!(view.stagger().ids().len(), 2);
    }
}
