//! PaginatedFeedEngine: de-duplicated infinite feed over a paged source

use std::fmt;
use std::sync::Arc;

use gamefront_contracts::{Identified, PageSource};
use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, info, warn};

use super::state::{FeedSnapshot, FeedState};
use crate::constants::feed::FIRST_PAGE;
use crate::error::FeedError;
use crate::settings::FeedSettings;

/// Why a load request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Another fetch is in flight.
    Loading,
    /// The feed already reached its end.
    EndOfContent,
    /// The mount delay elapsed after a load had already started or finished.
    AlreadyLoaded,
    /// A newer reset took over before this one could load.
    Superseded,
}

/// What ended pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    EmptyPage,
    /// Every attempted page held only items the feed already had.
    DuplicatePages,
}

/// Result of a load request, for logging and tests. Hosts read the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Skipped(SkipReason),
    /// The first page replaced the feed contents.
    Loaded { count: usize },
    /// A later page contributed new items.
    Appended { page: u32, count: usize },
    EndOfContent(EndReason),
    /// The error is recorded in the feed state.
    Failed,
    /// A reset happened while the fetch was in flight; the response was dropped.
    Stale,
}

/// Accumulates pages from a [`PageSource`] into a de-duplicated feed.
///
/// All methods take `&self`; the state lock is never held across a fetch, so
/// a reset can always run while a load is pending. Loads are non-reentrant
/// through the `loading` flag, and every reset starts a new generation whose
/// responses are the only ones applied.
pub struct PaginatedFeedEngine<S: PageSource> {
    source: Arc<S>,
    settings: FeedSettings,
    state: Mutex<FeedState<S::Item>>,
}

impl<S: PageSource> fmt::Debug for PaginatedFeedEngine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("PaginatedFeedEngine")
            .field("settings", &self.settings)
            .field("items", &state.items().len())
            .field("page_cursor", &state.page_cursor)
            .field("loading", &state.loading)
            .field("end_of_content", &state.end_of_content)
            .field("generation", &state.generation)
            .finish()
    }
}

impl<S: PageSource> PaginatedFeedEngine<S> {
    pub fn new(source: Arc<S>, settings: FeedSettings) -> Self {
        Self {
            source,
            settings,
            state: Mutex::new(FeedState::new()),
        }
    }

    pub fn source(&self) -> &Arc<S> {
        &self.source
    }

    pub fn settings(&self) -> &FeedSettings {
        &self.settings
    }

    pub fn snapshot(&self) -> FeedSnapshot<S::Item> {
        self.state.lock().snapshot()
    }

    /// Run `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&FeedState<S::Item>) -> R) -> R {
        f(&self.state.lock())
    }

    pub fn items(&self) -> Vec<S::Item> {
        self.state.lock().items().to_vec()
    }

    pub fn len(&self) -> usize {
        self.state.lock().items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    pub fn has_more(&self) -> bool {
        !self.state.lock().end_of_content
    }

    pub fn error(&self) -> Option<FeedError> {
        self.state.lock().error.clone()
    }

    pub fn page_cursor(&self) -> u32 {
        self.state.lock().page_cursor
    }

    /// Fetch the first page and replace the feed with it.
    pub async fn load_initial(&self) -> LoadOutcome {
        let flight = {
            let mut state = self.state.lock();
            if state.loading {
                debug!("feed already loading, skipping initial load");
                return LoadOutcome::Skipped(SkipReason::Loading);
            }
            state.loading = true;
            state.initial_loading = true;
            state.error = None;
            InFlight::new(&self.state, state.generation, true)
        };

        debug!(page = FIRST_PAGE, "fetching initial feed page");
        let result = self.source.fetch_page(FIRST_PAGE).await;

        let Some(mut state) = flight.finish() else {
            debug!("feed reset during initial load, dropping response");
            return LoadOutcome::Stale;
        };

        match result {
            Ok(items) if items.is_empty() => {
                info!("initial feed page was empty");
                state.error = Some(FeedError::NoGames);
                state.end_of_content = true;
                LoadOutcome::EndOfContent(EndReason::EmptyPage)
            }
            Ok(items) => {
                state.replace_items(items);
                state.page_cursor = FIRST_PAGE;
                let count = state.items().len();
                info!(count, "loaded initial feed page");
                LoadOutcome::Loaded { count }
            }
            Err(err) => {
                warn!("failed to load initial feed page: {err}");
                state.error = Some(FeedError::InitialLoadFailed {
                    cause: err.to_string(),
                });
                LoadOutcome::Failed
            }
        }
    }

    /// Append the next page that has anything new.
    ///
    /// Tries up to `max_attempts` pages past the cursor, skipping pages made
    /// only of known items. An empty page ends the feed; so does running out
    /// of attempts without finding anything new.
    pub async fn load_more(&self) -> LoadOutcome {
        let (flight, cursor) = {
            let mut state = self.state.lock();
            if state.loading {
                debug!("feed already loading, skipping load more");
                return LoadOutcome::Skipped(SkipReason::Loading);
            }
            if state.end_of_content {
                debug!("feed at end of content, skipping load more");
                return LoadOutcome::Skipped(SkipReason::EndOfContent);
            }
            state.loading = true;
            state.error = None;
            (
                InFlight::new(&self.state, state.generation, false),
                state.page_cursor,
            )
        };

        let max_attempts = self.settings.max_attempts.max(1);
        let mut found: Option<(u32, Vec<S::Item>)> = None;
        let mut ended_by_empty_page = false;

        for attempt in 1..=max_attempts {
            let page = cursor.saturating_add(attempt);
            debug!(page, attempt, max_attempts, "fetching feed page");

            let fetched = match self.source.fetch_page(page).await {
                Ok(items) => items,
                Err(err) => {
                    let Some(mut state) = flight.finish() else {
                        return LoadOutcome::Stale;
                    };
                    warn!(page, "failed to load feed page: {err}");
                    state.error = Some(FeedError::LoadMoreFailed {
                        page,
                        cause: err.to_string(),
                    });
                    return LoadOutcome::Failed;
                }
            };

            if fetched.is_empty() {
                debug!(page, "feed page empty");
                ended_by_empty_page = true;
                break;
            }

            let received = fetched.len();
            let fresh = {
                let state = self.state.lock();
                if state.generation != flight.generation {
                    drop(state);
                    debug!("feed reset during load more, dropping response");
                    return LoadOutcome::Stale;
                }
                state.unseen(fetched)
            };
            debug!(page, received, unique = fresh.len(), "filtered feed page");

            if !fresh.is_empty() {
                found = Some((page, fresh));
                break;
            }
            debug!(page, "feed page held only known items");
        }

        let Some(mut state) = flight.finish() else {
            debug!("feed reset during load more, dropping response");
            return LoadOutcome::Stale;
        };

        match found {
            Some((page, fresh)) => {
                let count = state.append(fresh);
                state.page_cursor = page;
                info!(page, count, total = state.items().len(), "appended feed page");
                LoadOutcome::Appended { page, count }
            }
            None if ended_by_empty_page => {
                info!("feed reached end of content");
                state.end_of_content = true;
                LoadOutcome::EndOfContent(EndReason::EmptyPage)
            }
            None => {
                info!(
                    max_attempts,
                    "no new items after maximum attempts, treating as end of content"
                );
                state.end_of_content = true;
                LoadOutcome::EndOfContent(EndReason::DuplicatePages)
            }
        }
    }

    /// Clear the feed back to its initial state without loading.
    ///
    /// Any fetch still in flight belongs to the previous generation and its
    /// response will be dropped.
    pub fn reset_state(&self) {
        let mut state = self.state.lock();
        state.reset();
        debug!(generation = state.generation, "feed reset");
    }

    /// Clear the feed, wait the reset debounce, then load the first page.
    pub async fn reset(&self) -> LoadOutcome {
        self.reset_state();
        let generation = self.state.lock().generation;

        tokio::time::sleep(self.settings.reset_debounce()).await;

        if self.state.lock().generation != generation {
            debug!("feed reset superseded by a newer reset");
            return LoadOutcome::Skipped(SkipReason::Superseded);
        }
        self.load_initial().await
    }

    /// First load after the host mounts the feed.
    ///
    /// Waits the initial delay to avoid a loading flash, then loads unless
    /// something else already did.
    pub async fn mount(&self) -> LoadOutcome {
        tokio::time::sleep(self.settings.initial_delay()).await;

        let pending = {
            let state = self.state.lock();
            state.initial_loading && !state.loading && state.items().is_empty()
        };
        if !pending {
            debug!("feed already loaded before mount delay elapsed");
            return LoadOutcome::Skipped(SkipReason::AlreadyLoaded);
        }
        self.load_initial().await
    }
}

/// Marks one fetch as in flight for a generation.
///
/// Dropping it without [`finish`](Self::finish), for instance when the
/// awaiting future is cancelled, still clears the loading flags so the feed
/// never gets stuck.
struct InFlight<'a, T: Identified> {
    state: &'a Mutex<FeedState<T>>,
    generation: u64,
    initial: bool,
    done: bool,
}

impl<'a, T: Identified + Clone> InFlight<'a, T> {
    fn new(state: &'a Mutex<FeedState<T>>, generation: u64, initial: bool) -> Self {
        Self {
            state,
            generation,
            initial,
            done: false,
        }
    }

    /// Clear the loading flags and hand back the state, or `None` if a reset
    /// replaced the generation this fetch belonged to.
    fn finish(mut self) -> Option<MutexGuard<'a, FeedState<T>>> {
        self.done = true;
        let mut state = self.state.lock();
        if state.generation != self.generation {
            return None;
        }
        state.loading = false;
        if self.initial {
            state.initial_loading = false;
        }
        Some(state)
    }
}

impl<T: Identified> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        let mut state = self.state.lock();
        if state.generation == self.generation {
            state.loading = false;
            if self.initial {
                state.initial_loading = false;
            }
        }
    }
}
