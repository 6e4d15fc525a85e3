//! FeedState: accumulated, de-duplicated feed items and load flags

use std::collections::HashSet;

use gamefront_contracts::Identified;

use crate::constants::feed::FIRST_PAGE;
use crate::error::FeedError;

/// Mutable feed state guarded by the engine.
///
/// `items` never holds two entries with the same id; `ids` mirrors it for
/// constant-time membership checks.
#[derive(Debug, Clone)]
pub struct FeedState<T: Identified> {
    items: Vec<T>,
    ids: HashSet<T::Id>,
    pub(crate) page_cursor: u32,
    pub(crate) loading: bool,
    pub(crate) initial_loading: bool,
    pub(crate) error: Option<FeedError>,
    pub(crate) end_of_content: bool,
    /// Bumped by every reset; responses from an older generation are dropped.
    pub(crate) generation: u64,
}

impl<T: Identified> Default for FeedState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            ids: HashSet::new(),
            page_cursor: FIRST_PAGE,
            loading: false,
            initial_loading: true,
            error: None,
            end_of_content: false,
            generation: 0,
        }
    }
}

impl<T: Identified + Clone> FeedState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.ids.contains(id)
    }

    pub fn page_cursor(&self) -> u32 {
        self.page_cursor
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_initial_loading(&self) -> bool {
        self.initial_loading
    }

    pub fn error(&self) -> Option<&FeedError> {
        self.error.as_ref()
    }

    pub fn is_end_of_content(&self) -> bool {
        self.end_of_content
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace all items with `items`, keeping the first of any repeated id.
    pub(crate) fn replace_items(&mut self, items: Vec<T>) {
        self.items.clear();
        self.ids.clear();
        self.append(items);
    }

    /// Items from `page` whose ids are neither stored nor repeated earlier in
    /// the page, in page order.
    pub(crate) fn unseen(&self, page: Vec<T>) -> Vec<T> {
        let mut in_page = HashSet::new();
        page.into_iter()
            .filter(|item| {
                let id = item.id();
                !self.ids.contains(id) && in_page.insert(id.clone())
            })
            .collect()
    }

    /// Append in arrival order, skipping ids already present.
    pub(crate) fn append(&mut self, items: Vec<T>) -> usize {
        let before = self.items.len();
        for item in items {
            if self.ids.insert(item.id().clone()) {
                self.items.push(item);
            }
        }
        self.items.len() - before
    }

    /// Back to the freshly created state, under a new generation.
    pub(crate) fn reset(&mut self) {
        let generation = self.generation.wrapping_add(1);
        *self = Self {
            generation,
            ..Self::default()
        };
    }

    pub fn snapshot(&self) -> FeedSnapshot<T> {
        FeedSnapshot {
            items: self.items.clone(),
            page_cursor: self.page_cursor,
            loading: self.loading,
            initial_loading: self.initial_loading,
            error: self.error.clone(),
            end_of_content: self.end_of_content,
        }
    }
}

/// Point-in-time copy of the feed for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot<T> {
    pub items: Vec<T>,
    pub page_cursor: u32,
    pub loading: bool,
    pub initial_loading: bool,
    pub error: Option<FeedError>,
    pub end_of_content: bool,
}

impl<T> FeedSnapshot<T> {
    pub fn has_more(&self) -> bool {
        !self.end_of_content
    }

    /// Whether a host may ask for the next page right now.
    pub fn can_load_more(&self) -> bool {
        !self.loading && !self.end_of_content
    }

    /// User-facing error message, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}
