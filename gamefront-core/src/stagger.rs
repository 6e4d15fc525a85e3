//! Staggered entrance visibility for list items
//!
//! Each attached id starts hidden and is revealed by its own one-shot timer
//! at `initial_delay + position * stagger_delay`. Re-attaching or detaching
//! cancels whatever has not fired yet, so a replaced list never receives
//! reveals meant for the old one.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::trace;

use crate::settings::StaggerSettings;
use crate::time::SharedClock;
use crate::timers::TimerSet;

#[derive(Debug)]
pub struct VisibilityStagger<Id> {
    clock: SharedClock,
    settings: StaggerSettings,
    ids: Vec<Id>,
    visible: HashMap<Id, bool>,
    timers: TimerSet<Id>,
}

impl<Id> VisibilityStagger<Id>
where
    Id: Clone + Eq + Hash,
{
    pub fn new(settings: StaggerSettings, clock: SharedClock) -> Self {
        Self {
            clock,
            settings,
            ids: Vec::new(),
            visible: HashMap::new(),
            timers: TimerSet::new(),
        }
    }

    pub fn settings(&self) -> &StaggerSettings {
        &self.settings
    }

    /// Ids of the currently attached list, in order.
    pub fn ids(&self) -> &[Id] {
        &self.ids
    }

    /// Attach a list with explicit timings.
    ///
    /// Pending reveals from a previous attach are cancelled. With
    /// `reset_on_change` every id starts hidden; otherwise ids that are
    /// already visible stay so and only the others are staggered. Their
    /// slots count from the first hidden id, or from the start of the list
    /// when `list_position_timing` is set.
    pub fn attach(
        &mut self,
        ids: impl IntoIterator<Item = Id>,
        initial_delay: Duration,
        stagger_delay: Duration,
    ) {
        self.timers.cancel_all();
        self.ids = ids.into_iter().collect();

        let previous = if self.settings.reset_on_change {
            self.visible.clear();
            HashMap::new()
        } else {
            std::mem::take(&mut self.visible)
        };

        let now = self.clock.now();
        let by_index = self.settings.list_position_timing;
        let mut staggered: u32 = 0;
        for (index, id) in self.ids.iter().enumerate() {
            if previous.get(id).copied().unwrap_or(false) {
                self.visible.insert(id.clone(), true);
                continue;
            }
            self.visible.insert(id.clone(), false);
            let slot = if by_index {
                u32::try_from(index).unwrap_or(u32::MAX)
            } else {
                staggered
            };
            let delay = initial_delay + stagger_delay.saturating_mul(slot);
            self.timers.schedule_after(now, delay, id.clone());
            staggered = staggered.saturating_add(1);
        }

        trace!(
            items = self.ids.len(),
            staggered,
            "visibility stagger attached"
        );
    }

    /// Attach using the configured timings, but only if the id list differs
    /// from the attached one.
    ///
    /// Returns whether a re-attach happened.
    pub fn sync(&mut self, ids: &[Id]) -> bool {
        if self.ids == ids {
            return false;
        }
        let initial = self.settings.initial_delay();
        let stagger = self.settings.stagger_delay();
        self.attach(ids.iter().cloned(), initial, stagger);
        true
    }

    /// Cancel every pending reveal. Visibility already granted is kept.
    pub fn detach(&mut self) {
        self.timers.cancel_all();
    }

    /// Reveal every id whose timer is due. Returns the ids revealed.
    pub fn tick(&mut self) -> Vec<Id> {
        let now = self.clock.now();
        let mut revealed = Vec::new();
        while let Some(fired) = self.timers.pop_due(now) {
            self.visible.insert(fired.kind.clone(), true);
            revealed.push(fired.kind);
        }
        revealed
    }

    pub fn is_visible(&self, id: &Id) -> bool {
        self.visible.get(id).copied().unwrap_or(false)
    }

    /// Force one id's visibility. Overrides a pending reveal for that id.
    pub fn set_item_visibility(&mut self, id: Id, visible: bool) {
        self.timers.cancel_where(|pending| *pending == id);
        self.visible.insert(id, visible);
    }

    /// Force every attached id to the same visibility.
    pub fn set_all_visibility(&mut self, visible: bool) {
        self.timers.cancel_all();
        self.visible = self
            .ids
            .iter()
            .map(|id| (id.clone(), visible))
            .collect();
    }

    pub fn visibility(&self) -> &HashMap<Id, bool> {
        &self.visible
    }

    pub fn visible_count(&self) -> usize {
        self.visible.values().filter(|shown| **shown).count()
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }
}
