//! CarouselEngine: seamless looping navigation over a featured banner set

use std::sync::Arc;
use std::time::Instant;

use gamefront_model::{Banner, BannerSet};
use tracing::{debug, trace};

use super::slides::{self, Slide};
use super::state::CarouselState;
use super::types::{
    CarouselEvent, CarouselTimer, Direction, DragOutcome, Transition,
};
use crate::error::NavigationError;
use crate::settings::CarouselSettings;
use crate::time::{SharedClock, SystemClock};
use crate::timers::{TimerHandle, TimerSet};

/// Navigation engine for the featured banner carousel.
///
/// Owns the virtual index, the drag flag and two timers: a one-shot
/// re-center that pulls a drifted index back into the middle copy, and the
/// recurring auto-advance. Timers only fire from [`tick`](Self::tick).
#[derive(Debug)]
pub struct CarouselEngine {
    clock: SharedClock,
    settings: CarouselSettings,
    banners: BannerSet,
    state: CarouselState,
    transition: Transition,
    timers: TimerSet<CarouselTimer>,
    recenter: Option<TimerHandle>,
    auto_advance: Option<TimerHandle>,
    paused: bool,
    torn_down: bool,
}

impl CarouselEngine {
    pub fn new(settings: CarouselSettings, clock: SharedClock) -> Self {
        Self {
            clock,
            settings,
            banners: BannerSet::empty(),
            state: CarouselState::default(),
            transition: Transition::Instant,
            timers: TimerSet::new(),
            recenter: None,
            auto_advance: None,
            paused: false,
            torn_down: false,
        }
    }

    pub fn with_system_clock(settings: CarouselSettings) -> Self {
        Self::new(settings, Arc::new(SystemClock))
    }

    /// Load a banner set.
    ///
    /// Only a different load resets the position; handing the same set in
    /// again (a re-render) is a no-op. Returns whether the engine was
    /// re-initialized.
    pub fn initialize(&mut self, banners: &BannerSet) -> bool {
        if !self.torn_down && self.banners.same_load(banners) {
            return false;
        }

        self.timers.cancel_all();
        self.recenter = None;
        self.auto_advance = None;
        self.torn_down = false;
        self.banners = banners.clone();
        self.state = CarouselState::centered(banners.len());
        self.transition = Transition::Instant;

        debug!(
            real_count = self.state.real_count,
            virtual_index = self.state.virtual_index,
            "carousel initialized"
        );

        let now = self.clock.now();
        self.arm_auto_advance(now);
        true
    }

    pub fn banners(&self) -> &BannerSet {
        &self.banners
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn virtual_index(&self) -> i64 {
        self.state.virtual_index
    }

    pub fn real_count(&self) -> usize {
        self.state.real_count
    }

    pub fn real_index(&self) -> usize {
        self.state.real_index()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging
    }

    /// How the host should move to the current position.
    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn current_banner(&self) -> Option<&Banner> {
        self.banners.get(self.real_index())
    }

    /// The tripled slide strip with the current slide marked.
    pub fn slides(&self) -> Vec<Slide<'_>> {
        slides::tripled(&self.banners, self.state.virtual_index)
    }

    pub fn next(&mut self) {
        self.navigate(Direction::Next);
    }

    pub fn prev(&mut self) {
        self.navigate(Direction::Prev);
    }

    fn navigate(&mut self, direction: Direction) {
        // With a single banner every position shows the same slide.
        if self.state.real_count <= 1 {
            return;
        }
        self.state.step(direction.delta());
        self.transition = Transition::Animated;
        trace!(
            ?direction,
            virtual_index = self.state.virtual_index,
            real_index = self.state.real_index(),
            "carousel navigated"
        );
        self.reindex_if_drifted();
    }

    /// Jump to a real banner index inside the middle copy.
    pub fn go_to(&mut self, real_index: usize) -> Result<(), NavigationError> {
        if real_index >= self.state.real_count {
            debug!(
                real_index,
                real_count = self.state.real_count,
                "carousel go_to rejected"
            );
            return Err(NavigationError::OutOfRange {
                index: real_index,
                len: self.state.real_count,
            });
        }
        self.state.virtual_index = self.state.middle_start() + real_index as i64;
        self.transition = Transition::Animated;
        self.reindex_if_drifted();
        Ok(())
    }

    pub fn on_drag_start(&mut self) {
        self.state.is_dragging = true;
    }

    /// Finish a drag with its horizontal offset in logical pixels.
    ///
    /// Dragging right (positive offset) reveals the previous slide.
    pub fn on_drag_end(&mut self, offset_x: f32) -> DragOutcome {
        self.state.is_dragging = false;
        let threshold = self.settings.swipe_threshold_px;

        let direction = if offset_x > threshold {
            Direction::Prev
        } else if offset_x < -threshold {
            Direction::Next
        } else {
            trace!(offset_x, "drag below swipe threshold");
            return DragOutcome::Ignored;
        };

        self.navigate(direction);
        DragOutcome::Navigated(direction)
    }

    /// Banner a click on the strip should open, if clicks are allowed now.
    ///
    /// A pointer-down becomes either a drag or a tap, never both, so no
    /// target is returned while a drag is in progress.
    pub fn click_target(&self) -> Option<&Banner> {
        if self.state.is_dragging {
            return None;
        }
        self.current_banner()
    }

    /// Schedule a silent re-center if the virtual index drifted out of the
    /// middle band.
    ///
    /// A re-center that is already pending keeps its deadline, so steady
    /// navigation cannot postpone it forever; it is cancelled only once the
    /// index is back inside the band. An index that has run off the rendered
    /// strip is re-centered on the spot.
    pub fn reindex_if_drifted(&mut self) {
        if self.torn_down {
            return;
        }
        if !self.state.is_drifted() {
            if let Some(handle) = self.recenter.take() {
                self.timers.cancel(handle);
            }
            return;
        }
        if !self.state.is_within_strip() {
            if let Some(handle) = self.recenter.take() {
                self.timers.cancel(handle);
            }
            let from = self.state.virtual_index;
            let to = self.state.recentered_index();
            self.state.virtual_index = to;
            self.transition = Transition::Instant;
            debug!(from, to, "carousel left the slide strip, re-centered");
            return;
        }
        if self.recenter.is_some() {
            return;
        }

        let now = self.clock.now();
        let handle = self.timers.schedule_after(
            now,
            self.settings.recenter_delay(),
            CarouselTimer::Recenter,
        );
        trace!(
            virtual_index = self.state.virtual_index,
            "carousel re-center scheduled"
        );
        self.recenter = Some(handle);
    }

    pub fn is_recenter_pending(&self) -> bool {
        self.recenter.is_some()
    }

    /// Stop auto-advance until [`resume`](Self::resume).
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        if let Some(handle) = self.auto_advance.take() {
            self.timers.cancel(handle);
        }
        trace!("carousel auto-advance paused");
    }

    /// Resume auto-advance. The next advance is a full interval from now.
    pub fn resume(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        let now = self.clock.now();
        self.arm_auto_advance(now);
        trace!("carousel auto-advance resumed");
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.settings.auto_advance = enabled;
        if enabled {
            let now = self.clock.now();
            self.arm_auto_advance(now);
        } else if let Some(handle) = self.auto_advance.take() {
            self.timers.cancel(handle);
        }
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_some()
    }

    /// Earliest instant at which [`tick`](Self::tick) has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Fire every timer that is due.
    pub fn tick(&mut self) -> Vec<CarouselEvent> {
        let now = self.clock.now();
        let mut events = Vec::new();

        while let Some(fired) = self.timers.pop_due(now) {
            match fired.kind {
                CarouselTimer::Recenter => {
                    self.recenter = None;
                    if !self.state.is_drifted() {
                        continue;
                    }
                    let from = self.state.virtual_index;
                    let to = self.state.recentered_index();
                    self.state.virtual_index = to;
                    self.transition = Transition::Instant;
                    debug!(from, to, "carousel re-centered");
                    events.push(CarouselEvent::Recentered { from, to });
                }
                CarouselTimer::AutoAdvance => {
                    self.auto_advance = None;
                    self.next();
                    events.push(CarouselEvent::AutoAdvanced {
                        real_index: self.state.real_index(),
                    });

                    // Keep the cadence anchored to the schedule, but skip
                    // intervals that were missed entirely.
                    let interval = self.settings.auto_advance_interval();
                    let base = if fired.deadline + interval <= now {
                        now
                    } else {
                        fired.deadline
                    };
                    self.arm_auto_advance(base);
                }
            }
        }

        events
    }

    /// Cancel every timer. Nothing fires afterwards until the engine is
    /// initialized again.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.recenter = None;
        self.auto_advance = None;
        self.state.is_dragging = false;
        self.torn_down = true;
        debug!("carousel torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    fn arm_auto_advance(&mut self, from: Instant) {
        if self.torn_down
            || self.paused
            || !self.settings.auto_advance
            || self.state.real_count <= 1
            || self.auto_advance.is_some()
        {
            return;
        }
        let handle = self.timers.schedule_after(
            from,
            self.settings.auto_advance_interval(),
            CarouselTimer::AutoAdvance,
        );
        self.auto_advance = Some(handle);
    }
}
