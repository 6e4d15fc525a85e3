//! Shared types for the featured carousel

/// Navigation direction in the virtual index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    pub(crate) fn delta(self) -> i64 {
        match self {
            Direction::Next => 1,
            Direction::Prev => -1,
        }
    }
}

/// How the host should move to the current virtual index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// Regular navigation: animate the slide strip.
    #[default]
    Animated,
    /// Silent re-center: jump without animation so no movement is visible.
    Instant,
}

/// Result of interpreting a finished drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Navigated(Direction),
    /// Movement stayed within the swipe threshold.
    Ignored,
}

/// Something that happened during a [`tick`](super::CarouselEngine::tick).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    AutoAdvanced { real_index: usize },
    Recentered { from: i64, to: i64 },
}

/// Timers owned by the carousel engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CarouselTimer {
    Recenter,
    AutoAdvance,
}
