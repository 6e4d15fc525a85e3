//! CarouselState: virtual index over a tripled banner list
//!
//! The rendered strip holds three copies of the banner list. The virtual index
//! walks that strip freely in both directions; the real index is its true
//! modulo over the banner count. Whenever the virtual index leaves the band
//! `[n/2, 2n + n/2)` it can be moved back to the middle copy without the real
//! index changing.

use crate::constants::carousel::COPIES;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselState {
    /// Position in the tripled strip. Can go negative between re-centers.
    pub virtual_index: i64,
    /// Number of distinct banners.
    pub real_count: usize,
    /// A drag gesture is in progress; click-through is suppressed.
    pub is_dragging: bool,
}

impl CarouselState {
    /// State positioned at the first banner of the middle copy.
    pub fn centered(real_count: usize) -> Self {
        Self {
            virtual_index: real_count as i64,
            real_count,
            is_dragging: false,
        }
    }

    /// Start of the middle copy.
    pub fn middle_start(&self) -> i64 {
        self.real_count as i64
    }

    /// Real banner index for the current virtual index. Always 0 when there
    /// are no banners.
    pub fn real_index(&self) -> usize {
        if self.real_count == 0 {
            return 0;
        }
        self.virtual_index.rem_euclid(self.real_count as i64) as usize
    }

    /// Whether the virtual index has left `[n/2, 2n + n/2)`.
    ///
    /// Compared on doubled values so odd counts keep the half-slide bound.
    pub fn is_drifted(&self) -> bool {
        if self.real_count == 0 {
            return false;
        }
        let n = self.real_count as i64;
        let doubled = self.virtual_index.saturating_mul(2);
        doubled < n || doubled >= 5 * n
    }

    /// Whether the virtual index points at a rendered slide, `[0, 3n)`.
    pub fn is_within_strip(&self) -> bool {
        let len = (self.real_count as i64).saturating_mul(COPIES as i64);
        (0..len).contains(&self.virtual_index)
    }

    /// Virtual index in the middle copy that shows the same real banner.
    pub fn recentered_index(&self) -> i64 {
        if self.real_count == 0 {
            return 0;
        }
        let n = self.real_count as i64;
        n + self.virtual_index.rem_euclid(n)
    }

    pub(crate) fn step(&mut self, delta: i64) {
        self.virtual_index = self.virtual_index.saturating_add(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_state_starts_at_middle_copy() {
        let state = CarouselState::centered(5);
        assert_eq!(state.virtual_index, 5);
        assert_eq!(state.real_index(), 0);
        assert!(!state.is_drifted());
    }

    #[test]
    fn real_index_stays_in_range_for_negative_virtual_indices() {
        for count in 1..=7usize {
            let mut state = CarouselState::centered(count);
            for _ in 0..(count * 4 + 3) {
                state.step(-1);
                assert!(state.real_index() < count);
            }
            for _ in 0..(count * 9 + 1) {
                state.step(1);
                assert!(state.real_index() < count);
            }
        }
    }

    #[test]
    fn negative_index_uses_true_modulo() {
        let state = CarouselState {
            virtual_index: -1,
            real_count: 4,
            is_dragging: false,
        };
        assert_eq!(state.real_index(), 3);
        assert_eq!(state.recentered_index(), 7);
    }

    #[test]
    fn drift_band_uses_half_slide_bounds() {
        // n = 5: keep [2.5, 12.5), so 3..=12 are fine.
        let at = |v| CarouselState {
            virtual_index: v,
            real_count: 5,
            is_dragging: false,
        };
        assert!(at(2).is_drifted());
        assert!(!at(3).is_drifted());
        assert!(!at(12).is_drifted());
        assert!(at(13).is_drifted());
    }

    #[test]
    fn strip_covers_three_copies() {
        let at = |v| CarouselState {
            virtual_index: v,
            real_count: 3,
            is_dragging: false,
        };
        assert!(!at(-1).is_within_strip());
        assert!(at(0).is_within_strip());
        assert!(at(8).is_within_strip());
        assert!(!at(9).is_within_strip());
        assert!(!CarouselState::default().is_within_strip());
    }

    #[test]
    fn recentering_preserves_real_index() {
        for count in 1..=6usize {
            for v in -20i64..40 {
                let state = CarouselState {
                    virtual_index: v,
                    real_count: count,
                    is_dragging: false,
                };
                let moved = CarouselState {
                    virtual_index: state.recentered_index(),
                    ..state.clone()
                };
                assert_eq!(moved.real_index(), state.real_index());
                assert!(!moved.is_drifted());
            }
        }
    }

    #[test]
    fn empty_state_is_inert() {
        let state = CarouselState::centered(0);
        assert_eq!(state.real_index(), 0);
        assert!(!state.is_drifted());
        assert_eq!(state.recentered_index(), 0);
    }
}
