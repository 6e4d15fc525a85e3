//! Featured banner view glue: hover pausing and click-through

use gamefront_model::{Banner, BannerSet};
use tracing::debug;

use crate::carousel::{CarouselEngine, CarouselEvent, DragOutcome};
use crate::viewport::Breakpoint;

/// Maps pointer and viewport signals onto a [`CarouselEngine`].
///
/// Hover pauses auto-advance on desktop only. Leaving the carousel, or the
/// viewport shrinking out of desktop while hovered, resumes it.
#[derive(Debug)]
pub struct BannerView {
    engine: CarouselEngine,
    breakpoint: Breakpoint,
    hovered: bool,
}

impl BannerView {
    pub fn new(engine: CarouselEngine, breakpoint: Breakpoint) -> Self {
        Self {
            engine,
            breakpoint,
            hovered: false,
        }
    }

    pub fn engine(&self) -> &CarouselEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut CarouselEngine {
        &mut self.engine
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Hand a (possibly unchanged) banner set to the carousel.
    pub fn show(&mut self, banners: &BannerSet) -> bool {
        self.engine.initialize(banners)
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.set_breakpoint(Breakpoint::from_width(width));
    }

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        if breakpoint == self.breakpoint {
            return;
        }
        debug!(from = ?self.breakpoint, to = ?breakpoint, "banner view breakpoint changed");
        self.breakpoint = breakpoint;
        if !breakpoint.supports_hover() && self.hovered {
            self.hovered = false;
            self.engine.resume();
        }
    }

    pub fn on_pointer_enter(&mut self) {
        if !self.breakpoint.supports_hover() || self.hovered {
            return;
        }
        self.hovered = true;
        self.engine.pause();
    }

    pub fn on_pointer_leave(&mut self) {
        if !self.hovered {
            return;
        }
        self.hovered = false;
        self.engine.resume();
    }

    pub fn on_drag_start(&mut self) {
        self.engine.on_drag_start();
    }

    pub fn on_drag_end(&mut self, offset_x: f32) -> DragOutcome {
        self.engine.on_drag_end(offset_x)
    }

    /// Route to open for a click on the banner, if any.
    pub fn on_click(&self) -> Option<String> {
        self.engine.click_target().map(Banner::route)
    }

    pub fn tick(&mut self) -> Vec<CarouselEvent> {
        self.engine.tick()
    }

    pub fn teardown(&mut self) {
        self.engine.teardown();
    }
}
