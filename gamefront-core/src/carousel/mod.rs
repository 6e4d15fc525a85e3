//! Featured banner carousel
//!
//! Banners are rendered three times in a row. The engine walks a virtual
//! index across that strip and silently moves it back into the middle copy
//! once it drifts toward either end, which gives endless looping in both
//! directions without visible jumps.

pub mod driver;
pub mod engine;
pub mod slides;
pub mod state;
pub mod types;

pub use driver::CarouselDriver;
pub use engine::CarouselEngine;
pub use slides::{Slide, slide_key, tripled};
pub use state::CarouselState;
pub use types::{CarouselEvent, Direction, DragOutcome, Transition};
