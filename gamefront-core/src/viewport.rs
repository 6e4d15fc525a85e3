//! Viewport breakpoints

use serde::{Deserialize, Serialize};

use crate::constants::viewport::{MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Breakpoint {
    /// Classify a viewport width in CSS pixels.
    pub fn from_width(width: f32) -> Self {
        if width <= MOBILE_MAX_WIDTH {
            Breakpoint::Mobile
        } else if width <= TABLET_MAX_WIDTH {
            Breakpoint::Tablet
        } else {
            Breakpoint::Desktop
        }
    }

    /// Only desktop pointers hover; touch layouts never pause on hover.
    pub fn supports_hover(self) -> bool {
        matches!(self, Breakpoint::Desktop)
    }

    pub fn is_mobile(self) -> bool {
        self == Breakpoint::Mobile
    }

    pub fn is_tablet(self) -> bool {
        self == Breakpoint::Tablet
    }

    pub fn is_desktop(self) -> bool {
        self == Breakpoint::Desktop
    }
}
