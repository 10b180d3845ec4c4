// file: src/models/lane.rs
// description: per-lane display view-model with border styling
// reference: internal data structures

use serde::{Deserialize, Serialize};
use std::fmt;

pub const BORDER_WIDTH_PX: u8 = 3;

/// Semantic lane state shown through the border color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    /// Blocked
    Red,
    /// Active or about to change
    Yellow,
    /// Flowing
    Green,
}

impl Signal {
    pub fn css_name(self) -> &'static str {
        match self {
            Signal::Red => "red",
            Signal::Yellow => "yellow",
            Signal::Green => "green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Border {
    pub width_px: u8,
    pub signal: Signal,
}

impl Border {
    pub const fn solid(signal: Signal) -> Self {
        Self {
            width_px: BORDER_WIDTH_PX,
            signal,
        }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px solid {}", self.width_px, self.signal.css_name())
    }
}

/// One lane region on a display surface. Fields hold the last value written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub name: String,
    pub border: Option<Border>,
    pub count: Option<String>,
    pub flow: Option<String>,
    pub speed: Option<String>,
}

impl Lane {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
