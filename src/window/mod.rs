pub mod decorator;
pub mod interaction;
pub mod registry;

use std::fmt;
use std::ops::{Add, Sub};

use crate::constants::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

pub use decorator::{WindowChrome, WindowIntent, render_window};
pub use interaction::{Interaction, InteractionController};
pub use registry::{WindowRecord, WindowRegistry};

/// Stable window identifier. Assigned by the registry, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(u64);

impl WindowId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "window-{}", self.0)
    }
}

/// A point in logical pixels. Used both for window origins and pointer
/// coordinates; pre-clamp values may be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp both axes to the non-negative quadrant.
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.max(0),
            y: self.y.max(0),
        }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Window extent in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Raise each axis to the window minimum.
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_WIDTH),
            height: self.height.max(MIN_WINDOW_HEIGHT),
        }
    }

    /// Grow (or shrink) by a pointer delta.
    pub fn offset_by(self, delta: Point) -> Self {
        Self {
            width: self.width.saturating_add(delta.x),
            height: self.height.saturating_add(delta.y),
        }
    }
}

/// Symbolic icon reference carried by a window. The core never interprets
/// it; the view maps it to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconTag {
    Bot,
    Globe,
    FileText,
    Terminal,
}

impl IconTag {
    pub fn glyph(self) -> &'static str {
        match self {
            IconTag::Bot => "◉",
            IconTag::Globe => "◍",
            IconTag::FileText => "≡",
            IconTag::Terminal => "❯",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_clamp_only_raises_negative_axes() {
        assert_eq!(Point::new(-5, 7).clamped(), Point::new(0, 7));
        assert_eq!(Point::new(3, -1).clamped(), Point::new(3, 0));
        assert_eq!(Point::new(12, 34).clamped(), Point::new(12, 34));
    }

    #[test]
    fn size_clamp_floors_each_axis() {
        assert_eq!(Size::new(10, 900).clamped(), Size::new(300, 900));
        assert_eq!(Size::new(640, -20).clamped(), Size::new(640, 200));
    }

    #[test]
    fn point_arithmetic_produces_delta() {
        let delta = Point::new(230, 250) - Point::new(200, 200);
        assert_eq!(delta, Point::new(30, 50));
        assert_eq!(Point::new(50, 100) + delta, Point::new(80, 150));
    }

    #[test]
    fn window_id_displays_with_prefix() {
        assert_eq!(WindowId::new(4).to_string(), "window-4");
    }
}
