//! Shared component rendering context
//!
//! `ComponentContext` carries the window state a panel may care about while
//! rendering or handling input, so the `Component` trait does not grow a new
//! boolean parameter every time a panel needs to know something.

/// Context passed to `Component` trait methods.
///
/// - `focused`: the hosting window is the active window.
/// - `content_area`: where the panel was last asked to draw; mouse events
///   arrive in absolute cells and panels compare against this.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentContext {
    focused: bool,
    content_area: ratatui::layout::Rect,
}

impl ComponentContext {
    pub const fn new(focused: bool) -> Self {
        Self {
            focused,
            content_area: ratatui::layout::Rect::ZERO,
        }
    }

    pub const fn focused(&self) -> bool {
        self.focused
    }

    pub const fn content_area(&self) -> ratatui::layout::Rect {
        self.content_area
    }

    pub const fn with_content_area(mut self, area: ratatui::layout::Rect) -> Self {
        self.content_area = area;
        self
    }
}
