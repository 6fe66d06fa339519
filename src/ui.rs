//! UiFrame: a thin wrapper around `ratatui::Frame` that clamps drawing to the
//! visible area, plus the pixel/cell conversion used by the window view.
//!
//! Windows live in logical pixels and routinely extend past the right or
//! bottom edge of the terminal. Every draw goes through `UiFrame`, which
//! intersects the target with the visible area, so the window view can paint
//! full-size chrome without bounds checks of its own.
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::constants::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, HEADER_HEIGHT};
use crate::window::{Point, Size};

/// Wrapper around `ratatui::Frame` that clamps drawing to the visible area.
pub struct UiFrame<'a> {
    area: Rect,
    buffer: &'a mut Buffer,
}

impl<'a> UiFrame<'a> {
    pub fn new(frame: &'a mut Frame<'_>) -> Self {
        let area = frame.area();
        let buffer = frame.buffer_mut();
        Self { area, buffer }
    }

    /// Construct a `UiFrame` directly from an area and buffer. Used by tests
    /// and by any caller rendering into an offscreen buffer.
    pub fn from_parts(area: Rect, buffer: &'a mut Buffer) -> Self {
        Self { area, buffer }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        self.buffer
    }

    fn clip_rect(&self, rect: Rect) -> Option<Rect> {
        let clipped = rect.intersection(self.area);
        if clipped.width == 0 || clipped.height == 0 {
            None
        } else {
            Some(clipped)
        }
    }

    pub fn render_widget<W>(&mut self, widget: W, area: Rect)
    where
        W: Widget,
    {
        if let Some(clipped) = self.clip_rect(area) {
            widget.render(clipped, self.buffer);
        }
    }

    /// Write `text` at `(x, y)`, truncated to the visible area.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style) {
        let bounds = self.area;
        safe_set_string(self.buffer, bounds, x, y, text, style);
    }

    /// Restyle every visible cell of `area`.
    pub fn fill(&mut self, area: Rect, symbol: &str, style: Style) {
        let Some(clipped) = self.clip_rect(area) else {
            return;
        };
        for y in clipped.y..clipped.y.saturating_add(clipped.height) {
            for x in clipped.x..clipped.x.saturating_add(clipped.width) {
                if let Some(cell) = self.buffer.cell_mut((x, y)) {
                    cell.set_symbol(symbol);
                    cell.set_style(style);
                }
            }
        }
    }
}

pub(crate) fn safe_set_string(
    buffer: &mut Buffer,
    bounds: Rect,
    x: u16,
    y: u16,
    text: &str,
    style: Style,
) {
    if bounds.width == 0 || bounds.height == 0 {
        return;
    }
    let max_x = bounds.x.saturating_add(bounds.width);
    let max_y = bounds.y.saturating_add(bounds.height);
    if x < bounds.x || x >= max_x || y < bounds.y || y >= max_y {
        return;
    }
    let available = max_x.saturating_sub(x);
    if available == 0 {
        return;
    }
    let text = truncate_to_width(text, available as usize);
    buffer.set_string(x, y, text, style);
}

pub(crate) fn truncate_to_width(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    value.chars().take(width).collect()
}

pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    if rect.width == 0 || rect.height == 0 {
        return false;
    }
    let max_x = rect.x.saturating_add(rect.width);
    let max_y = rect.y.saturating_add(rect.height);
    column >= rect.x && column < max_x && row >= rect.y && row < max_y
}

/// Pixel size of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMetrics {
    pub cell_width: u16,
    pub cell_height: u16,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
        }
    }
}

impl CellMetrics {
    pub fn new(cell_width: u16, cell_height: u16) -> Self {
        Self {
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
        }
    }

    /// Pixel coordinate of the top-left corner of a cell.
    pub fn cell_to_point(&self, column: u16, row: u16) -> Point {
        Point::new(
            column as i32 * self.cell_width as i32,
            row as i32 * self.cell_height as i32,
        )
    }

    pub fn columns(&self, px: i32) -> u16 {
        to_cells(px, self.cell_width)
    }

    pub fn rows(&self, px: i32) -> u16 {
        to_cells(px, self.cell_height)
    }

    /// Rows taken by the window header; never less than one.
    pub fn header_rows(&self) -> u16 {
        let h = self.cell_height as i32;
        to_cells(HEADER_HEIGHT + h - 1, self.cell_height).max(1)
    }

    /// Cell rectangle covering a pixel-space window. Only non-negative
    /// origins reach here, the registry clamps them.
    pub fn window_rect(&self, position: Point, size: Size) -> Rect {
        let x = self.columns(position.x);
        let y = self.rows(position.y);
        let width = self.columns(size.width).min(u16::MAX - x);
        let height = self.rows(size.height).min(u16::MAX - y);
        Rect::new(x, y, width, height)
    }
}

fn to_cells(px: i32, per_cell: u16) -> u16 {
    let cells = px.max(0) / per_cell.max(1) as i32;
    cells.min(u16::MAX as i32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Style;

    #[test]
    fn safe_set_string_clips_and_truncates() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 3,
            height: 1,
        };
        let mut buf = Buffer::empty(area);
        safe_set_string(&mut buf, area, 1, 0, "hello", Style::default());
        assert_eq!(buf.cell((1, 0)).map(|c| c.symbol()), Some("h"));
        assert_eq!(buf.cell((2, 0)).map(|c| c.symbol()), Some("e"));
        safe_set_string(&mut buf, area, 9, 0, "x", Style::default());
    }

    #[test]
    fn fill_ignores_cells_outside_area() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        frame.fill(Rect::new(2, 1, 10, 10), "#", Style::default());
        assert_eq!(buf.cell((3, 1)).map(|c| c.symbol()), Some("#"));
        assert_eq!(buf.cell((1, 1)).map(|c| c.symbol()), Some(" "));
    }

    #[test]
    fn metrics_map_pixels_to_cells() {
        let m = CellMetrics::new(8, 16);
        assert_eq!(m.cell_to_point(10, 3), Point::new(80, 48));
        assert_eq!(m.header_rows(), 3);
        assert_eq!(
            m.window_rect(Point::new(50, 100), Size::new(400, 450)),
            Rect::new(6, 6, 50, 28)
        );
    }

    #[test]
    fn header_rows_round_up() {
        assert_eq!(CellMetrics::new(8, 20).header_rows(), 3);
        assert_eq!(CellMetrics::new(8, 64).header_rows(), 1);
    }

    #[test]
    fn rect_contains_edge_cases() {
        assert!(!rect_contains(Rect::new(0, 0, 0, 5), 0, 0));
        let r = Rect::new(1, 1, 3, 3);
        assert!(rect_contains(r, 1, 1));
        assert!(!rect_contains(r, 4, 1));
    }
}
