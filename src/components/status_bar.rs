use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::ui::{UiFrame, safe_set_string, truncate_to_width};

/// One-row text chip. The workspace uses it for the branding label and for
/// the online/window-count indicator.
#[derive(Debug, Clone)]
pub struct StatusBar {
    text: String,
    style: Style,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            style: Style::default(),
        }
    }

    pub fn set_text<T: Into<String>>(&mut self, value: T) {
        self.text = value.into();
    }

    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// Width in cells needed to show the whole text.
    pub fn preferred_width(&self) -> u16 {
        self.text.chars().count().min(u16::MAX as usize) as u16
    }

    pub fn render(&self, frame: &mut UiFrame<'_>, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        frame.fill(Rect { height: 1, ..area }, " ", self.style);
        let buffer = frame.buffer_mut();
        let bounds = area.intersection(buffer.area);
        if bounds.width == 0 || bounds.height == 0 {
            return;
        }
        let text = truncate_to_width(&self.text, area.width as usize);
        safe_set_string(buffer, bounds, area.x, area.y, &text, self.style);
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn text_is_truncated_to_area() {
        let mut bar = StatusBar::new();
        bar.set_text("● Online | 3 windows");
        let area = Rect::new(0, 0, 8, 1);
        let mut buf = Buffer::empty(area);
        {
            let mut frame = UiFrame::from_parts(area, &mut buf);
            bar.render(&mut frame, area);
        }
        assert_eq!(row_text(&buf, 0), "● Online");
    }

    #[test]
    fn preferred_width_counts_chars() {
        let mut bar = StatusBar::new();
        assert_eq!(bar.preferred_width(), 0);
        bar.set_text(" ◉ Ptahhotep ");
        assert_eq!(bar.preferred_width(), 13);
    }
}
