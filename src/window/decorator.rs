//! Floating window view: cell geometry, hit testing and chrome rendering
//! for one [`WindowRecord`].

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear};

use super::WindowId;
use super::registry::WindowRecord;
use crate::ui::{CellMetrics, UiFrame, rect_contains};

const CLOSE_LABEL: &str = "[x]";
const MINIMIZE_LABEL: &str = "[_]";
const RESTORE_LABEL: &str = "[□]";
const GRIP_SYMBOL: &str = "◢";

/// What a press inside a window asks the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowIntent {
    DragStart(WindowId),
    ResizeStart(WindowId),
    Activate(WindowId),
    Close(WindowId),
    MinimizeToggle(WindowId),
}

/// Cell rectangles making up one window on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowChrome {
    pub id: WindowId,
    pub outer: Rect,
    pub header: Rect,
    pub title_row: u16,
    pub minimize_button: Rect,
    pub close_button: Rect,
    /// Region handed to the window content; empty when minimized.
    pub content: Rect,
    pub grip: Option<Rect>,
}

impl WindowChrome {
    pub fn layout<C>(record: &WindowRecord<C>, metrics: &CellMetrics) -> Self {
        let mut outer = metrics.window_rect(record.position(), record.size());
        let header_rows = metrics.header_rows();
        if record.minimized() {
            outer.height = outer.height.min(header_rows);
        }
        let header = Rect {
            height: header_rows.min(outer.height),
            ..outer
        };
        let title_row = header.y.saturating_add(header.height / 2);
        let right = outer.x.saturating_add(outer.width);
        let close_x = right.saturating_sub(1 + CLOSE_LABEL.chars().count() as u16);
        let minimize_x = close_x.saturating_sub(1 + MINIMIZE_LABEL.chars().count() as u16);
        let close_button = Rect::new(close_x, title_row, CLOSE_LABEL.chars().count() as u16, 1);
        let minimize_button = Rect::new(
            minimize_x,
            title_row,
            MINIMIZE_LABEL.chars().count() as u16,
            1,
        );
        let (content, grip) = if record.minimized() {
            (Rect::new(outer.x, header.bottom(), 0, 0), None)
        } else {
            let content = Rect::new(
                outer.x,
                header.bottom(),
                outer.width,
                outer.height.saturating_sub(header.height),
            );
            let grip = (outer.width >= 2 && outer.height > header.height).then(|| {
                Rect::new(
                    right.saturating_sub(2),
                    outer.bottom().saturating_sub(1),
                    2,
                    1,
                )
            });
            (content, grip)
        };
        Self {
            id: record.id(),
            outer,
            header,
            title_row,
            minimize_button,
            close_button,
            content,
            grip,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        rect_contains(self.outer, column, row)
    }

    /// Classify a press at `(column, row)`. Header buttons win over the
    /// drag strip; the grip wins over the content area.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<WindowIntent> {
        if !self.contains(column, row) {
            return None;
        }
        if rect_contains(self.close_button, column, row) {
            return Some(WindowIntent::Close(self.id));
        }
        if rect_contains(self.minimize_button, column, row) {
            return Some(WindowIntent::MinimizeToggle(self.id));
        }
        if let Some(grip) = self.grip
            && rect_contains(grip, column, row)
        {
            return Some(WindowIntent::ResizeStart(self.id));
        }
        if rect_contains(self.header, column, row) {
            return Some(WindowIntent::DragStart(self.id));
        }
        Some(WindowIntent::Activate(self.id))
    }

    /// Area inside the content border, where the window content draws.
    pub fn content_inner(&self) -> Rect {
        content_block(Style::default()).inner(self.content)
    }
}

fn content_block(border_style: Style) -> Block<'static> {
    Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(border_style)
}

/// Paint one window: chrome, then the content via `draw_content`, then the
/// resize grip on top.
pub fn render_window<C, F>(
    frame: &mut UiFrame<'_>,
    record: &mut WindowRecord<C>,
    metrics: &CellMetrics,
    active: bool,
    draw_content: F,
) -> WindowChrome
where
    F: FnOnce(&mut C, &mut UiFrame<'_>, Rect),
{
    let chrome = WindowChrome::layout(record, metrics);
    if chrome.outer.width == 0 || chrome.outer.height == 0 {
        return chrome;
    }
    frame.render_widget(Clear, chrome.outer);

    let header_style = if active {
        Style::default()
            .bg(crate::theme::header_active_bg())
            .fg(crate::theme::header_fg())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .bg(crate::theme::header_inactive_bg())
            .fg(crate::theme::header_fg())
    };
    frame.fill(chrome.header, " ", header_style);

    let title = format!(" {} {}", record.icon().glyph(), record.title());
    let title_room = chrome
        .minimize_button
        .x
        .saturating_sub(chrome.outer.x)
        .saturating_sub(1) as usize;
    let title = crate::ui::truncate_to_width(&title, title_room);
    frame.set_string(chrome.outer.x, chrome.title_row, &title, header_style);

    let minimize_label = if record.minimized() {
        RESTORE_LABEL
    } else {
        MINIMIZE_LABEL
    };
    if chrome.minimize_button.x > chrome.outer.x {
        frame.set_string(
            chrome.minimize_button.x,
            chrome.title_row,
            minimize_label,
            header_style,
        );
    }
    if chrome.close_button.x > chrome.outer.x {
        frame.set_string(
            chrome.close_button.x,
            chrome.title_row,
            CLOSE_LABEL,
            header_style,
        );
    }

    if record.minimized() || chrome.content.height == 0 {
        return chrome;
    }

    let border_style = if active {
        Style::default().fg(crate::theme::accent())
    } else {
        Style::default().fg(crate::theme::border_inactive())
    };
    frame.render_widget(content_block(border_style), chrome.content);
    let inner = chrome.content_inner();
    if inner.width > 0 && inner.height > 0 {
        draw_content(record.content_mut(), frame, inner);
    }

    if let Some(grip) = chrome.grip {
        frame.set_string(
            grip.x.saturating_add(1),
            grip.y,
            GRIP_SYMBOL,
            Style::default().fg(crate::theme::grip_fg()),
        );
    }
    chrome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::WindowTemplate;
    use crate::window::{IconTag, Point, Size, WindowRegistry};
    use ratatui::buffer::Buffer;

    fn registry() -> (WindowRegistry<()>, WindowId) {
        let mut reg = WindowRegistry::new();
        let id = reg.add(
            &WindowTemplate {
                title: "Notes".to_string(),
                icon: IconTag::FileText,
                default_size: Size::new(400, 320),
                factory: || (),
            },
            Point::new(16, 32),
        );
        (reg, id)
    }

    #[test]
    fn layout_places_controls_on_title_row() {
        let (reg, id) = registry();
        let chrome = WindowChrome::layout(reg.get(id).unwrap(), &CellMetrics::new(8, 16));
        assert_eq!(chrome.outer, Rect::new(2, 2, 50, 20));
        assert_eq!(chrome.header, Rect::new(2, 2, 50, 3));
        assert_eq!(chrome.title_row, 3);
        assert_eq!(chrome.close_button, Rect::new(48, 3, 3, 1));
        assert_eq!(chrome.minimize_button, Rect::new(44, 3, 3, 1));
        assert_eq!(chrome.content, Rect::new(2, 5, 50, 17));
        assert_eq!(chrome.grip, Some(Rect::new(50, 21, 2, 1)));
    }

    #[test]
    fn hit_test_classifies_presses() {
        let (reg, id) = registry();
        let chrome = WindowChrome::layout(reg.get(id).unwrap(), &CellMetrics::new(8, 16));
        assert_eq!(chrome.hit_test(49, 3), Some(WindowIntent::Close(id)));
        assert_eq!(chrome.hit_test(45, 3), Some(WindowIntent::MinimizeToggle(id)));
        assert_eq!(chrome.hit_test(10, 2), Some(WindowIntent::DragStart(id)));
        assert_eq!(chrome.hit_test(51, 21), Some(WindowIntent::ResizeStart(id)));
        assert_eq!(chrome.hit_test(10, 10), Some(WindowIntent::Activate(id)));
        assert_eq!(chrome.hit_test(0, 0), None);
    }

    #[test]
    fn minimized_window_is_header_only() {
        let (mut reg, id) = registry();
        reg.toggle_minimized(id);
        let chrome = WindowChrome::layout(reg.get(id).unwrap(), &CellMetrics::new(8, 16));
        assert_eq!(chrome.outer.height, 3);
        assert_eq!(chrome.content.height, 0);
        assert!(chrome.grip.is_none());
        assert_eq!(chrome.hit_test(10, 4), Some(WindowIntent::DragStart(id)));
        assert_eq!(chrome.hit_test(51, 21), None);
    }

    #[test]
    fn render_draws_title_and_delegates_content() {
        let (mut reg, id) = registry();
        let area = Rect::new(0, 0, 60, 24);
        let mut buf = Buffer::empty(area);
        let mut frame = UiFrame::from_parts(area, &mut buf);
        let mut content_area = None;
        let record = reg.get_mut(id).unwrap();
        render_window(
            &mut frame,
            record,
            &CellMetrics::new(8, 16),
            true,
            |_, _, inner| content_area = Some(inner),
        );
        assert_eq!(content_area, Some(Rect::new(3, 5, 48, 16)));
        let title: String = (2..12)
            .filter_map(|x| buf.cell((x, 3)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(title.contains("Notes"));
        assert_eq!(buf.cell((48, 3)).map(|c| c.symbol()), Some("["));
        assert_eq!(buf.cell((51, 21)).map(|c| c.symbol()), Some(GRIP_SYMBOL));
    }
}
