//! Mini Browser: an address bar over a static placeholder page.

use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::{Component, ComponentContext, TextInput, is_enter, key_press, left_click};
use crate::ui::{UiFrame, rect_contains};

const GO_LABEL: &str = "[Go]";

#[derive(Debug, Clone)]
pub struct BrowserPanel {
    address: TextInput,
    current_url: String,
    go_button: Rect,
}

impl BrowserPanel {
    pub fn new(url: &str) -> Self {
        Self {
            address: TextInput::with_value(url).with_placeholder("Enter URL..."),
            current_url: url.to_string(),
            go_button: Rect::ZERO,
        }
    }

    pub fn address(&self) -> &str {
        self.address.value()
    }

    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Show whatever is in the address bar. Nothing is fetched.
    pub fn navigate(&mut self) {
        self.current_url = self.address.value().to_string();
        tracing::info!(url = %self.current_url, "browser navigated");
    }
}

impl Component for BrowserPanel {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let bar_style = Style::default().bg(crate::theme::surface_bg());
        let bar = Rect { height: 1, ..area };
        frame.fill(bar, " ", bar_style);
        frame.set_string(
            area.x,
            area.y,
            "◍ ",
            bar_style.fg(crate::theme::muted_fg()),
        );
        let go_width = GO_LABEL.len() as u16;
        let input_area = Rect::new(
            area.x.saturating_add(2),
            area.y,
            area.width.saturating_sub(go_width + 3),
            1,
        );
        self.address.render(frame, input_area, bar_style, ctx.focused());
        self.go_button = Rect::new(area.right().saturating_sub(go_width), area.y, go_width, 1);
        frame.set_string(
            self.go_button.x,
            area.y,
            GO_LABEL,
            Style::default()
                .bg(crate::theme::accent())
                .fg(crate::theme::header_fg()),
        );

        if area.height < 3 {
            return;
        }
        let body = Rect::new(area.x, area.y + 2, area.width, area.height - 2);
        let muted = Style::default().fg(crate::theme::muted_fg());
        let lines = vec![
            Line::from(Span::styled(
                format!("Mini-Browser: {}", self.current_url),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled("│ 🔍 Scanning page structure...", muted)),
            Line::from(Span::styled("│ 📊 Analyzing content...", muted)),
            Line::from(Span::styled("│ 🤖 Automation ready", muted)),
            Line::default(),
        ];
        let notice_top = lines.len() as u16;
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), body);
        if body.height > notice_top + 2 {
            let notice = Rect::new(
                body.x,
                body.y + notice_top,
                body.width,
                (body.height - notice_top).min(4),
            );
            frame.render_widget(
                Paragraph::new(
                    "This window shows live automation activity and page monitoring.",
                )
                .style(muted)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).border_style(muted)),
                notice,
            );
        }
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        if let Some((column, row)) = left_click(event) {
            if rect_contains(self.go_button, column, row) {
                self.navigate();
                return true;
            }
            return false;
        }
        let Some(key) = key_press(event) else {
            return false;
        };
        if is_enter(key) {
            self.navigate();
            return true;
        }
        self.address.handle_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::buffer::Buffer;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn editing_does_not_navigate_until_enter() {
        let mut panel = BrowserPanel::new("https://example.com");
        let ctx = ComponentContext::new(true);
        for _ in 0..3 {
            panel.handle_event(&key(KeyCode::Backspace), &ctx);
        }
        for ch in "org".chars() {
            panel.handle_event(&key(KeyCode::Char(ch)), &ctx);
        }
        assert_eq!(panel.address(), "https://example.org");
        assert_eq!(panel.current_url(), "https://example.com");
        panel.handle_event(&key(KeyCode::Enter), &ctx);
        assert_eq!(panel.current_url(), "https://example.org");
    }

    #[test]
    fn body_shows_current_url() {
        let mut panel = BrowserPanel::new("https://example.com");
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        {
            let mut frame = UiFrame::from_parts(area, &mut buf);
            panel.render(&mut frame, area, &ComponentContext::new(false));
        }
        let row: String = (0..area.width)
            .map(|x| buf[(x, 2)].symbol().to_string())
            .collect();
        assert!(row.starts_with("Mini-Browser: https://example.com"));
    }
}
