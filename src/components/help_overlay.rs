use crossterm::event::{Event, KeyCode};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Row, Table};

use crate::keybindings::KeyBindings;
use crate::ui::UiFrame;

const WIDTH: u16 = 60;

/// Centered dialog listing the global key bindings and pointer gestures.
#[derive(Debug, Clone, Default)]
pub struct HelpOverlay {
    visible: bool,
}

impl HelpOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        tracing::debug!(visible, "help overlay");
    }

    pub fn toggle(&mut self) {
        self.set_visible(!self.visible);
    }

    /// Clamp the dialog to `area`, centred.
    pub fn rect_for(&self, area: Rect, rows: u16) -> Rect {
        let width = area.width.min(WIDTH).max(1);
        let height = area.height.min(rows + 2).max(1);
        let x = area.x.saturating_add(area.width.saturating_sub(width) / 2);
        let y = area
            .y
            .saturating_add(area.height.saturating_sub(height) / 2);
        Rect::new(x, y, width, height)
    }

    pub fn render(&self, frame: &mut UiFrame<'_>, area: Rect, bindings: &KeyBindings) {
        if !self.visible || area.width == 0 || area.height == 0 {
            return;
        }
        let mut rows: Vec<Row> = bindings
            .help_entries()
            .into_iter()
            .map(|(action, combos)| Row::new(vec![combos.join(", "), action.to_string()]))
            .collect();
        rows.push(Row::new(vec![
            "Drag header".to_string(),
            "Move window".to_string(),
        ]));
        rows.push(Row::new(vec![
            "Drag ◢".to_string(),
            "Resize window".to_string(),
        ]));
        let rect = self.rect_for(area, rows.len() as u16 + 1);
        frame.render_widget(Clear, rect);
        let block = Block::default()
            .title(format!(
                " {} {} ",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(crate::theme::accent()))
            .style(Style::default().bg(crate::theme::surface_bg()));
        let table = Table::new(rows, [Constraint::Length(16), Constraint::Min(10)])
            .header(
                Row::new(["Keys", "Action"]).style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(block);
        frame.render_widget(table, rect);
    }

    /// While visible the overlay is modal for keys; Esc, Enter and `q`
    /// close it.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if !self.visible {
            return false;
        }
        match event {
            Event::Key(key) => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
                    self.set_visible(false);
                }
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use ratatui::buffer::Buffer;

    #[test]
    fn esc_closes_and_other_keys_are_swallowed() {
        let mut help = HelpOverlay::new();
        help.toggle();
        let a = Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        assert!(help.handle_event(&a));
        assert!(help.visible());
        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(help.handle_event(&esc));
        assert!(!help.visible());
        assert!(!help.handle_event(&esc));
    }

    #[test]
    fn rect_is_clamped_to_small_areas() {
        let help = HelpOverlay::new();
        let r = help.rect_for(Rect::new(0, 0, 20, 5), 12);
        assert_eq!(r, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn renders_binding_rows() {
        let mut help = HelpOverlay::new();
        help.set_visible(true);
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        {
            let mut frame = UiFrame::from_parts(area, &mut buf);
            help.render(&mut frame, area, &KeyBindings::default());
        }
        let dump: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(dump.contains("Alt+B"));
        assert!(dump.contains("Ctrl+Q"));
    }
}
