//! Top-centre button strip for spawning windows and opening settings.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::templates;
use crate::ui::{UiFrame, rect_contains};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    /// Spawn the named template.
    Spawn(&'static str),
    Settings,
}

#[derive(Debug, Clone)]
struct ToolbarButton {
    label: &'static str,
    action: ToolbarAction,
    rect: Rect,
}

#[derive(Debug, Clone)]
pub struct Toolbar {
    buttons: Vec<ToolbarButton>,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolbar {
    pub fn new() -> Self {
        let button = |label, action| ToolbarButton {
            label,
            action,
            rect: Rect::ZERO,
        };
        Self {
            buttons: vec![
                button(" + Browser ", ToolbarAction::Spawn(templates::BROWSER)),
                button(" + Terminal ", ToolbarAction::Spawn(templates::TERMINAL)),
                button(" ⚙ ", ToolbarAction::Settings),
            ],
        }
    }

    fn total_width(&self) -> u16 {
        let labels: usize = self.buttons.iter().map(|b| b.label.chars().count()).sum();
        (labels + self.buttons.len().saturating_sub(1)) as u16
    }

    /// Position the buttons centred on the first row of `area`.
    pub fn layout(&mut self, area: Rect) {
        let mut x = area.x + area.width.saturating_sub(self.total_width()) / 2;
        for button in &mut self.buttons {
            let width = button.label.chars().count() as u16;
            button.rect = Rect::new(x, area.y, width, 1).intersection(area);
            x = x.saturating_add(width + 1);
        }
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.layout(area);
        for button in &self.buttons {
            let style = match button.action {
                ToolbarAction::Spawn(templates::TERMINAL) => Style::default()
                    .bg(crate::theme::accent_alt())
                    .fg(crate::theme::header_fg())
                    .add_modifier(Modifier::BOLD),
                ToolbarAction::Spawn(_) => Style::default()
                    .bg(crate::theme::accent())
                    .fg(crate::theme::header_fg())
                    .add_modifier(Modifier::BOLD),
                ToolbarAction::Settings => Style::default()
                    .bg(crate::theme::chip_bg())
                    .fg(crate::theme::chip_fg()),
            };
            frame.set_string(button.rect.x, button.rect.y, button.label, style);
        }
    }

    /// The button under `(column, row)`, as of the last layout.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<ToolbarAction> {
        self.buttons
            .iter()
            .find(|b| rect_contains(b.rect, column, row))
            .map(|b| b.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_are_centred_and_hit_testable() {
        let mut toolbar = Toolbar::new();
        let area = Rect::new(0, 0, 80, 1);
        toolbar.layout(area);
        let width = toolbar.total_width();
        let start = (80 - width) / 2;
        assert_eq!(
            toolbar.hit_test(start, 0),
            Some(ToolbarAction::Spawn(templates::BROWSER))
        );
        assert_eq!(
            toolbar.hit_test(start + width - 1, 0),
            Some(ToolbarAction::Settings)
        );
        assert_eq!(toolbar.hit_test(0, 0), None);
        assert_eq!(toolbar.hit_test(start, 1), None);
    }

    #[test]
    fn gap_between_buttons_is_not_a_hit() {
        let mut toolbar = Toolbar::new();
        toolbar.layout(Rect::new(0, 0, 80, 1));
        let start = (80 - toolbar.total_width()) / 2;
        let gap = start + " + Browser ".chars().count() as u16;
        assert_eq!(toolbar.hit_test(gap, 0), None);
        assert_eq!(
            toolbar.hit_test(gap + 1, 0),
            Some(ToolbarAction::Spawn(templates::TERMINAL))
        );
    }
}
