//! Chainer: a mock list of browser automations. Nothing runs; the entries
//! and their progress are fixed values.

use crossterm::event::{Event, KeyCode};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{LineGauge, Paragraph};

use super::{Component, ComponentContext, is_enter, key_press, left_click};
use crate::ui::{UiFrame, rect_contains};

const BUTTON_LABEL: &str = "[ + New Automation ]";
/// Rows per entry: name/status, url, progress, spacer.
const ENTRY_ROWS: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationStatus {
    Running,
    Paused,
    Idle,
}

impl AutomationStatus {
    pub fn label(self) -> &'static str {
        match self {
            AutomationStatus::Running => "running",
            AutomationStatus::Paused => "paused",
            AutomationStatus::Idle => "idle",
        }
    }

    fn style(self) -> Style {
        let bg = match self {
            AutomationStatus::Running => crate::theme::success(),
            AutomationStatus::Paused => crate::theme::warning(),
            AutomationStatus::Idle => crate::theme::idle(),
        };
        Style::default().bg(bg).fg(ratatui::style::Color::Black)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automation {
    pub id: usize,
    pub name: String,
    pub status: AutomationStatus,
    pub url: String,
    /// Percent, `0..=100`.
    pub progress: u8,
}

#[derive(Debug)]
pub struct AutomationsPanel {
    automations: Vec<Automation>,
    selected: usize,
    offset: usize,
    button: Rect,
}

impl Default for AutomationsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl AutomationsPanel {
    pub fn new() -> Self {
        let seed = [
            ("Web Scraper", AutomationStatus::Running, "example.com", 75),
            ("Form Filler", AutomationStatus::Paused, "forms.io", 40),
            ("Data Extractor", AutomationStatus::Running, "data.site", 90),
        ];
        let automations = seed
            .into_iter()
            .enumerate()
            .map(|(idx, (name, status, url, progress))| Automation {
                id: idx + 1,
                name: name.to_string(),
                status,
                url: url.to_string(),
                progress,
            })
            .collect();
        Self {
            automations,
            selected: 0,
            offset: 0,
            button: Rect::ZERO,
        }
    }

    pub fn automations(&self) -> &[Automation] {
        &self.automations
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Append a fresh idle automation and select it.
    pub fn add_automation(&mut self) {
        let n = self.automations.len() + 1;
        self.automations.push(Automation {
            id: n,
            name: format!("Automation {n}"),
            status: AutomationStatus::Idle,
            url: "new-site.com".to_string(),
            progress: 0,
        });
        self.selected = self.automations.len() - 1;
        tracing::info!(automation = n, "added automation");
    }

    fn bump_selection(&mut self, delta: isize) {
        if self.automations.is_empty() {
            self.selected = 0;
            return;
        }
        if delta.is_negative() {
            self.selected = self.selected.saturating_sub(delta.unsigned_abs());
        } else {
            self.selected = (self.selected + delta as usize).min(self.automations.len() - 1);
        }
    }

    fn keep_selected_in_view(&mut self, visible: usize) {
        if visible == 0 {
            self.offset = 0;
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }
}

impl Component for AutomationsPanel {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let heading = Line::from(vec![
            Span::styled(
                "Active Automations",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("{} running", self.automations.len()),
                Style::default().fg(crate::theme::accent()),
            ),
        ]);
        frame.render_widget(Paragraph::new(heading), Rect { height: 1, ..area });

        let list_top = area.y.saturating_add(2);
        let button_y = area.bottom().saturating_sub(1);
        let list_rows = button_y.saturating_sub(list_top);
        let visible = (list_rows / ENTRY_ROWS) as usize;
        self.keep_selected_in_view(visible);

        for (slot, (idx, auto)) in self
            .automations
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(visible)
            .enumerate()
        {
            let y = list_top + slot as u16 * ENTRY_ROWS;
            let name_style = if idx == self.selected && ctx.focused() {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let badge = format!(" {} ", auto.status.label());
            let name_row = Rect::new(area.x, y, area.width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(auto.name.clone(), name_style)),
                name_row,
            );
            let badge_x = area
                .right()
                .saturating_sub(badge.chars().count() as u16);
            frame.set_string(badge_x, y, &badge, auto.status.style());
            frame.set_string(
                area.x,
                y + 1,
                &format!("◍ {}", auto.url),
                Style::default().fg(crate::theme::muted_fg()),
            );
            let gauge = LineGauge::default()
                .filled_style(Style::default().fg(crate::theme::accent()))
                .unfilled_style(Style::default().fg(crate::theme::idle()))
                .ratio(auto.progress.min(100) as f64 / 100.0);
            frame.render_widget(gauge, Rect::new(area.x, y + 2, area.width, 1));
        }

        if button_y > area.y {
            let label_width = BUTTON_LABEL.chars().count() as u16;
            let x = area.x + area.width.saturating_sub(label_width) / 2;
            self.button = Rect::new(x, button_y, label_width.min(area.width), 1);
            frame.set_string(
                x,
                button_y,
                BUTTON_LABEL,
                Style::default()
                    .bg(crate::theme::header_active_bg())
                    .fg(crate::theme::header_fg()),
            );
        }
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        if let Some((column, row)) = left_click(event) {
            if rect_contains(self.button, column, row) {
                self.add_automation();
                return true;
            }
            return false;
        }
        let Some(key) = key_press(event) else {
            return false;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.bump_selection(-1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.bump_selection(1);
                true
            }
            KeyCode::Char('n') => {
                self.add_automation();
                true
            }
            _ if is_enter(key) => {
                self.add_automation();
                true
            }
            _ => false,
        }
    }
}
