//! Collaborative Notes: a plain multi-line editor. Contents live only as
//! long as the window does.

use crossterm::event::{Event, KeyCode, KeyModifiers};
use indoc::indoc;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{Component, ComponentContext, key_press};
use crate::ui::UiFrame;

const WELCOME: &str = indoc! {"
    # Welcome to Ptahhotep!

    ✨ This is your collaborative workspace
    📝 Share notes with your team
    🔗 Link to automations
    ⚡ Build workflows

    ## Quick Start:
    1. Create automation workflows in Chainer
    2. Aggregate web data with Razor
    3. Add mini-browsers for monitoring
    4. Collaborate in real-time

    ---
    Start typing your notes below...
"};

#[derive(Debug, Clone)]
pub struct NotesPanel {
    lines: Vec<String>,
    /// Cursor as (line, char column).
    cursor: (usize, usize),
    scroll: usize,
}

impl Default for NotesPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesPanel {
    pub fn new() -> Self {
        Self::with_text(WELCOME)
    }

    pub fn with_text(text: &str) -> Self {
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            cursor: (0, 0),
            scroll: 0,
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |l| l.chars().count())
    }

    fn byte_index(line: &str, col: usize) -> usize {
        line.char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    fn insert_char(&mut self, ch: char) {
        let (row, col) = self.cursor;
        let line = &mut self.lines[row];
        let idx = Self::byte_index(line, col);
        line.insert(idx, ch);
        self.cursor.1 += 1;
    }

    fn newline(&mut self) {
        let (row, col) = self.cursor;
        let idx = Self::byte_index(&self.lines[row], col);
        let rest = self.lines[row].split_off(idx);
        self.lines.insert(row + 1, rest);
        self.cursor = (row + 1, 0);
    }

    fn backspace(&mut self) {
        let (row, col) = self.cursor;
        if col > 0 {
            let line = &mut self.lines[row];
            let idx = Self::byte_index(line, col - 1);
            line.remove(idx);
            self.cursor.1 -= 1;
        } else if row > 0 {
            let current = self.lines.remove(row);
            let prev_len = self.line_len(row - 1);
            self.lines[row - 1].push_str(&current);
            self.cursor = (row - 1, prev_len);
        }
    }

    fn delete(&mut self) {
        let (row, col) = self.cursor;
        if col < self.line_len(row) {
            let line = &mut self.lines[row];
            let idx = Self::byte_index(line, col);
            line.remove(idx);
        } else if row + 1 < self.lines.len() {
            let next = self.lines.remove(row + 1);
            self.lines[row].push_str(&next);
        }
    }

    fn move_vertical(&mut self, down: bool) {
        let (row, col) = self.cursor;
        let target = if down {
            (row + 1).min(self.lines.len() - 1)
        } else {
            row.saturating_sub(1)
        };
        self.cursor = (target, col.min(self.line_len(target)));
    }

    fn move_horizontal(&mut self, right: bool) {
        let (row, col) = self.cursor;
        if right {
            if col < self.line_len(row) {
                self.cursor.1 += 1;
            } else if row + 1 < self.lines.len() {
                self.cursor = (row + 1, 0);
            }
        } else if col > 0 {
            self.cursor.1 -= 1;
        } else if row > 0 {
            self.cursor = (row - 1, self.line_len(row - 1));
        }
    }

    fn keep_cursor_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        let row = self.cursor.0;
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + height {
            self.scroll = row + 1 - height;
        }
    }
}

impl Component for NotesPanel {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let base = Style::default().bg(crate::theme::surface_bg());
        frame.fill(area, " ", base);
        self.keep_cursor_visible(area.height as usize);

        let (cursor_row, cursor_col) = self.cursor;
        let lines: Vec<Line> = self
            .lines
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(area.height as usize)
            .map(|(idx, text)| {
                let style = if text.starts_with('#') {
                    base.fg(crate::theme::accent()).add_modifier(Modifier::BOLD)
                } else {
                    base
                };
                if idx != cursor_row || !ctx.focused() {
                    return Line::from(Span::styled(text.clone(), style));
                }
                let chars: Vec<char> = text.chars().collect();
                let before: String = chars[..cursor_col].iter().collect();
                let at = chars
                    .get(cursor_col)
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| " ".to_string());
                let after: String = chars.iter().skip(cursor_col + 1).collect();
                Line::from(vec![
                    Span::styled(before, style),
                    Span::styled(at, style.add_modifier(Modifier::REVERSED)),
                    Span::styled(after, style),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        let Some(key) = key_press(event) else {
            return false;
        };
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return false;
        }
        match key.code {
            KeyCode::Char(ch) => self.insert_char(ch),
            KeyCode::Enter => self.newline(),
            KeyCode::Tab => {
                for _ in 0..4 {
                    self.insert_char(' ');
                }
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Up => self.move_vertical(false),
            KeyCode::Down => self.move_vertical(true),
            KeyCode::Left => self.move_horizontal(false),
            KeyCode::Right => self.move_horizontal(true),
            KeyCode::Home => self.cursor.1 = 0,
            KeyCode::End => self.cursor.1 = self.line_len(self.cursor.0),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn send(panel: &mut NotesPanel, code: KeyCode) {
        panel.handle_event(
            &Event::Key(KeyEvent::new(code, KeyModifiers::NONE)),
            &ComponentContext::new(true),
        );
    }

    #[test]
    fn seeded_with_welcome_text() {
        let panel = NotesPanel::new();
        let text = panel.text();
        assert!(text.starts_with("# Welcome to Ptahhotep!"));
        assert!(text.contains("2. Aggregate web data with Razor"));
    }

    #[test]
    fn enter_splits_and_backspace_joins() {
        let mut panel = NotesPanel::with_text("abcd");
        send(&mut panel, KeyCode::Right);
        send(&mut panel, KeyCode::Right);
        send(&mut panel, KeyCode::Enter);
        assert_eq!(panel.text(), "ab\ncd");
        assert_eq!(panel.cursor(), (1, 0));
        send(&mut panel, KeyCode::Backspace);
        assert_eq!(panel.text(), "abcd");
        assert_eq!(panel.cursor(), (0, 2));
    }

    #[test]
    fn vertical_moves_clamp_column() {
        let mut panel = NotesPanel::with_text("long line\nab");
        send(&mut panel, KeyCode::End);
        send(&mut panel, KeyCode::Down);
        assert_eq!(panel.cursor(), (1, 2));
        send(&mut panel, KeyCode::Down);
        assert_eq!(panel.cursor(), (1, 2));
    }

    #[test]
    fn delete_at_line_end_pulls_next_line() {
        let mut panel = NotesPanel::with_text("a\nb");
        send(&mut panel, KeyCode::End);
        send(&mut panel, KeyCode::Delete);
        assert_eq!(panel.text(), "ab");
    }

    #[test]
    fn control_keys_pass_through() {
        let mut panel = NotesPanel::with_text("");
        let handled = panel.handle_event(
            &Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)),
            &ComponentContext::new(true),
        );
        assert!(!handled);
        assert_eq!(panel.text(), "");
    }
}
