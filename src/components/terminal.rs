//! A toy terminal. It echoes input and answers a handful of built-in
//! commands; it never starts a process.

use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::{Component, ComponentContext, TextInput, is_enter, key_press};
use crate::ui::UiFrame;

const PROMPT: &str = "$ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub text: String,
}

impl TerminalLine {
    fn input(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Input,
            text: text.into(),
        }
    }

    fn output(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Output,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TerminalPanel {
    history: Vec<TerminalLine>,
    input: TextInput,
}

impl Default for TerminalPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalPanel {
    pub fn new() -> Self {
        Self {
            history: vec![
                TerminalLine::output("Ptahhotep Terminal v1.0.0"),
                TerminalLine::output("Type \"help\" for available commands"),
            ],
            input: TextInput::new().with_placeholder("Enter command..."),
        }
    }

    pub fn history(&self) -> &[TerminalLine] {
        &self.history
    }

    pub fn input(&self) -> &str {
        self.input.value()
    }

    /// Run `line` as if it had been typed and submitted.
    pub fn execute(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        self.history.push(TerminalLine::input(format!("{PROMPT}{line}")));
        if let Err(err) = shell_words::split(line) {
            self.history.push(TerminalLine::output(format!("{line}: {err}")));
            return;
        }
        // Commands take no arguments; only the exact word is recognised.
        let reply = match line {
            "help" => "Available commands: help, clear, status, version".to_string(),
            "clear" => {
                self.history.clear();
                return;
            }
            "status" => "System: Online | Automations: 3 active | Domains: 4 indexed".to_string(),
            "version" => "Ptahhotep v1.0.0 - Automation & Aggregation Platform".to_string(),
            _ => format!("Command not found: {line}"),
        };
        tracing::debug!(command = %line, "terminal command");
        self.history.push(TerminalLine::output(reply));
    }
}

impl Component for TerminalPanel {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let base = Style::default().bg(ratatui::style::Color::Black);
        frame.fill(area, " ", base);

        // History fills everything above the prompt row, newest at the bottom.
        let history_height = area.height.saturating_sub(1) as usize;
        let skip = self.history.len().saturating_sub(history_height);
        let lines: Vec<Line> = self
            .history
            .iter()
            .skip(skip)
            .map(|line| {
                let fg = match line.kind {
                    LineKind::Input => crate::theme::header_fg(),
                    LineKind::Output => crate::theme::terminal_fg(),
                };
                Line::from(Span::styled(line.text.clone(), base.fg(fg)))
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines),
            Rect {
                height: history_height as u16,
                ..area
            },
        );

        let prompt_y = area.bottom().saturating_sub(1);
        let prompt_style = base.fg(crate::theme::terminal_fg());
        frame.set_string(area.x, prompt_y, PROMPT, prompt_style);
        let prompt_width = PROMPT.len() as u16;
        let input_area = Rect::new(
            area.x.saturating_add(prompt_width),
            prompt_y,
            area.width.saturating_sub(prompt_width),
            1,
        );
        self.input
            .render(frame, input_area, base.fg(crate::theme::header_fg()), ctx.focused());
    }

    fn handle_event(&mut self, event: &Event, _ctx: &ComponentContext) -> bool {
        let Some(key) = key_press(event) else {
            return false;
        };
        if is_enter(key) {
            let line = self.input.take();
            self.execute(&line);
            return true;
        }
        self.input.handle_key(key)
    }
}
