use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;

use crate::ui::UiFrame;

pub mod aggregator;
pub mod automations;
pub mod browser;
pub mod help_overlay;
pub mod notes;
pub mod status_bar;
pub mod terminal;
pub mod text_input;
pub mod toolbar;

pub use aggregator::{AggregatorPanel, CrawlResult, CrawlStatus};
pub use automations::{Automation, AutomationStatus, AutomationsPanel};
pub use browser::BrowserPanel;
pub use help_overlay::HelpOverlay;
pub use notes::NotesPanel;
pub use status_bar::StatusBar;
pub use terminal::{LineKind, TerminalLine, TerminalPanel};
pub use text_input::TextInput;
pub use toolbar::{Toolbar, ToolbarAction};

pub use crate::component_context::ComponentContext;

/// Window content. The workspace hands each panel the cell area inside its
/// window and forwards input while the window is active.
pub trait Component {
    fn render(&mut self, frame: &mut UiFrame<'_>, area: Rect, ctx: &ComponentContext);

    fn handle_event(&mut self, _event: &Event, _ctx: &ComponentContext) -> bool {
        false
    }
}

/// Key presses only; repeats count, releases do not.
pub(crate) fn key_press(event: &Event) -> Option<&KeyEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(key),
        _ => None,
    }
}

/// Left-button press position, if `event` is one.
pub(crate) fn left_click(event: &Event) -> Option<(u16, u16)> {
    match event {
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            Some((mouse.column, mouse.row))
        }
        _ => None,
    }
}

pub(crate) fn is_enter(key: &KeyEvent) -> bool {
    key.code == KeyCode::Enter
}
