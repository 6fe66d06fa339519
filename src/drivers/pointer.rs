//! Pointer normalization. Terminal mouse reports are reduced to
//! press/move/release with both the cell and the logical-pixel position, so
//! the window core never sees where the input came from.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::ui::CellMetrics;
use crate::window::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Press,
    Move,
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub column: u16,
    pub row: u16,
    /// Top-left pixel of the reported cell.
    pub position: Point,
}

impl PointerEvent {
    /// `None` for scroll wheels and presses of non-primary buttons.
    pub fn from_mouse(mouse: &MouseEvent, metrics: &CellMetrics) -> Option<Self> {
        let kind = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => PointerKind::Press,
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => PointerKind::Move,
            MouseEventKind::Up(_) => PointerKind::Release,
            _ => return None,
        };
        Some(Self {
            kind,
            column: mouse.column,
            row: mouse.row,
            position: metrics.cell_to_point(mouse.column, mouse.row),
        })
    }
}
