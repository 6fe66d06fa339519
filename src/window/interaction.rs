//! Pointer-driven drag and resize.
//!
//! A single controller owns the only interaction slot for the whole
//! workspace, so a drag and a resize can never run at the same time. While
//! the slot is occupied the shell feeds it every pointer move and release,
//! wherever the pointer happens to be.

use super::registry::WindowRegistry;
use super::{Point, Size, WindowId};

#[derive(Debug, Clone, Copy)]
pub struct HeaderDrag {
    pub id: WindowId,
    pub start_pointer: Point,
    pub start_position: Point,
}

#[derive(Debug, Clone, Copy)]
pub struct ResizeDrag {
    pub id: WindowId,
    pub start_pointer: Point,
    pub start_size: Size,
}

#[derive(Debug, Clone, Copy, Default)]
pub enum Interaction {
    #[default]
    Idle,
    Dragging(HeaderDrag),
    Resizing(ResizeDrag),
}

impl Interaction {
    pub fn target(&self) -> Option<WindowId> {
        match self {
            Interaction::Idle => None,
            Interaction::Dragging(drag) => Some(drag.id),
            Interaction::Resizing(drag) => Some(drag.id),
        }
    }
}

#[derive(Debug, Default)]
pub struct InteractionController {
    state: Interaction,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Interaction {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, Interaction::Idle)
    }

    /// Whether pointer moves and releases should bypass hit testing.
    pub fn captures_pointer(&self) -> bool {
        !self.is_idle()
    }

    /// Start moving `id` from a header press at `pointer`. Returns `false`
    /// (and changes nothing) if another interaction is running or the
    /// window is gone.
    pub fn begin_drag<C>(
        &mut self,
        registry: &mut WindowRegistry<C>,
        id: WindowId,
        pointer: Point,
    ) -> bool {
        if !self.is_idle() {
            return false;
        }
        let Some(record) = registry.get(id) else {
            return false;
        };
        let start_position = record.position();
        registry.set_active(id);
        self.state = Interaction::Dragging(HeaderDrag {
            id,
            start_pointer: pointer,
            start_position,
        });
        tracing::debug!(window_id = %id, x = pointer.x, y = pointer.y, "drag started");
        true
    }

    /// Start resizing `id` from a grip press at `pointer`.
    pub fn begin_resize<C>(
        &mut self,
        registry: &mut WindowRegistry<C>,
        id: WindowId,
        pointer: Point,
    ) -> bool {
        if !self.is_idle() {
            return false;
        }
        let Some(record) = registry.get(id) else {
            return false;
        };
        let start_size = record.size();
        registry.set_active(id);
        self.state = Interaction::Resizing(ResizeDrag {
            id,
            start_pointer: pointer,
            start_size,
        });
        tracing::debug!(window_id = %id, x = pointer.x, y = pointer.y, "resize started");
        true
    }

    /// Apply the pointer's offset from the interaction start. Values are
    /// handed to the registry unclamped; it owns the clamps.
    pub fn pointer_moved<C>(&mut self, registry: &mut WindowRegistry<C>, pointer: Point) -> bool {
        match self.state {
            Interaction::Idle => false,
            Interaction::Dragging(drag) => {
                let delta = pointer - drag.start_pointer;
                registry.set_position(drag.id, drag.start_position + delta);
                tracing::trace!(window_id = %drag.id, dx = delta.x, dy = delta.y, "drag moved");
                true
            }
            Interaction::Resizing(drag) => {
                let delta = pointer - drag.start_pointer;
                registry.set_size(drag.id, drag.start_size.offset_by(delta));
                tracing::trace!(window_id = %drag.id, dx = delta.x, dy = delta.y, "resize moved");
                true
            }
        }
    }

    /// End whatever interaction is running. Returns whether one was.
    pub fn release(&mut self) -> bool {
        let previous = std::mem::take(&mut self.state);
        match previous {
            Interaction::Idle => false,
            Interaction::Dragging(drag) => {
                tracing::debug!(window_id = %drag.id, "drag released");
                true
            }
            Interaction::Resizing(drag) => {
                tracing::debug!(window_id = %drag.id, "resize released");
                true
            }
        }
    }

    /// Drop the interaction if it targets `id`, e.g. when that window is
    /// closed before the pointer is released.
    pub fn cancel_for(&mut self, id: WindowId) -> bool {
        if self.state.target() == Some(id) {
            tracing::debug!(window_id = %id, "interaction cancelled");
            self.state = Interaction::Idle;
            true
        } else {
            false
        }
    }
}
