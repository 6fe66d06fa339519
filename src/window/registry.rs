//! Ordered collection of open windows.
//!
//! Every mutator is a silent no-op for ids that are not (or no longer)
//! registered: a close can race a drag update that is still in flight, and
//! neither side should have to care.

use super::{IconTag, Point, Size, WindowId};
use crate::templates::WindowTemplate;

/// One floating window: identity, geometry and display state, plus the
/// caller's opaque content handle.
#[derive(Debug)]
pub struct WindowRecord<C> {
    id: WindowId,
    title: String,
    icon: IconTag,
    content: C,
    position: Point,
    size: Size,
    minimized: bool,
}

impl<C> WindowRecord<C> {
    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> IconTag {
        self.icon
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn minimized(&self) -> bool {
        self.minimized
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Give the content handle back to the caller.
    pub fn into_content(self) -> C {
        self.content
    }
}

#[derive(Debug)]
pub struct WindowRegistry<C> {
    windows: Vec<WindowRecord<C>>,
    active: Option<WindowId>,
    next_id: u64,
}

impl<C> Default for WindowRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> WindowRegistry<C> {
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            active: None,
            next_id: 1,
        }
    }

    /// Instantiate `template` at `position`, append it and make it active.
    pub fn add(&mut self, template: &WindowTemplate<C>, position: Point) -> WindowId {
        let id = WindowId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        let record = WindowRecord {
            id,
            title: template.title.clone(),
            icon: template.icon,
            content: (template.factory)(),
            position: position.clamped(),
            size: template.default_size.clamped(),
            minimized: false,
        };
        tracing::debug!(window_id = %id, title = %record.title, "opened window");
        self.windows.push(record);
        self.active = Some(id);
        id
    }

    /// Remove `id`, handing its record (and content) back. The active slot
    /// is cleared when it pointed at the removed window.
    pub fn remove(&mut self, id: WindowId) -> Option<WindowRecord<C>> {
        let idx = self.index_of(id)?;
        let record = self.windows.remove(idx);
        if self.active == Some(id) {
            self.active = None;
        }
        tracing::debug!(window_id = %id, "closed window");
        Some(record)
    }

    pub fn set_position(&mut self, id: WindowId, position: Point) {
        if let Some(record) = self.get_mut(id) {
            record.position = position.clamped();
        }
    }

    pub fn set_size(&mut self, id: WindowId, size: Size) {
        if let Some(record) = self.get_mut(id) {
            record.size = size.clamped();
        }
    }

    /// Mark `id` active, demoting the previous one. The collection order is
    /// left untouched.
    pub fn set_active(&mut self, id: WindowId) {
        if self.index_of(id).is_some() && self.active != Some(id) {
            tracing::trace!(window_id = %id, "activated window");
            self.active = Some(id);
        }
    }

    pub fn toggle_minimized(&mut self, id: WindowId) {
        if let Some(record) = self.get_mut(id) {
            record.minimized = !record.minimized;
            tracing::debug!(window_id = %id, minimized = record.minimized, "toggled minimize");
        }
    }

    /// Records in insertion order.
    pub fn list(&self) -> &[WindowRecord<C>] {
        &self.windows
    }

    /// Records in paint order: inactive windows in insertion order, then the
    /// active window on top.
    pub fn z_ordered(&self) -> Vec<&WindowRecord<C>> {
        let mut ordered: Vec<&WindowRecord<C>> = self
            .windows
            .iter()
            .filter(|record| Some(record.id) != self.active)
            .collect();
        if let Some(active) = self.active.and_then(|id| self.get(id)) {
            ordered.push(active);
        }
        ordered
    }

    /// Ids in paint order, for callers that need mutable access per window.
    pub fn z_ordered_ids(&self) -> Vec<WindowId> {
        self.z_ordered().into_iter().map(|record| record.id).collect()
    }

    pub fn get(&self, id: WindowId) -> Option<&WindowRecord<C>> {
        self.windows.iter().find(|record| record.id == id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord<C>> {
        self.windows.iter_mut().find(|record| record.id == id)
    }

    pub fn active(&self) -> Option<WindowId> {
        self.active
    }

    pub fn is_active(&self, id: WindowId) -> bool {
        self.active == Some(id)
    }

    /// The id the next `add` will hand out.
    pub fn next_id(&self) -> WindowId {
        WindowId::new(self.next_id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Activate the window after (or before) the active one in insertion
    /// order, wrapping around.
    pub fn cycle_active(&mut self, forward: bool) {
        if self.windows.is_empty() {
            return;
        }
        let len = self.windows.len() as isize;
        let next = match self.active.and_then(|id| self.index_of(id)) {
            Some(idx) => {
                let step = if forward { 1 } else { -1 };
                (idx as isize + step).rem_euclid(len) as usize
            }
            None if forward => 0,
            None => self.windows.len() - 1,
        };
        let id = self.windows[next].id;
        self.set_active(id);
    }

    fn index_of(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|record| record.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(width: i32, height: i32) -> WindowTemplate<&'static str> {
        WindowTemplate {
            title: "Scratch".to_string(),
            icon: IconTag::FileText,
            default_size: Size::new(width, height),
            factory: || "content",
        }
    }

    #[test]
    fn add_activates_and_appends() {
        let mut reg = WindowRegistry::new();
        let a = reg.add(&template(400, 450), Point::new(50, 100));
        let b = reg.add(&template(400, 450), Point::new(480, 100));
        assert_eq!(reg.active(), Some(b));
        let ids: Vec<_> = reg.list().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn add_clamps_template_geometry() {
        let mut reg = WindowRegistry::new();
        let id = reg.add(&template(10, 10), Point::new(-40, 5));
        let record = reg.get(id).unwrap();
        assert_eq!(record.size(), Size::new(300, 200));
        assert_eq!(record.position(), Point::new(0, 5));
    }

    #[test]
    fn ids_are_never_reused_after_removal() {
        let mut reg = WindowRegistry::new();
        let a = reg.add(&template(400, 400), Point::default());
        reg.remove(a);
        let b = reg.add(&template(400, 400), Point::default());
        assert_ne!(a, b);
        assert_eq!(b.get(), a.get() + 1);
    }

    #[test]
    fn remove_returns_content_and_clears_active() {
        let mut reg = WindowRegistry::new();
        let id = reg.add(&template(400, 400), Point::default());
        let record = reg.remove(id).expect("record");
        assert_eq!(record.into_content(), "content");
        assert_eq!(reg.active(), None);
        assert!(reg.remove(id).is_none());
    }

    #[test]
    fn set_active_keeps_collection_order() {
        let mut reg = WindowRegistry::new();
        let a = reg.add(&template(400, 400), Point::default());
        let b = reg.add(&template(400, 400), Point::default());
        reg.set_active(a);
        let ids: Vec<_> = reg.list().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(reg.z_ordered_ids(), vec![b, a]);
    }

    #[test]
    fn cycle_active_wraps() {
        let mut reg = WindowRegistry::new();
        let a = reg.add(&template(400, 400), Point::default());
        let b = reg.add(&template(400, 400), Point::default());
        let c = reg.add(&template(400, 400), Point::default());
        reg.cycle_active(true);
        assert_eq!(reg.active(), Some(a));
        reg.cycle_active(false);
        assert_eq!(reg.active(), Some(c));
        reg.cycle_active(false);
        assert_eq!(reg.active(), Some(b));
    }
}
