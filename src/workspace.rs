//! The desktop: owns the window registry and interaction controller, routes
//! input between toolbar, windows and panels, and paints everything.

use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::components::{
    ComponentContext, HelpOverlay, StatusBar, Toolbar, ToolbarAction, key_press,
};
use crate::config::WorkspaceConfig;
use crate::constants::{SPAWN_ORIGIN, SPAWN_STEP};
use crate::drivers::{PointerEvent, PointerKind};
use crate::keybindings::{Action, KeyBindings};
use crate::templates::{self, PanelContent, TemplateRegistry};
use crate::ui::{CellMetrics, UiFrame};
use crate::window::{
    InteractionController, Point, WindowChrome, WindowId, WindowIntent, WindowRegistry,
    render_window,
};

pub struct Workspace {
    registry: WindowRegistry<PanelContent>,
    interaction: InteractionController,
    templates: TemplateRegistry<PanelContent>,
    metrics: CellMetrics,
    bindings: KeyBindings,
    toolbar: Toolbar,
    branding: StatusBar,
    status: StatusBar,
    help: HelpOverlay,
    viewport: Rect,
    should_quit: bool,
}

impl Workspace {
    /// A workspace with the built-in templates, opening the preset windows
    /// unless the configuration turns them off.
    pub fn new(config: &WorkspaceConfig) -> Self {
        let mut workspace = Self::empty(TemplateRegistry::builtin(), config.metrics);
        if config.presets {
            workspace.open_presets();
        }
        workspace
    }

    pub fn empty(templates: TemplateRegistry<PanelContent>, metrics: CellMetrics) -> Self {
        let mut branding = StatusBar::new();
        branding.set_text(" ◉ Ptahhotep ");
        branding.set_style(
            Style::default()
                .bg(crate::theme::chip_bg())
                .fg(crate::theme::chip_fg())
                .add_modifier(Modifier::BOLD),
        );
        let mut status = StatusBar::new();
        status.set_style(
            Style::default()
                .bg(crate::theme::chip_bg())
                .fg(crate::theme::chip_fg()),
        );
        Self {
            registry: WindowRegistry::new(),
            interaction: InteractionController::new(),
            templates,
            metrics,
            bindings: KeyBindings::default(),
            toolbar: Toolbar::new(),
            branding,
            status,
            help: HelpOverlay::new(),
            viewport: Rect::ZERO,
            should_quit: false,
        }
    }

    fn open_presets(&mut self) {
        let mut first = None;
        for (name, position) in templates::PRESETS {
            let Some(template) = self.templates.get(name) else {
                tracing::warn!(template = name, "preset template missing");
                continue;
            };
            let id = self.registry.add(template, position);
            first.get_or_insert(id);
        }
        if let Some(id) = first {
            self.registry.set_active(id);
        }
    }

    pub fn registry(&self) -> &WindowRegistry<PanelContent> {
        &self.registry
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    pub fn help_visible(&self) -> bool {
        self.help.visible()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Terminal size in cells. Toolbar buttons are laid out against it, so
    /// set it before feeding pointer events.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
        self.toolbar.layout(Self::top_row(area));
    }

    fn top_row(area: Rect) -> Rect {
        Rect {
            height: area.height.min(1),
            ..area
        }
    }

    /// Open a window from the named template, cascading from the top-left.
    /// Unknown names are ignored.
    pub fn spawn(&mut self, name: &str) -> Option<WindowId> {
        let Some(template) = self.templates.get(name) else {
            tracing::debug!(template = name, "ignored spawn of unknown template");
            return None;
        };
        let n = self.registry.next_id().get() as i32;
        let offset = SPAWN_ORIGIN.saturating_add(n.saturating_mul(SPAWN_STEP));
        let id = self.registry.add(template, Point::new(offset, offset));
        tracing::info!(window_id = %id, template = name, "spawned window");
        Some(id)
    }

    /// Close `id`, ending any drag or resize that targets it.
    pub fn close(&mut self, id: WindowId) {
        self.interaction.cancel_for(id);
        if self.registry.remove(id).is_some() {
            tracing::info!(window_id = %id, "window closed");
        }
    }

    /// Chrome of every window, topmost first.
    fn chrome_top_down(&self) -> Vec<WindowChrome> {
        self.registry
            .z_ordered()
            .into_iter()
            .rev()
            .map(|record| WindowChrome::layout(record, &self.metrics))
            .collect()
    }

    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => match PointerEvent::from_mouse(mouse, &self.metrics) {
                Some(pointer) => self.handle_pointer(pointer, event),
                None => false,
            },
            Event::Key(_) => self.handle_key(event),
            Event::Resize(width, height) => {
                self.set_viewport(Rect::new(0, 0, *width, *height));
                true
            }
            _ => false,
        }
    }

    fn handle_pointer(&mut self, pointer: PointerEvent, event: &Event) -> bool {
        if self.interaction.captures_pointer() {
            match pointer.kind {
                PointerKind::Move => {
                    return self
                        .interaction
                        .pointer_moved(&mut self.registry, pointer.position);
                }
                PointerKind::Release => return self.interaction.release(),
                // Drag and resize are exclusive; nothing starts until the
                // running interaction is released.
                PointerKind::Press => return false,
            }
        }
        if pointer.kind != PointerKind::Press {
            return false;
        }
        if self.help.visible() {
            self.help.set_visible(false);
            return true;
        }
        let hit = self
            .chrome_top_down()
            .into_iter()
            .find_map(|chrome| {
                chrome
                    .hit_test(pointer.column, pointer.row)
                    .map(|intent| (chrome, intent))
            });
        // Windows stack above the toolbar.
        let Some((chrome, intent)) = hit else {
            let Some(action) = self.toolbar.hit_test(pointer.column, pointer.row) else {
                return false;
            };
            match action {
                ToolbarAction::Spawn(name) => {
                    self.spawn(name);
                }
                ToolbarAction::Settings => self.help.toggle(),
            }
            return true;
        };
        match intent {
            WindowIntent::DragStart(id) => {
                self.interaction
                    .begin_drag(&mut self.registry, id, pointer.position);
            }
            WindowIntent::ResizeStart(id) => {
                self.interaction
                    .begin_resize(&mut self.registry, id, pointer.position);
            }
            WindowIntent::Close(id) => self.close(id),
            WindowIntent::MinimizeToggle(id) => {
                self.registry.set_active(id);
                self.registry.toggle_minimized(id);
            }
            WindowIntent::Activate(id) => {
                self.registry.set_active(id);
                let ctx = ComponentContext::new(true).with_content_area(chrome.content_inner());
                if let Some(record) = self.registry.get_mut(id) {
                    record.content_mut().handle_event(event, &ctx);
                }
            }
        }
        true
    }

    fn handle_key(&mut self, event: &Event) -> bool {
        let Some(key) = key_press(event) else {
            return false;
        };
        let action = self.bindings.action_for_key(key);
        if self.help.visible() {
            match action {
                Some(Action::Quit) => self.should_quit = true,
                Some(Action::ToggleHelp) => self.help.toggle(),
                _ => {
                    self.help.handle_event(event);
                }
            }
            return true;
        }
        match action {
            Some(Action::Quit) => {
                self.should_quit = true;
                true
            }
            Some(Action::SpawnBrowser) => {
                self.spawn(templates::BROWSER);
                true
            }
            Some(Action::SpawnTerminal) => {
                self.spawn(templates::TERMINAL);
                true
            }
            Some(Action::CloseWindow) => {
                if let Some(id) = self.registry.active() {
                    self.close(id);
                }
                true
            }
            Some(Action::MinimizeWindow) => {
                if let Some(id) = self.registry.active() {
                    self.registry.toggle_minimized(id);
                }
                true
            }
            Some(Action::CycleNextWindow) => {
                self.registry.cycle_active(true);
                true
            }
            Some(Action::CyclePrevWindow) => {
                self.registry.cycle_active(false);
                true
            }
            Some(Action::ToggleHelp) => {
                self.help.toggle();
                true
            }
            // Esc only means something while help is open.
            Some(Action::CloseHelp) | None => self.forward_to_active(event),
        }
    }

    fn forward_to_active(&mut self, event: &Event) -> bool {
        let Some(id) = self.registry.active() else {
            return false;
        };
        let Some(record) = self.registry.get_mut(id) else {
            return false;
        };
        if record.minimized() {
            return false;
        }
        let chrome = WindowChrome::layout(record, &self.metrics);
        let ctx = ComponentContext::new(true).with_content_area(chrome.content_inner());
        record.content_mut().handle_event(event, &ctx)
    }

    pub fn status_text(&self) -> String {
        let count = self.registry.len();
        let noun = if count == 1 { "window" } else { "windows" };
        format!("● Online | {count} {noun}")
    }

    pub fn render(&mut self, frame: &mut UiFrame<'_>) {
        let area = frame.area();
        if area != self.viewport {
            self.set_viewport(area);
        }
        if area.width == 0 || area.height == 0 {
            return;
        }
        self.render_desktop(frame, area);

        let top = Self::top_row(area);
        let branding_width = self.branding.preferred_width();
        self.branding
            .render(frame, Rect::new(area.x + 1, top.y, branding_width, 1).intersection(area));
        self.toolbar.render(frame, top);

        let status = self.status_text();
        self.status.set_text(format!(" {status} "));
        let status_width = self.status.preferred_width().min(area.width);
        let status_area = Rect::new(
            area.right().saturating_sub(status_width.saturating_add(1)),
            area.bottom().saturating_sub(1),
            status_width,
            1,
        );
        self.status.render(frame, status_area);

        let active = self.registry.active();
        let metrics = self.metrics;
        for id in self.registry.z_ordered_ids() {
            let focused = active == Some(id) && !self.help.visible();
            let Some(record) = self.registry.get_mut(id) else {
                continue;
            };
            render_window(
                frame,
                record,
                &metrics,
                active == Some(id),
                |content, frame, inner| {
                    let ctx = ComponentContext::new(focused).with_content_area(inner);
                    content.render(frame, inner, &ctx);
                },
            );
        }

        self.help.render(frame, area, &self.bindings);
    }

    fn render_desktop(&self, frame: &mut UiFrame<'_>, area: Rect) {
        let bg = Style::default().bg(crate::theme::desktop_bg());
        frame.fill(area, " ", bg);
        // Faint grid every 50px, like graph paper.
        let grid = bg.fg(crate::theme::desktop_grid());
        let step_x = (50 / self.metrics.cell_width.max(1)).max(1);
        let step_y = (50 / self.metrics.cell_height.max(1)).max(1);
        for y in (area.y..area.bottom()).step_by(step_y as usize) {
            for x in (area.x..area.right()).step_by(step_x as usize) {
                frame.set_string(x, y, "·", grid);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{BROWSER, TERMINAL};

    fn workspace() -> Workspace {
        let mut ws = Workspace::new(&WorkspaceConfig::default());
        ws.set_viewport(Rect::new(0, 0, 160, 60));
        ws
    }

    #[test]
    fn presets_open_with_chainer_active() {
        let ws = workspace();
        let titles: Vec<&str> = ws.registry().list().iter().map(|r| r.title()).collect();
        assert_eq!(
            titles,
            vec!["Chainer Automation", "Razor Aggregator", "Collaborative Notes"]
        );
        assert_eq!(ws.registry().active(), Some(WindowId::new(1)));
    }

    #[test]
    fn spawn_cascades_from_next_id() {
        let mut ws = workspace();
        let id = ws.spawn(BROWSER).unwrap();
        assert_eq!(id, WindowId::new(4));
        let record = ws.registry().get(id).unwrap();
        assert_eq!(record.position(), Point::new(180, 180));
        assert_eq!(ws.registry().active(), Some(id));
        let next = ws.spawn(TERMINAL).unwrap();
        assert_eq!(ws.registry().get(next).unwrap().position(), Point::new(200, 200));
    }

    #[test]
    fn status_counts_windows() {
        let mut ws = workspace();
        assert_eq!(ws.status_text(), "● Online | 3 windows");
        ws.close(WindowId::new(1));
        ws.close(WindowId::new(2));
        assert_eq!(ws.status_text(), "● Online | 1 window");
    }

    #[test]
    fn empty_config_starts_without_windows() {
        let config = WorkspaceConfig {
            presets: false,
            ..WorkspaceConfig::default()
        };
        let mut ws = Workspace::new(&config);
        assert!(ws.registry().is_empty());
        let id = ws.spawn(TERMINAL).unwrap();
        assert_eq!(id, WindowId::new(1));
        assert_eq!(ws.registry().get(id).unwrap().position(), Point::new(120, 120));
    }
}
