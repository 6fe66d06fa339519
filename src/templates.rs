//! Named window presets.
//!
//! A template says how to build a window: its title, icon, default size and
//! a factory for fresh content. The workspace looks templates up by name
//! when the toolbar (or a key binding) asks for a new window.

use std::collections::BTreeMap;

use crate::components::{
    AggregatorPanel, AutomationsPanel, BrowserPanel, Component, NotesPanel, TerminalPanel,
};
use crate::window::{IconTag, Point, Size};

pub const CHAINER: &str = "chainer";
pub const RAZOR: &str = "razor";
pub const NOTEPAD: &str = "notepad";
pub const BROWSER: &str = "browser";
pub const TERMINAL: &str = "terminal";

pub type PanelContent = Box<dyn Component>;

pub struct WindowTemplate<C> {
    pub title: String,
    pub icon: IconTag,
    pub default_size: Size,
    pub factory: fn() -> C,
}

impl<C> std::fmt::Debug for WindowTemplate<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowTemplate")
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("default_size", &self.default_size)
            .finish()
    }
}

#[derive(Debug)]
pub struct TemplateRegistry<C> {
    templates: BTreeMap<String, WindowTemplate<C>>,
}

impl<C> Default for TemplateRegistry<C> {
    fn default() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }
}

impl<C> TemplateRegistry<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, template: WindowTemplate<C>) {
        self.templates.insert(name.into(), template);
    }

    pub fn get(&self, name: &str) -> Option<&WindowTemplate<C>> {
        self.templates.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}

impl TemplateRegistry<PanelContent> {
    /// The panels shipped with the workspace.
    pub fn builtin() -> Self {
        let mut reg = Self::new();
        reg.insert(
            CHAINER,
            WindowTemplate {
                title: "Chainer Automation".to_string(),
                icon: IconTag::Bot,
                default_size: Size::new(400, 450),
                factory: automations_panel,
            },
        );
        reg.insert(
            RAZOR,
            WindowTemplate {
                title: "Razor Aggregator".to_string(),
                icon: IconTag::Globe,
                default_size: Size::new(400, 450),
                factory: aggregator_panel,
            },
        );
        reg.insert(
            NOTEPAD,
            WindowTemplate {
                title: "Collaborative Notes".to_string(),
                icon: IconTag::FileText,
                default_size: Size::new(500, 300),
                factory: notes_panel,
            },
        );
        reg.insert(
            BROWSER,
            WindowTemplate {
                title: "Mini Browser".to_string(),
                icon: IconTag::Globe,
                default_size: Size::new(450, 500),
                factory: browser_panel,
            },
        );
        reg.insert(
            TERMINAL,
            WindowTemplate {
                title: "Terminal".to_string(),
                icon: IconTag::Terminal,
                default_size: Size::new(500, 350),
                factory: terminal_panel,
            },
        );
        reg
    }
}

fn automations_panel() -> PanelContent {
    Box::new(AutomationsPanel::new())
}

fn aggregator_panel() -> PanelContent {
    Box::new(AggregatorPanel::new())
}

fn notes_panel() -> PanelContent {
    Box::new(NotesPanel::new())
}

fn browser_panel() -> PanelContent {
    Box::new(BrowserPanel::new("https://example.com"))
}

fn terminal_panel() -> PanelContent {
    Box::new(TerminalPanel::new())
}

/// Windows opened at startup, in creation order. The first one ends up
/// active once the shell re-activates it.
pub const PRESETS: [(&str, Point); 3] = [
    (CHAINER, Point::new(50, 100)),
    (RAZOR, Point::new(480, 100)),
    (NOTEPAD, Point::new(50, 580)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_contains_every_panel() {
        let reg = TemplateRegistry::builtin();
        let names: Vec<&str> = reg.names().collect();
        for name in [CHAINER, RAZOR, NOTEPAD, BROWSER, TERMINAL] {
            assert!(names.contains(&name), "missing {name}");
        }
        assert_eq!(reg.get(BROWSER).unwrap().default_size, Size::new(450, 500));
        assert!(reg.get("settings").is_none());
    }

    #[test]
    fn presets_reference_known_templates() {
        let reg = TemplateRegistry::builtin();
        for (name, _) in PRESETS {
            assert!(reg.get(name).is_some());
        }
    }
}
