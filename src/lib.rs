pub mod component_context;
pub mod components;
pub mod config;
pub mod constants;
pub mod drivers;
pub mod event_loop;
pub mod keybindings;
pub mod templates;
pub mod theme;
pub mod tracing_sub;
pub mod ui;
pub mod window;
pub mod workspace;

pub use workspace::Workspace;
