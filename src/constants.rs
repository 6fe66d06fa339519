//! Shared crate-wide constants.
//!
//! Window geometry is expressed in logical pixels. The terminal view divides
//! by [`crate::ui::CellMetrics`] to find the cells a window covers.

/// Smallest width, in pixels, a window can be resized to.
pub const MIN_WINDOW_WIDTH: i32 = 300;

/// Smallest height, in pixels, a window can be resized to.
pub const MIN_WINDOW_HEIGHT: i32 = 200;

/// Height of the window header (title, icon and controls), in pixels.
///
/// The content region of a window is `size.height - HEADER_HEIGHT` pixels
/// tall; a minimized window shows only this strip.
pub const HEADER_HEIGHT: i32 = 48;

/// Base offset of the spawn cascade. A window receiving id `n` is placed at
/// `SPAWN_ORIGIN + n * SPAWN_STEP` on both axes.
pub const SPAWN_ORIGIN: i32 = 100;

/// Per-window step of the spawn cascade.
pub const SPAWN_STEP: i32 = 20;

/// Default pixel width of one terminal column.
pub const DEFAULT_CELL_WIDTH: u16 = 8;

/// Default pixel height of one terminal row.
pub const DEFAULT_CELL_HEIGHT: u16 = 16;
