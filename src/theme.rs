use std::sync::OnceLock;

use ratatui::style::Color;

// Centralized theme colors. Each helper carries a truecolor value and a
// named fallback for terminals that only speak the 16-color palette.

pub const ACCENT_RGB: (u8, u8, u8) = (59, 130, 246);
pub const ACCENT_ALT_RGB: (u8, u8, u8) = (147, 51, 234);
pub const HEADER_ACTIVE_RGB: (u8, u8, u8) = (37, 99, 235);
pub const SURFACE_RGB: (u8, u8, u8) = (17, 24, 39);
pub const DESKTOP_RGB: (u8, u8, u8) = (30, 27, 75);

static TRUECOLOR: OnceLock<bool> = OnceLock::new();

fn truecolor_supported() -> bool {
    *TRUECOLOR.get_or_init(|| {
        std::env::var("COLORTERM")
            .map(|v| {
                let v = v.to_lowercase();
                v.contains("truecolor") || v.contains("24bit")
            })
            .unwrap_or(false)
    })
}

fn pick(rgb: (u8, u8, u8), fallback: Color) -> Color {
    if truecolor_supported() {
        Color::Rgb(rgb.0, rgb.1, rgb.2)
    } else {
        fallback
    }
}

pub fn accent() -> Color {
    pick(ACCENT_RGB, Color::LightBlue)
}

pub fn accent_alt() -> Color {
    pick(ACCENT_ALT_RGB, Color::Magenta)
}

// Desktop
pub fn desktop_bg() -> Color {
    pick(DESKTOP_RGB, Color::Black)
}
pub fn desktop_grid() -> Color {
    Color::DarkGray
}

// Window chrome
pub fn header_active_bg() -> Color {
    pick(HEADER_ACTIVE_RGB, Color::Blue)
}
pub fn header_inactive_bg() -> Color {
    Color::DarkGray
}
pub fn header_fg() -> Color {
    Color::White
}
pub fn border_inactive() -> Color {
    Color::DarkGray
}
pub fn grip_fg() -> Color {
    Color::Gray
}
pub fn surface_bg() -> Color {
    pick(SURFACE_RGB, Color::Black)
}

// Chips (branding, toolbar, status)
pub fn chip_bg() -> Color {
    pick(SURFACE_RGB, Color::Black)
}
pub fn chip_fg() -> Color {
    Color::White
}
pub fn muted_fg() -> Color {
    Color::Gray
}

// Status badges
pub fn success() -> Color {
    Color::Green
}
pub fn warning() -> Color {
    Color::Yellow
}
pub fn info() -> Color {
    Color::LightBlue
}
pub fn idle() -> Color {
    Color::Gray
}

// Toy terminal
pub fn terminal_fg() -> Color {
    Color::LightGreen
}
