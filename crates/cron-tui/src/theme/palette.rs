//! Color palette.
//!
//! Everything is fixed except the accent pair, which follows the active theme.

use cron_app::config::Theme;
use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 12, 16);
pub const CARD_BG: Color = Color::Rgb(18, 21, 28);
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);
pub const EDITOR_BG: Color = Color::Rgb(14, 16, 22);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(45, 51, 59);

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(201, 209, 217);
pub const TEXT_SECONDARY: Color = Color::Rgb(125, 133, 144);
pub const TEXT_MUTED: Color = Color::Rgb(72, 79, 88);
pub const TEXT_BRIGHT: Color = Color::Rgb(240, 246, 252);
/// Foreground on top of an accent background
pub const CONTRAST_FG: Color = Color::Black;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);
pub const STATUS_BLUE: Color = Color::Rgb(56, 189, 248);

// --- Editor ---
pub const LINE_NUMBER: Color = Color::Rgb(72, 79, 88);
pub const LINE_HIGHLIGHT_BG: Color = Color::Rgb(48, 40, 16);

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);

// --- Theme accents ---
pub const SOLAR_FLARE_PRIMARY: Color = Color::Rgb(249, 115, 22);
pub const SOLAR_FLARE_SECONDARY: Color = Color::Rgb(250, 204, 21);
pub const DARK_MATTER_PRIMARY: Color = Color::Rgb(139, 92, 246);
pub const DARK_MATTER_SECONDARY: Color = Color::Rgb(56, 189, 248);

/// Primary accent for focused borders, selection and the logo.
pub fn accent(theme: Theme) -> Color {
    match theme {
        Theme::SolarFlare => SOLAR_FLARE_PRIMARY,
        Theme::DarkMatter => DARK_MATTER_PRIMARY,
    }
}

pub fn accent_secondary(theme: Theme) -> Color {
    match theme {
        Theme::SolarFlare => SOLAR_FLARE_SECONDARY,
        Theme::DarkMatter => DARK_MATTER_SECONDARY,
    }
}
