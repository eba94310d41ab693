//! Color palette of the portal.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Rgb(18, 21, 28);
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);
pub const SIDEBAR_BG: Color = Color::Rgb(0, 21, 41);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
pub const STATUS_BLUE: Color = Color::Blue;

// --- Chart series ---
pub const SERIES_SAVINGS: Color = Color::Rgb(75, 192, 192);
pub const SERIES_LOANS: Color = Color::Rgb(255, 99, 132);
pub const DISTRIBUTION: [Color; 3] = [
    Color::Rgb(54, 162, 235),
    Color::Rgb(255, 206, 86),
    Color::Rgb(75, 192, 192),
];

// --- Forms ---
pub const INPUT_BG: Color = Color::Rgb(40, 40, 50);
pub const INPUT_ACTIVE_BG: Color = Color::Rgb(60, 60, 80);

pub const SHADOW: Color = Color::Black;
