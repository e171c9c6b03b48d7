//! Color palette for the payment screen.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(10, 10, 12); // Phone background

// --- Card faces ---
pub const CARD_ACTIVE_BG: Color = Color::Rgb(28, 52, 120);
pub const CARD_FROZEN_BG: Color = Color::Rgb(58, 64, 76);
pub const FROZEN_LINES: Color = Color::Rgb(96, 108, 128);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::LightRed;

// --- Accent ---
pub const ACCENT: Color = Color::LightRed; // Selected mode / active tab
pub const FREEZE_ACCENT: Color = Color::LightCyan; // Snowflake and "unfreeze"
pub const CONTRAST_FG: Color = Color::Black; // Text on accent backgrounds

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green; // "copied!"
