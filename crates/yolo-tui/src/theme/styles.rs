//! Semantic style builders for the payment screen.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn freeze_accent() -> Style {
    Style::default()
        .fg(palette::FREEZE_ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn success() -> Style {
    Style::default()
        .fg(palette::STATUS_GREEN)
        .add_modifier(Modifier::BOLD)
}

/// Dark text on the accent color, used for the active nav tab
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Card styles ---
pub fn card_face(frozen: bool) -> Style {
    let bg = if frozen {
        palette::CARD_FROZEN_BG
    } else {
        palette::CARD_ACTIVE_BG
    };
    Style::default().fg(palette::TEXT_BRIGHT).bg(bg)
}

pub fn frozen_lines() -> Style {
    Style::default()
        .fg(palette::FROZEN_LINES)
        .bg(palette::CARD_FROZEN_BG)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
