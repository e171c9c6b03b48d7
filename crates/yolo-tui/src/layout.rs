//! Screen layout definitions for the TUI
//!
//! The payment screen is drawn as a phone-width column centered in the
//! terminal. Rows from top to bottom: status bar, header, mode buttons,
//! section title, card with its actions, badge, filler, bottom nav, hints.

use ratatui::layout::{Constraint, Layout, Rect};

/// Widest the phone column gets
pub const MAX_COLUMN_WIDTH: u16 = 64;

/// Width of the actions column beside the card
pub const ACTIONS_WIDTH: u16 = 18;

/// Card height including its border
pub const CARD_HEIGHT: u16 = 8;

/// Screen areas for the payment screen
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Phone status bar, when enabled
    pub status_bar: Option<Rect>,
    /// Title and subtitle
    pub header: Rect,
    /// pay / card buttons
    pub modes: Rect,
    /// "Your digital debit card"
    pub section_title: Rect,
    /// Debit card face
    pub card: Rect,
    /// copy / freeze buttons beside the card
    pub actions: Rect,
    /// RuPay prepaid badge
    pub badge: Rect,
    /// Bottom navigation tabs
    pub nav: Rect,
    /// Key hints under the navigation
    pub hints: Rect,
}

/// Center a column of at most `MAX_COLUMN_WIDTH` in `area`
pub fn phone_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_COLUMN_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Create the payment screen layout
pub fn create(area: Rect, show_status_bar: bool) -> ScreenAreas {
    let column = phone_column(area);

    let status_height = if show_status_bar { 1 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(status_height), // Status bar
        Constraint::Length(3),             // Title + subtitle + gap
        Constraint::Length(3),             // Mode buttons
        Constraint::Length(2),             // Section title + gap
        Constraint::Length(CARD_HEIGHT),   // Card row
        Constraint::Length(1),             // Badge
        Constraint::Min(0),                // Filler
        Constraint::Length(3),             // Bottom nav
        Constraint::Length(1),             // Key hints
    ])
    .split(column);

    let card_row = Layout::horizontal([Constraint::Min(0), Constraint::Length(ACTIONS_WIDTH)])
        .split(chunks[4]);

    ScreenAreas {
        status_bar: show_status_bar.then_some(chunks[0]),
        header: chunks[1],
        modes: chunks[2],
        section_title: chunks[3],
        card: card_row[0],
        actions: card_row[1],
        badge: chunks[5],
        nav: chunks[7],
        hints: chunks[8],
    }
}
