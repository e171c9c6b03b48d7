//! One-line key binding hints

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const HINTS: &[(&str, &str)] = &[
    ("f", "freeze"),
    ("c", "copy"),
    ("p/d", "mode"),
    ("1-3", "tabs"),
    ("q", "quit"),
];

pub struct KeyHints;

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::with_capacity(HINTS.len() * 3);
        for (i, (key, action)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::accent_bold()));
            spans.push(Span::styled(format!(" {action}"), styles::text_muted()));
        }

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
