//! "RuPay prepaid" badge under the card

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct PrepaidBadge<'a> {
    text: &'a str,
}

impl<'a> PrepaidBadge<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Widget for PrepaidBadge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Network name in bold, product in muted text
        let line = match self.text.split_once(' ') {
            Some((network, product)) => Line::from(vec![
                Span::styled(network, styles::title()),
                Span::raw(" "),
                Span::styled(product, styles::text_muted()),
            ]),
            None => Line::styled(self.text, styles::title()),
        };

        Paragraph::new(line)
            .alignment(Alignment::Right)
            .render(
                Rect {
                    width: area.width.saturating_sub(ACTIONS_PAD),
                    ..area
                },
                buf,
            );
    }
}

/// Keep the badge under the card rather than under the action buttons
const ACTIONS_PAD: u16 = crate::layout::ACTIONS_WIDTH;
