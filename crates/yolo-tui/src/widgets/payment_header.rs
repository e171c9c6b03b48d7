//! Screen title, subtitle and the card section heading

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

pub struct PaymentHeader<'a> {
    title: &'a str,
    subtitle: &'a str,
}

impl<'a> PaymentHeader<'a> {
    pub fn new(title: &'a str, subtitle: &'a str) -> Self {
        Self { title, subtitle }
    }
}

impl Widget for PaymentHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let padded = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        };

        Paragraph::new(vec![
            Line::styled(self.title, styles::title()),
            Line::styled(self.subtitle, styles::text_muted()),
        ])
        .wrap(Wrap { trim: true })
        .render(padded, buf);
    }
}

pub struct SectionTitle<'a> {
    text: &'a str,
}

impl<'a> SectionTitle<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Widget for SectionTitle<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let padded = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            height: area.height.min(1),
            ..area
        };
        Paragraph::new(Line::styled(self.text, styles::text_secondary())).render(padded, buf);
    }
}
