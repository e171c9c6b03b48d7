//! Phone-style status bar (clock, signal, battery)

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

const SIGNAL: &str = "▂▄▆█";
const BATTERY: &str = "▕███▏";

pub struct StatusBar {
    time: String,
}

impl StatusBar {
    pub fn new(time: impl Into<String>) -> Self {
        Self { time: time.into() }
    }

    /// Status bar showing the local wall-clock time
    pub fn now() -> Self {
        Self::new(chrono::Local::now().format("%-H:%M").to_string())
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let padded = Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(2),
            ..area
        };

        Paragraph::new(Line::styled(self.time, styles::title())).render(padded, buf);
        Paragraph::new(Line::styled(
            format!("{SIGNAL} {BATTERY}"),
            styles::text_secondary(),
        ))
        .alignment(Alignment::Right)
        .render(padded, buf);
    }
}
