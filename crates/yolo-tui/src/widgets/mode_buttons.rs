//! pay / card mode buttons

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};

use yolo_app::presentation::ModeButton;

use crate::theme::styles;

pub struct ModeButtons<'a> {
    buttons: &'a [ModeButton],
}

impl<'a> ModeButtons<'a> {
    pub fn new(buttons: &'a [ModeButton]) -> Self {
        Self { buttons }
    }
}

impl Widget for ModeButtons<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.buttons.is_empty() {
            return;
        }

        // Buttons hug the left edge, like pills
        let mut constraints: Vec<Constraint> =
            self.buttons.iter().map(|_| Constraint::Length(10)).collect();
        constraints.push(Constraint::Min(0));

        let cells = Layout::horizontal(constraints).spacing(1).split(Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(1),
            ..area
        });

        for (button, cell) in self.buttons.iter().zip(cells.iter()) {
            let label_style = if button.selected {
                styles::accent_bold()
            } else {
                styles::text_secondary()
            };

            Paragraph::new(Line::styled(button.label, label_style))
                .alignment(Alignment::Center)
                .block(styles::glass_block(button.selected))
                .render(*cell, buf);
        }
    }
}
