//! Bottom navigation bar

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use yolo_app::navigation::NAV_TABS;

use crate::theme::{icons::IconSet, styles};

/// Tabs for home, yolo pay and ginie; the one matching the current path is highlighted
pub struct BottomNav<'a> {
    current_path: &'a str,
    icons: IconSet,
}

impl<'a> BottomNav<'a> {
    pub fn new(current_path: &'a str, icons: IconSet) -> Self {
        Self {
            current_path,
            icons,
        }
    }
}

impl Widget for BottomNav<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        let cells = Layout::horizontal(NAV_TABS.iter().map(|_| Constraint::Ratio(1, 3))).split(inner);

        for (tab, cell) in NAV_TABS.iter().zip(cells.iter()) {
            let style = if tab.is_active(self.current_path) {
                styles::focused_selected()
            } else {
                styles::text_secondary()
            };

            Paragraph::new(Line::from(vec![
                Span::raw(self.icons.nav(tab.id)),
                Span::raw(" "),
                Span::raw(tab.label),
            ]))
            .style(style)
            .alignment(Alignment::Center)
            .render(*cell, buf);
        }
    }
}
