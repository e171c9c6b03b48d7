//! copy details / freeze buttons beside the card

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use yolo_app::presentation::CardActions;

use crate::theme::{icons::IconSet, styles};

pub struct CardActionsPanel<'a> {
    actions: &'a CardActions,
    icons: IconSet,
}

impl<'a> CardActionsPanel<'a> {
    pub fn new(actions: &'a CardActions, icons: IconSet) -> Self {
        Self { actions, icons }
    }

    fn copy_line(&self) -> Line<'static> {
        let copy = &self.actions.copy;
        let (icon, style) = if copy.feedback_active {
            (self.icons.check(), styles::success())
        } else if copy.enabled {
            (self.icons.copy(), styles::text_primary())
        } else {
            (self.icons.copy(), styles::text_muted())
        };
        Line::from(vec![
            Span::styled(icon, style),
            Span::raw(" "),
            Span::styled(copy.label, style),
        ])
    }

    fn freeze_line(&self) -> Line<'static> {
        let freeze = &self.actions.freeze;
        let style = if freeze.frozen {
            styles::freeze_accent()
        } else {
            styles::text_primary()
        };
        Line::from(vec![
            Span::styled(self.icons.snowflake(), styles::freeze_accent()),
            Span::raw(" "),
            Span::styled(freeze.label, style),
        ])
    }
}

impl Widget for CardActionsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [copy_area, freeze_area, _] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(Rect {
            x: area.x + 1,
            width: area.width.saturating_sub(1),
            ..area
        });

        Paragraph::new(self.copy_line())
            .block(styles::glass_block(self.actions.copy.feedback_active))
            .render(copy_area, buf);

        Paragraph::new(self.freeze_line())
            .block(styles::glass_block(self.actions.freeze.frozen))
            .render(freeze_area, buf);
    }
}
