//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use yolo_app::navigation::Navigator;
use yolo_app::state::AppState;

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette};

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    render_with_clock(frame, state, widgets::StatusBar::now());
}

/// Render with an explicit status bar, so tests get a fixed clock
pub fn render_with_clock(frame: &mut Frame, state: &AppState, status_bar: widgets::StatusBar) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.settings.ui.show_status_bar);
    let icons = IconSet::new(state.settings.ui.icons);
    let view = state.payment_view();

    if let Some(status_area) = areas.status_bar {
        frame.render_widget(status_bar, status_area);
    }

    frame.render_widget(
        widgets::PaymentHeader::new(view.title, view.subtitle),
        areas.header,
    );
    frame.render_widget(widgets::ModeButtons::new(&view.modes), areas.modes);
    frame.render_widget(
        widgets::SectionTitle::new(view.section_title),
        areas.section_title,
    );
    frame.render_widget(widgets::DebitCard::new(&view.card), areas.card);
    frame.render_widget(
        widgets::CardActionsPanel::new(&view.actions, icons),
        areas.actions,
    );
    frame.render_widget(widgets::PrepaidBadge::new(view.badge), areas.badge);
    frame.render_widget(
        widgets::BottomNav::new(state.router.current_path(), icons),
        areas.nav,
    );
    frame.render_widget(widgets::KeyHints, areas.hints);
}
