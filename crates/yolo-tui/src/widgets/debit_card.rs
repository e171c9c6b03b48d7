//! Debit card face
//!
//! Active cards sit on a blue face. Frozen cards use a grey face with a
//! diagonal line overlay behind the masked fields.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use yolo_app::presentation::CardFace;

use crate::theme::styles;

/// Glyph tiled across a frozen card
pub const FROZEN_LINE_GLYPH: &str = "╱";

/// Column gap between expiry and cvv
const FIELD_GAP: usize = 6;

pub struct DebitCard<'a> {
    face: &'a CardFace,
}

impl<'a> DebitCard<'a> {
    pub fn new(face: &'a CardFace) -> Self {
        Self { face }
    }

    fn render_frozen_lines(area: Rect, buf: &mut Buffer) {
        let style = styles::frozen_lines();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                // Every third diagonal, shifted per row
                if (x + y) % 3 == 0 {
                    buf[(x, y)].set_symbol(FROZEN_LINE_GLYPH).set_style(style);
                }
            }
        }
    }

    fn lines(&self, width: u16) -> Vec<Line<'static>> {
        let fields = self.face.fields();
        let face = styles::card_face(self.face.is_frozen());
        let label = face.patch(styles::text_secondary());
        let bold = face.patch(styles::title());

        // Brand on the left, network on the right
        let header_gap = (width as usize)
            .saturating_sub(fields.brand.width() + fields.kind.width() + 2)
            .max(1);

        let expiry_col = fields.expiry_label.width().max(fields.expiry.width()) + FIELD_GAP;

        vec![
            Line::from(vec![
                Span::styled(format!(" {}", fields.brand), bold),
                Span::raw(" ".repeat(header_gap)),
                Span::styled(format!("{} ", fields.kind), label),
            ]),
            Line::default(),
            Line::from(Span::styled(format!(" {}", fields.number), bold)),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    format!(" {:<expiry_col$}", fields.expiry_label),
                    label,
                ),
                Span::styled(fields.cvv_label.to_string(), label),
            ]),
            Line::from(vec![
                Span::styled(format!(" {:<expiry_col$}", fields.expiry), bold),
                Span::styled(fields.cvv.clone(), bold),
            ]),
        ]
    }
}

impl Widget for DebitCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frozen = self.face.is_frozen();
        let face = styles::card_face(frozen);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(face.patch(styles::border_inactive()))
            .style(face);
        let inner = block.inner(area);
        block.render(area, buf);

        if frozen {
            Self::render_frozen_lines(inner, buf);
        }

        Paragraph::new(self.lines(inner.width))
            .alignment(Alignment::Left)
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette;
    use yolo_app::presentation::{present, MASKED_CARD_NUMBER};
    use yolo_app::view_state::{FreezeState, PaymentScreenState};
    use yolo_core::CardRecord;

    fn face(freeze: FreezeState) -> CardFace {
        let card = CardRecord::synthetic("Jane Doe");
        present(&card, freeze, &PaymentScreenState::default()).card
    }

    #[test]
    fn test_active_card_shows_number_and_fields() {
        let face = face(FreezeState::Active);
        let mut term = TestTerminal::with_size(46, 8);
        term.render_widget(DebitCard::new(&face), term.area());

        assert!(term.buffer_contains("YOLO"));
        assert!(term.buffer_contains("DEBIT"));
        assert!(term.buffer_contains("8124   4212   3456   7890"));
        assert!(term.buffer_contains("expiry"));
        assert!(term.buffer_contains("01/28"));
        assert!(term.buffer_contains("345"));
        assert!(!term.buffer_contains(FROZEN_LINE_GLYPH));
    }

    #[test]
    fn test_frozen_card_is_masked_with_overlay() {
        let face = face(FreezeState::Frozen);
        let mut term = TestTerminal::with_size(46, 8);
        term.render_widget(DebitCard::new(&face), term.area());

        assert!(term.buffer_contains(MASKED_CARD_NUMBER));
        assert!(!term.buffer_contains("8124"));
        assert!(!term.buffer_contains("01/28"));
        assert!(term.buffer_contains(FROZEN_LINE_GLYPH));
    }

    #[test]
    fn test_face_background_differs_by_state() {
        let mut term = TestTerminal::with_size(46, 8);
        let active = face(FreezeState::Active);
        term.render_widget(DebitCard::new(&active), term.area());
        assert_eq!(term.buffer()[(2, 2)].bg, palette::CARD_ACTIVE_BG);

        let frozen = face(FreezeState::Frozen);
        term.render_widget(DebitCard::new(&frozen), term.area());
        assert_eq!(term.buffer()[(2, 2)].bg, palette::CARD_FROZEN_BG);
    }
}
