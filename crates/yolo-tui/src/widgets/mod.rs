//! Payment screen widgets

mod bottom_nav;
mod card_actions;
mod debit_card;
mod key_hints;
mod mode_buttons;
mod payment_header;
mod prepaid_badge;
mod status_bar;

pub use bottom_nav::BottomNav;
pub use card_actions::CardActionsPanel;
pub use debit_card::DebitCard;
pub use key_hints::KeyHints;
pub use mode_buttons::ModeButtons;
pub use payment_header::{PaymentHeader, SectionTitle};
pub use prepaid_badge::PrepaidBadge;
pub use status_bar::StatusBar;
