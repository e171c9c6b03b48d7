//! Presentation rules for the payment screen
//!
//! [`present`] is a pure function from card + state to a [`PaymentView`].
//! Widgets and the headless snapshot both render from the view model and
//! never read the card record directly.

use serde::Serialize;
use yolo_core::CardRecord;

use crate::view_state::{FreezeState, PayMode, PaymentScreenState};

/// Number mask shown while frozen
pub const MASKED_CARD_NUMBER: &str = "••••   ••••   ••••   ••••";
/// Expiry/CVV mask shown while frozen
pub const MASKED_FIELD: &str = "••";

pub const SCREEN_TITLE: &str = "select payment mode";
pub const SCREEN_SUBTITLE: &str = "choose your preferred payment method to make payment";
pub const SECTION_TITLE: &str = "Your digital debit card";
pub const CARD_BRAND: &str = "YOLO";
pub const CARD_KIND: &str = "DEBIT";
pub const PREPAID_BADGE: &str = "RuPay prepaid";

pub const COPY_LABEL: &str = "copy details";
pub const COPIED_LABEL: &str = "copied!";
pub const FREEZE_LABEL: &str = "freeze";
pub const UNFREEZE_LABEL: &str = "unfreeze";

const NUMBER_GROUP_GAP: &str = "   ";

/// Card number for display: groups separated by three spaces, or the mask
pub fn format_card_number(card: &CardRecord, freeze: FreezeState) -> String {
    match freeze {
        FreezeState::Frozen => MASKED_CARD_NUMBER.to_string(),
        FreezeState::Active => card.number_groups().collect::<Vec<_>>().join(NUMBER_GROUP_GAP),
    }
}

/// Expiry or CVV for display
pub fn format_card_field(value: &str, freeze: FreezeState) -> String {
    match freeze {
        FreezeState::Frozen => MASKED_FIELD.to_string(),
        FreezeState::Active => value.to_string(),
    }
}

/// Text to place on the clipboard, or `None` when copying is disabled
pub fn copy_payload(card: &CardRecord, freeze: FreezeState) -> Option<String> {
    match freeze {
        FreezeState::Frozen => None,
        FreezeState::Active => Some(card.details_text()),
    }
}

/// Fields printed on the card face
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardFields {
    pub brand: &'static str,
    pub kind: &'static str,
    pub number: String,
    pub expiry_label: &'static str,
    pub expiry: String,
    pub cvv_label: &'static str,
    pub cvv: String,
}

/// Card face variant, selected by freeze state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CardFace {
    Active(CardFields),
    Frozen(CardFields),
}

impl CardFace {
    pub fn fields(&self) -> &CardFields {
        match self {
            CardFace::Active(fields) | CardFace::Frozen(fields) => fields,
        }
    }

    pub fn is_frozen(&self) -> bool {
        matches!(self, CardFace::Frozen(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeButton {
    pub mode: PayMode,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CopyAction {
    pub label: &'static str,
    pub enabled: bool,
    pub feedback_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FreezeAction {
    pub label: &'static str,
    pub frozen: bool,
}

/// Actions row beside the card; always present
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardActions {
    pub copy: CopyAction,
    pub freeze: FreezeAction,
}

/// Everything the payment screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub modes: Vec<ModeButton>,
    pub section_title: &'static str,
    pub card: CardFace,
    pub actions: CardActions,
    pub badge: &'static str,
}

/// Derive the view model for the payment screen
pub fn present(card: &CardRecord, freeze: FreezeState, screen: &PaymentScreenState) -> PaymentView {
    let fields = CardFields {
        brand: CARD_BRAND,
        kind: CARD_KIND,
        number: format_card_number(card, freeze),
        expiry_label: "expiry",
        expiry: format_card_field(&card.expiry().to_string(), freeze),
        cvv_label: "cvv",
        cvv: format_card_field(card.cvv(), freeze),
    };

    let face = match freeze {
        FreezeState::Active => CardFace::Active(fields),
        FreezeState::Frozen => CardFace::Frozen(fields),
    };

    let feedback_active = screen.copy_feedback.is_active();

    PaymentView {
        title: SCREEN_TITLE,
        subtitle: SCREEN_SUBTITLE,
        modes: PayMode::ALL
            .into_iter()
            .map(|mode| ModeButton {
                mode,
                label: mode.label(),
                selected: mode == screen.mode,
            })
            .collect(),
        section_title: SECTION_TITLE,
        card: face,
        actions: CardActions {
            copy: CopyAction {
                label: if feedback_active { COPIED_LABEL } else { COPY_LABEL },
                enabled: !freeze.is_frozen(),
                feedback_active,
            },
            freeze: FreezeAction {
                label: if freeze.is_frozen() {
                    UNFREEZE_LABEL
                } else {
                    FREEZE_LABEL
                },
                frozen: freeze.is_frozen(),
            },
        },
        badge: PREPAID_BADGE,
    }
}
