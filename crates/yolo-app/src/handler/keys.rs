//! Key bindings for the payment screen

use crate::input_key::InputKey;
use crate::message::Message;
use crate::view_state::PayMode;

/// Convert a key event to a message
pub fn handle_key(key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Card actions
        InputKey::Char('f') => Some(Message::ToggleFreeze),
        InputKey::Char('c' | 'y') => Some(Message::CopyDetails),

        // Payment mode
        InputKey::Char('p') => Some(Message::SetMode(PayMode::Pay)),
        InputKey::Char('d') => Some(Message::SetMode(PayMode::Card)),
        InputKey::Char('m') => Some(Message::CycleMode),

        // Bottom navigation
        InputKey::Char(c @ '1'..='3') => c
            .to_digit(10)
            .map(|n| Message::SelectTab(n as usize - 1)),
        InputKey::Right | InputKey::Tab => Some(Message::NextTab),
        InputKey::Left | InputKey::BackTab => Some(Message::PrevTab),

        _ => None,
    }
}
