//! Message processing
//!
//! Runs a message through the TEA update function, dispatching each action
//! and feeding follow-up messages back in until the chain settles.

use crate::actions::{handle_action, ActionContext};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message, ctx: &mut ActionContext) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, ctx);
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_provider::SessionCardProvider;
    use crate::config::Settings;
    use crate::input_key::InputKey;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;
    use yolo_platform::test_utils::FixedNameGenerator;
    use yolo_platform::MockClipboardWriter;

    fn test_state() -> AppState {
        let provider = SessionCardProvider::new(Arc::new(FixedNameGenerator::new("Jane Doe")));
        AppState::with_settings(Settings::default(), provider)
    }

    #[tokio::test]
    async fn test_frozen_copy_never_touches_clipboard() {
        let mut clipboard = MockClipboardWriter::new();
        clipboard.expect_write_text().times(0);

        let (tx, mut rx) = mpsc::channel(8);
        let mut ctx = ActionContext::new(tx, Arc::new(clipboard));
        let mut state = test_state();

        process_message(&mut state, Message::Key(InputKey::Char('f')), &mut ctx);
        process_message(&mut state, Message::Key(InputKey::Char('c')), &mut ctx);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(rx.try_recv().is_err());
        assert!(!state.screen.copy_feedback.is_active());
    }

    #[tokio::test]
    async fn test_active_copy_writes_exact_details() {
        let mut clipboard = MockClipboardWriter::new();
        clipboard
            .expect_write_text()
            .withf(|text| {
                text.to_string()
                    == "Card: 8124-4212-3456-7890\nExpiry: 01/28\nCVV: 345\nName: Jane Doe"
            })
            .times(1)
            .returning(|_| Ok(()));

        let (tx, mut rx) = mpsc::channel(8);
        let mut ctx = ActionContext::new(tx, Arc::new(clipboard));
        let mut state = test_state();

        process_message(&mut state, Message::CopyDetails, &mut ctx);

        let reply = rx.recv().await.unwrap();
        assert_eq!(reply, Message::ClipboardWriteSucceeded { mount_id: 0 });

        process_message(&mut state, reply, &mut ctx);
        assert!(state.screen.copy_feedback.is_active());
        assert!(ctx.feedback_timer.is_armed());
    }

    #[tokio::test]
    async fn test_navigation_cancels_pending_timer() {
        let (tx, _rx) = mpsc::channel(8);
        let mut ctx = ActionContext::new(tx, Arc::new(MockClipboardWriter::new()));
        let mut state = test_state();

        process_message(
            &mut state,
            Message::ClipboardWriteSucceeded { mount_id: 0 },
            &mut ctx,
        );
        assert!(ctx.feedback_timer.is_armed());

        process_message(&mut state, Message::Key(InputKey::Char('1')), &mut ctx);
        assert!(!ctx.feedback_timer.is_armed());
    }
}
