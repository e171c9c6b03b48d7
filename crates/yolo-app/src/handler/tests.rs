//! Tests for handler module

use std::sync::Arc;

use super::*;
use crate::card_provider::SessionCardProvider;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppPhase, AppState};
use crate::view_state::PayMode;
use yolo_core::Route;
use yolo_platform::test_utils::FixedNameGenerator;

const JANE_DETAILS: &str = "Card: 8124-4212-3456-7890\nExpiry: 01/28\nCVV: 345\nName: Jane Doe";

fn test_state() -> AppState {
    let provider = SessionCardProvider::new(Arc::new(FixedNameGenerator::new("Jane Doe")));
    AppState::with_settings(Settings::default(), provider)
}

/// Run update and follow-up messages, collecting actions
fn run(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut next = Some(message);
    while let Some(msg) = next {
        let result = update(state, msg);
        actions.extend(result.action);
        next = result.message;
    }
    actions
}

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = test_state();
    assert_ne!(state.phase, AppPhase::Quitting);

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_and_esc_quit() {
    for key in [InputKey::Char('q'), InputKey::Esc, InputKey::CharCtrl('c')] {
        let mut state = test_state();
        run(&mut state, Message::Key(key));
        assert!(state.should_quit());
    }
}

#[test]
fn test_unbound_key_does_nothing() {
    let mut state = test_state();
    let result = update(&mut state, Message::Key(InputKey::Char('z')));
    assert!(result.message.is_none());
    assert!(result.action.is_none());
}

#[test]
fn test_f_toggles_freeze_twice() {
    let mut state = test_state();
    run(&mut state, Message::Key(InputKey::Char('f')));
    assert!(state.is_frozen());
    run(&mut state, Message::Key(InputKey::Char('f')));
    assert!(!state.is_frozen());
}

#[test]
fn test_mode_keys() {
    let mut state = test_state();
    run(&mut state, Message::Key(InputKey::Char('p')));
    assert_eq!(state.screen.mode, PayMode::Pay);
    run(&mut state, Message::Key(InputKey::Char('d')));
    assert_eq!(state.screen.mode, PayMode::Card);
    run(&mut state, Message::Key(InputKey::Char('m')));
    assert_eq!(state.screen.mode, PayMode::Pay);
}

#[test]
fn test_mode_changes_leave_freeze_alone() {
    let mut state = test_state();
    run(&mut state, Message::ToggleFreeze);
    run(&mut state, Message::SetMode(PayMode::Pay));
    run(&mut state, Message::SetMode(PayMode::Card));
    assert!(state.is_frozen());
}

#[test]
fn test_copy_when_active_writes_details() {
    let mut state = test_state();
    let actions = run(&mut state, Message::Key(InputKey::Char('c')));
    assert_eq!(
        actions,
        vec![UpdateAction::WriteClipboard {
            text: JANE_DETAILS.to_string(),
            mount_id: 0,
        }]
    );
    // Feedback waits for the write to succeed
    assert!(!state.screen.copy_feedback.is_active());
}

#[test]
fn test_copy_when_frozen_is_noop() {
    let mut state = test_state();
    run(&mut state, Message::ToggleFreeze);

    let actions = run(&mut state, Message::CopyDetails);

    assert!(actions.is_empty());
    assert!(!state.screen.copy_feedback.is_active());
}

#[test]
fn test_write_success_activates_feedback_and_arms_timer() {
    let mut state = test_state();
    let actions = run(&mut state, Message::ClipboardWriteSucceeded { mount_id: 0 });

    assert!(state.screen.copy_feedback.is_active());
    assert_eq!(
        actions,
        vec![UpdateAction::ArmCopyFeedbackTimer { generation: 1 }]
    );
    assert_eq!(state.payment_view().actions.copy.label, "copied!");
}

#[test]
fn test_second_success_rearms_with_new_generation() {
    let mut state = test_state();
    run(&mut state, Message::ClipboardWriteSucceeded { mount_id: 0 });
    let actions = run(&mut state, Message::ClipboardWriteSucceeded { mount_id: 0 });

    assert_eq!(
        actions,
        vec![UpdateAction::ArmCopyFeedbackTimer { generation: 2 }]
    );

    // The first timer firing late must not clear the second activation
    run(&mut state, Message::CopyFeedbackExpired { generation: 1 });
    assert!(state.screen.copy_feedback.is_active());

    run(&mut state, Message::CopyFeedbackExpired { generation: 2 });
    assert!(!state.screen.copy_feedback.is_active());
}

#[test]
fn test_write_failure_shows_no_feedback() {
    let mut state = test_state();
    let actions = run(
        &mut state,
        Message::ClipboardWriteFailed {
            mount_id: 0,
            reason: "clipboard not available".to_string(),
        },
    );

    assert!(actions.is_empty());
    assert!(!state.screen.copy_feedback.is_active());
    assert!(!state.should_quit());
}

#[test]
fn test_success_from_previous_mount_is_ignored() {
    let mut state = test_state();
    run(&mut state, Message::Navigate(Route::Home));

    let actions = run(&mut state, Message::ClipboardWriteSucceeded { mount_id: 0 });

    assert!(actions.is_empty());
    assert!(!state.screen.copy_feedback.is_active());
}

#[test]
fn test_navigation_resets_screen_and_cancels_timer() {
    let mut state = test_state();
    run(&mut state, Message::ToggleFreeze);
    run(&mut state, Message::SetMode(PayMode::Pay));
    run(&mut state, Message::ClipboardWriteSucceeded { mount_id: 0 });

    let actions = run(&mut state, Message::Key(InputKey::Char('3')));

    assert_eq!(state.route(), Route::Ginie);
    assert_eq!(actions, vec![UpdateAction::CancelCopyFeedbackTimer]);
    assert!(state.is_frozen());
    assert_eq!(state.screen.mode, PayMode::Card);
    assert!(!state.screen.copy_feedback.is_active());
}

#[test]
fn test_selecting_current_tab_keeps_screen() {
    let mut state = test_state();
    run(&mut state, Message::SetMode(PayMode::Pay));

    let actions = run(&mut state, Message::Key(InputKey::Char('2')));

    assert!(actions.is_empty());
    assert_eq!(state.route(), Route::Root);
    assert_eq!(state.screen.mode, PayMode::Pay);
}

#[test]
fn test_tab_keys_cycle_routes() {
    let mut state = test_state();
    run(&mut state, Message::Key(InputKey::Right));
    assert_eq!(state.route(), Route::Ginie);
    run(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.route(), Route::Home);
    run(&mut state, Message::Key(InputKey::Left));
    assert_eq!(state.route(), Route::Ginie);
    run(&mut state, Message::Key(InputKey::BackTab));
    assert_eq!(state.route(), Route::Root);
}

#[test]
fn test_select_tab_out_of_range() {
    let mut state = test_state();
    let actions = run(&mut state, Message::SelectTab(7));
    assert!(actions.is_empty());
    assert_eq!(state.route(), Route::Root);
}

#[test]
fn test_tick_changes_nothing() {
    let mut state = test_state();
    let result = update(&mut state, Message::Tick);
    assert!(result.message.is_none());
    assert!(result.action.is_none());
}
