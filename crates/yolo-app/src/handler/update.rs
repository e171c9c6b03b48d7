//! Main update function - handles state transitions (TEA pattern)

use yolo_core::prelude::*;

use crate::message::Message;
use crate::navigation::{self, Navigator, NAV_TABS};
use crate::presentation;
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit | Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Card Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleFreeze => {
            state.toggle_freeze();
            UpdateResult::none()
        }

        Message::SetMode(mode) => {
            state.set_mode(mode);
            UpdateResult::none()
        }

        Message::CycleMode => {
            state.set_mode(state.screen.mode.next());
            UpdateResult::none()
        }

        Message::CopyDetails => handle_copy_details(state),

        Message::ClipboardWriteSucceeded { mount_id } => {
            if mount_id != state.screen.mount_id {
                debug!(mount_id, "Clipboard result for a previous screen, ignoring");
                return UpdateResult::none();
            }
            let generation = state.trigger_copy_feedback();
            UpdateResult::action(UpdateAction::ArmCopyFeedbackTimer { generation })
        }

        Message::ClipboardWriteFailed { mount_id, reason } => {
            warn!(mount_id, "Failed to copy card details: {}", reason);
            UpdateResult::none()
        }

        Message::CopyFeedbackExpired { generation } => {
            if !state.expire_copy_feedback(generation) {
                trace!(generation, "Stale copy feedback expiry ignored");
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => {
            if state.navigate(route) {
                UpdateResult::action(UpdateAction::CancelCopyFeedbackTimer)
            } else {
                UpdateResult::none()
            }
        }

        Message::SelectTab(index) => match NAV_TABS.get(index) {
            Some(tab) => UpdateResult::message(Message::Navigate(tab.route)),
            None => UpdateResult::none(),
        },

        Message::NextTab => {
            let tab = navigation::next_tab(state.router.current_path());
            UpdateResult::message(Message::Navigate(tab.route))
        }

        Message::PrevTab => {
            let tab = navigation::prev_tab(state.router.current_path());
            UpdateResult::message(Message::Navigate(tab.route))
        }
    }
}

fn handle_copy_details(state: &AppState) -> UpdateResult {
    let card = state.card();
    match presentation::copy_payload(&card, state.freeze) {
        Some(text) => UpdateResult::action(UpdateAction::WriteClipboard {
            text,
            mount_id: state.screen.mount_id,
        }),
        None => {
            debug!("Copy requested while frozen, ignoring");
            UpdateResult::none()
        }
    }
}
