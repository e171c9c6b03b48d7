//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key bindings for the payment screen

pub(crate) mod keys;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Write text to the system clipboard, reporting back for `mount_id`
    WriteClipboard { text: String, mount_id: u64 },

    /// (Re)arm the feedback timer for `generation`, replacing any pending one
    ArmCopyFeedbackTimer { generation: u64 },

    /// Drop any pending feedback timer
    CancelCopyFeedbackTimer,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
