//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use yolo_core::prelude::*;
use yolo_platform::ClipboardWriter;

use crate::handler::UpdateAction;
use crate::message::Message;
use crate::view_state::COPY_FEEDBACK_DURATION;

/// Everything the dispatcher needs to run actions
pub struct ActionContext {
    pub msg_tx: mpsc::Sender<Message>,
    pub clipboard: Arc<dyn ClipboardWriter>,
    pub feedback_timer: FeedbackTimer,
}

impl ActionContext {
    pub fn new(msg_tx: mpsc::Sender<Message>, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        Self {
            msg_tx,
            clipboard,
            feedback_timer: FeedbackTimer::default(),
        }
    }
}

/// Execute an action, spawning background work where needed
pub fn handle_action(action: UpdateAction, ctx: &mut ActionContext) {
    match action {
        UpdateAction::WriteClipboard { text, mount_id } => {
            spawn_clipboard_write(ctx.clipboard.clone(), text, mount_id, ctx.msg_tx.clone());
        }

        UpdateAction::ArmCopyFeedbackTimer { generation } => {
            ctx.feedback_timer.arm(generation, ctx.msg_tx.clone());
        }

        UpdateAction::CancelCopyFeedbackTimer => {
            ctx.feedback_timer.cancel();
        }
    }
}

/// Write to the clipboard off the event loop and report the outcome
fn spawn_clipboard_write(
    clipboard: Arc<dyn ClipboardWriter>,
    text: String,
    mount_id: u64,
    msg_tx: mpsc::Sender<Message>,
) {
    tokio::spawn(async move {
        let result = tokio::task::spawn_blocking(move || clipboard.write_text(&text)).await;

        let msg = match result {
            Ok(Ok(())) => Message::ClipboardWriteSucceeded { mount_id },
            Ok(Err(e)) => Message::ClipboardWriteFailed {
                mount_id,
                reason: e.to_string(),
            },
            Err(e) => Message::ClipboardWriteFailed {
                mount_id,
                reason: format!("clipboard task failed: {}", e),
            },
        };

        if msg_tx.send(msg).await.is_err() {
            debug!("Event loop gone before clipboard result was delivered");
        }
    });
}

/// Single pending "copied!" reset
///
/// Arming replaces any pending timer, so at most one reset is ever scheduled.
#[derive(Debug, Default)]
pub struct FeedbackTimer {
    handle: Option<JoinHandle<()>>,
}

impl FeedbackTimer {
    /// Schedule `CopyFeedbackExpired { generation }` after the feedback duration
    pub fn arm(&mut self, generation: u64, msg_tx: mpsc::Sender<Message>) {
        self.cancel();
        trace!(generation, "Arming copy feedback timer");
        self.handle = Some(tokio::spawn(async move {
            tokio::time::sleep(COPY_FEEDBACK_DURATION).await;
            let _ = msg_tx.send(Message::CopyFeedbackExpired { generation }).await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Whether a reset is scheduled and has not fired yet
    pub fn is_armed(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for FeedbackTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
