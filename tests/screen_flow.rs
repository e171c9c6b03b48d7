//! End-to-end flows through the TEA loop with real action dispatch

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use yolo_app::actions::ActionContext;
use yolo_app::card_provider::SessionCardProvider;
use yolo_app::config::Settings;
use yolo_app::message::Message;
use yolo_app::process::process_message;
use yolo_app::state::AppState;
use yolo_app::view_state::PayMode;
use yolo_app::InputKey;
use yolo_core::Route;
use yolo_platform::test_utils::{DeniedClipboard, FixedNameGenerator, RecordingClipboard};
use yolo_platform::ClipboardWriter;

const JANE_DETAILS: &str = "Card: 8124-4212-3456-7890\nExpiry: 01/28\nCVV: 345\nName: Jane Doe";

/// Paused time lands on the deadline, give or take tick rounding
fn assert_elapsed(start: Instant, millis: u64) {
    let elapsed = start.elapsed();
    assert!(
        elapsed >= Duration::from_millis(millis) && elapsed < Duration::from_millis(millis + 50),
        "elapsed {:?}, expected ~{}ms",
        elapsed,
        millis
    );
}

struct Harness {
    state: AppState,
    ctx: ActionContext,
    rx: mpsc::Receiver<Message>,
}

impl Harness {
    fn new(clipboard: Arc<dyn ClipboardWriter>) -> Self {
        let provider = SessionCardProvider::new(Arc::new(FixedNameGenerator::new("Jane Doe")));
        let (tx, rx) = mpsc::channel(16);
        Self {
            state: AppState::with_settings(Settings::default(), provider),
            ctx: ActionContext::new(tx, clipboard),
            rx,
        }
    }

    fn press(&mut self, c: char) {
        process_message(&mut self.state, Message::Key(InputKey::Char(c)), &mut self.ctx);
    }

    fn send(&mut self, msg: Message) {
        process_message(&mut self.state, msg, &mut self.ctx);
    }

    /// Wait for the next background message and feed it back in
    async fn pump(&mut self) -> Message {
        let msg = self.rx.recv().await.expect("channel closed");
        self.send(msg.clone());
        msg
    }

    fn feedback_active(&self) -> bool {
        self.state.screen.copy_feedback.is_active()
    }
}

#[tokio::test(start_paused = true)]
async fn test_copy_shows_feedback_for_two_seconds() {
    let clipboard = RecordingClipboard::new();
    let mut h = Harness::new(Arc::new(clipboard.clone()));

    h.press('c');
    assert_eq!(
        h.pump().await,
        Message::ClipboardWriteSucceeded { mount_id: 0 }
    );
    assert_eq!(clipboard.writes(), vec![JANE_DETAILS]);
    assert!(h.feedback_active());
    assert_eq!(h.state.payment_view().actions.copy.label, "copied!");

    let start = Instant::now();
    assert_eq!(
        h.pump().await,
        Message::CopyFeedbackExpired { generation: 1 }
    );
    assert_elapsed(start, 2000);
    assert!(!h.feedback_active());
    assert_eq!(h.state.payment_view().actions.copy.label, "copy details");
}

#[tokio::test(start_paused = true)]
async fn test_rapid_second_copy_restarts_timer() {
    let mut h = Harness::new(Arc::new(RecordingClipboard::new()));
    let start = Instant::now();

    h.send(Message::ClipboardWriteSucceeded { mount_id: 0 });
    tokio::time::sleep(Duration::from_millis(1500)).await;
    h.send(Message::ClipboardWriteSucceeded { mount_id: 0 });

    // Past the first timer's deadline: still active, nothing delivered
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(h.feedback_active());
    assert!(h.rx.try_recv().is_err());

    assert_eq!(
        h.pump().await,
        Message::CopyFeedbackExpired { generation: 2 }
    );
    assert_elapsed(start, 3500);
    assert!(!h.feedback_active());
}

#[tokio::test]
async fn test_frozen_copy_writes_nothing() {
    let clipboard = RecordingClipboard::new();
    let mut h = Harness::new(Arc::new(clipboard.clone()));

    h.press('f');
    h.press('c');
    h.press('y');

    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(clipboard.writes().is_empty());
    assert!(h.rx.try_recv().is_err());
    assert!(!h.state.payment_view().actions.copy.enabled);
}

#[tokio::test]
async fn test_clipboard_failure_is_survivable() {
    let mut h = Harness::new(Arc::new(DeniedClipboard));

    h.press('c');
    let reply = h.pump().await;

    assert!(matches!(reply, Message::ClipboardWriteFailed { .. }));
    assert!(!h.feedback_active());
    assert!(!h.state.should_quit());
}

#[tokio::test(start_paused = true)]
async fn test_tab_switch_keeps_freeze_and_drops_feedback() {
    let mut h = Harness::new(Arc::new(RecordingClipboard::new()));

    h.press('p');
    h.send(Message::ClipboardWriteSucceeded { mount_id: 0 });
    h.press('f');

    h.press('1');

    assert_eq!(h.state.route(), Route::Home);
    assert!(h.state.is_frozen());
    assert_eq!(h.state.screen.mode, PayMode::Card);
    assert!(!h.feedback_active());
    assert!(!h.ctx.feedback_timer.is_armed());

    // The cancelled timer never reports back
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(h.rx.try_recv().is_err());
}

#[tokio::test]
async fn test_quit_keys() {
    let mut h = Harness::new(Arc::new(RecordingClipboard::new()));
    h.press('q');
    assert!(h.state.should_quit());
}
