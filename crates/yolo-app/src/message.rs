//! Message types for the application (TEA pattern)

use yolo_core::Route;

use crate::input_key::InputKey;
use crate::view_state::PayMode;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (status bar clock)
    Tick,

    /// Request to quit
    RequestQuit,

    /// Force quit (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Card Messages
    // ─────────────────────────────────────────────────────────
    /// Flip between active and frozen
    ToggleFreeze,

    /// Select a payment mode
    SetMode(PayMode),

    /// Select the other payment mode
    CycleMode,

    /// Copy card details to the clipboard (no-op while frozen)
    CopyDetails,

    /// Clipboard write finished for the given screen mount
    ClipboardWriteSucceeded { mount_id: u64 },

    /// Clipboard write failed for the given screen mount
    ClipboardWriteFailed { mount_id: u64, reason: String },

    /// Feedback timer fired for the given activation
    CopyFeedbackExpired { generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Go to a route
    Navigate(Route),

    /// Select a bottom navigation tab by index
    SelectTab(usize),

    /// Next tab (wraps)
    NextTab,

    /// Previous tab (wraps)
    PrevTab,
}
