//! # yolo-platform - External Collaborators
//!
//! The two things YOLO Pay reaches outside the process for: the system
//! clipboard and a display-name generator. Both sit behind traits so the
//! app layer can be driven with mocks in tests.
//!
//! ## Public API
//!
//! ### Clipboard
//! - [`ClipboardWriter`] - Write a text block to the system clipboard
//! - [`SystemClipboard`] - OSC 52 / external tool implementation
//! - [`TerminalOutput`] - Queue for OSC 52 sequences the render loop writes
//! - [`BackendPreference`] - Configured backend choice
//!
//! ### Names
//! - [`NameGenerator`] - Produce a fresh display name
//! - [`RandomNameGenerator`] - Picks a first and last name with `rand`

pub mod clipboard;
pub mod names;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use clipboard::{
    encode_osc52, BackendPreference, ClipboardBackend, ClipboardError, ClipboardWriter,
    ExternalTool, SystemClipboard, TerminalOutput, MAX_OSC52_PAYLOAD,
};
pub use names::{NameGenerator, RandomNameGenerator};

#[cfg(any(test, feature = "test-helpers"))]
pub use clipboard::MockClipboardWriter;
#[cfg(any(test, feature = "test-helpers"))]
pub use names::MockNameGenerator;
