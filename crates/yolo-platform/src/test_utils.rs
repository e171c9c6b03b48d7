//! Test doubles for the platform collaborators
//!
//! The mockall mocks cover call-count assertions; these hand-written doubles
//! cover the cases where a test wants to read back what was written.

use std::sync::{Arc, Mutex};

use super::{ClipboardError, ClipboardWriter, NameGenerator};

/// Clipboard that remembers every text block written to it
#[derive(Debug, Clone, Default)]
pub struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// All texts written so far, oldest first
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl ClipboardWriter for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(text.to_string());
        }
        Ok(())
    }
}

/// Clipboard that always refuses the write
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedClipboard;

impl ClipboardWriter for DeniedClipboard {
    fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::NotAvailable)
    }
}

/// Name generator that always returns the same name
#[derive(Debug, Clone)]
pub struct FixedNameGenerator(pub String);

impl FixedNameGenerator {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl NameGenerator for FixedNameGenerator {
    fn generate_display_name(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_clipboard_keeps_order() {
        let clipboard = RecordingClipboard::new();
        clipboard.write_text("one").unwrap();
        clipboard.write_text("two").unwrap();
        assert_eq!(clipboard.writes(), vec!["one", "two"]);
    }

    #[test]
    fn test_clones_share_history() {
        let clipboard = RecordingClipboard::new();
        let clone = clipboard.clone();
        clone.write_text("shared").unwrap();
        assert_eq!(clipboard.writes(), vec!["shared"]);
    }

    #[test]
    fn test_denied_clipboard_errors() {
        assert!(DeniedClipboard.write_text("x").is_err());
    }

    #[test]
    fn test_fixed_name() {
        assert_eq!(
            FixedNameGenerator::new("Jane Doe").generate_display_name(),
            Some("Jane Doe".to_string())
        );
    }
}
