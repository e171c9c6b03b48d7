//! Abstract input key event, independent of terminal library.
//!
//! `InputKey` keeps yolo-app free of crossterm types; the TUI converts
//! crossterm key events at its boundary and the headless path never needs
//! a terminal at all.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+a, Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Left,
    Right,

    // Action keys
    Esc,
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
}
